//! Two exhaustible reservoirs joined by a single conductor.

use hf_core::ensure_finite;
use uom::si::thermal_conductance::watt_per_kelvin;

use crate::conductor::Conductor;
use crate::error::SimResult;
use crate::reservoir::Reservoir;

/// Mutable per-run state. Temperatures and entropies are derived from the
/// energies on demand; only energies and running sums are stored.
#[derive(Debug, Clone)]
pub struct SimState {
    /// Step counter, starts at 0 and increments by 1 per executed step.
    pub time: u64,
    pub hot_energy_j: f64,
    pub cold_energy_j: f64,
    pub cum_heat_flow_j: f64,
    pub cum_entropy_change_j_per_k: f64,
}

/// One emitted row per executed step.
///
/// `hot_temp_k`, `cold_temp_k` and `temp_diff_k` are the start-of-step
/// values that drove the step's heat flow; the entropy flows are evaluated
/// at the end-of-step temperatures.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    pub time: u64,
    pub hot_temp_k: f64,
    pub cold_temp_k: f64,
    pub temp_diff_k: f64,
    pub heat_flow_j: f64,
    pub cum_heat_flow_j: f64,
    pub entropy_flow_hot_j_per_k: f64,
    pub entropy_flow_cold_j_per_k: f64,
    pub entropy_change_j_per_k: f64,
    pub cum_entropy_change_j_per_k: f64,
}

/// The simulated system: conductor parameters plus both reservoirs.
#[derive(Debug, Clone)]
pub struct TwoReservoirModel {
    pub conductor: Conductor,
    pub hot: Reservoir,
    pub cold: Reservoir,
    g_w_per_k: f64,
}

impl TwoReservoirModel {
    pub fn new(conductor: Conductor, hot: Reservoir, cold: Reservoir) -> Self {
        let g_w_per_k = conductor.conductance().get::<watt_per_kelvin>();
        Self {
            conductor,
            hot,
            cold,
            g_w_per_k,
        }
    }

    /// Thermal conductance of the conductor in W/K.
    pub fn conductance_w_per_k(&self) -> f64 {
        self.g_w_per_k
    }

    pub fn initial_state(&self) -> SimState {
        SimState {
            time: 0,
            hot_energy_j: self.hot.initial_energy_j,
            cold_energy_j: self.cold.initial_energy_j,
            cum_heat_flow_j: 0.0,
            cum_entropy_change_j_per_k: 0.0,
        }
    }

    pub fn hot_temp_k(&self, state: &SimState) -> f64 {
        self.hot.temperature_k(state.hot_energy_j)
    }

    pub fn cold_temp_k(&self, state: &SimState) -> f64 {
        self.cold.temperature_k(state.cold_energy_j)
    }

    /// Advance the state by one step of the discrete conduction law.
    ///
    /// The caller is responsible for the `cold < hot` guard; this function
    /// applies the update unconditionally:
    ///
    /// 1. heat flow q = G · (T_hot − T_cold) · dt
    /// 2. move q from the hot reservoir to the cold one (exact conservation)
    /// 3. entropy flows −q/T_hot and +q/T_cold at the updated temperatures
    pub fn step(&self, state: &mut SimState, dt_s: f64) -> SimResult<StepRecord> {
        let hot_temp = self.hot_temp_k(state);
        let cold_temp = self.cold_temp_k(state);
        let temp_diff = hot_temp - cold_temp;

        let heat_flow = self.g_w_per_k * temp_diff * dt_s;
        ensure_finite(heat_flow, "heat flow")?;

        state.cum_heat_flow_j += heat_flow;
        state.hot_energy_j -= heat_flow;
        state.cold_energy_j += heat_flow;

        let hot_temp_after = self.hot_temp_k(state);
        let cold_temp_after = self.cold_temp_k(state);

        let entropy_flow_hot = -heat_flow / hot_temp_after;
        let entropy_flow_cold = heat_flow / cold_temp_after;
        let entropy_change = entropy_flow_hot + entropy_flow_cold;
        ensure_finite(entropy_change, "entropy change")?;

        state.cum_entropy_change_j_per_k += entropy_change;

        let record = StepRecord {
            time: state.time,
            hot_temp_k: hot_temp,
            cold_temp_k: cold_temp,
            temp_diff_k: temp_diff,
            heat_flow_j: heat_flow,
            cum_heat_flow_j: state.cum_heat_flow_j,
            entropy_flow_hot_j_per_k: entropy_flow_hot,
            entropy_flow_cold_j_per_k: entropy_flow_cold,
            entropy_change_j_per_k: entropy_change,
            cum_entropy_change_j_per_k: state.cum_entropy_change_j_per_k,
        };

        state.time += 1;
        Ok(record)
    }
}
