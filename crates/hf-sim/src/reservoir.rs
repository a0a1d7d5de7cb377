//! Exhaustible thermal reservoir.

use crate::error::{SimError, SimResult};

/// Fixed parameters of one reservoir. The stored energy itself is part of
/// the mutable simulation state; temperature and entropy are always derived
/// from an energy, never stored.
#[derive(Debug, Clone)]
pub struct Reservoir {
    /// Name for diagnostics ("hot" / "cold").
    pub name: &'static str,
    /// Volume in m³.
    pub volume_m3: f64,
    /// Volumetric specific heat in J/(K·m³).
    pub specific_heat_j_per_m3_k: f64,
    /// Energy content at t = 0, in J.
    pub initial_energy_j: f64,
}

impl Reservoir {
    pub fn new(
        name: &'static str,
        volume_m3: f64,
        specific_heat_j_per_m3_k: f64,
        initial_energy_j: f64,
    ) -> SimResult<Self> {
        let check = |field: &str, value: f64| -> SimResult<()> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(SimError::InvalidValue {
                    field: format!("{name}.{field}"),
                    value,
                    reason: "must be positive and finite",
                })
            }
        };
        check("volume_m3", volume_m3)?;
        check("specific_heat_j_per_m3_k", specific_heat_j_per_m3_k)?;
        // A zero initial energy means a zero initial temperature, which the
        // entropy flow terms divide by.
        check("energy_j", initial_energy_j)?;

        Ok(Self {
            name,
            volume_m3,
            specific_heat_j_per_m3_k,
            initial_energy_j,
        })
    }

    /// Total heat capacity of the reservoir in J/K.
    pub fn heat_capacity_j_per_k(&self) -> f64 {
        self.volume_m3 * self.specific_heat_j_per_m3_k
    }

    /// Temperature in K for a given stored energy.
    pub fn temperature_k(&self, energy_j: f64) -> f64 {
        energy_j / self.heat_capacity_j_per_k()
    }

    /// Entropy in J/K for a given stored energy.
    pub fn entropy_j_per_k(&self, energy_j: f64) -> f64 {
        energy_j / self.temperature_k(energy_j)
    }
}
