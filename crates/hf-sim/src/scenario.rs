//! Scenario schema, defaults, and validation.

use hf_core::ensure_positive;
use serde::{Deserialize, Serialize};

use crate::conductor::Conductor;
use crate::error::SimResult;
use crate::material::Material;
use crate::model::TwoReservoirModel;
use crate::reservoir::Reservoir;

/// Complete configuration for one run. Every field has a default matching
/// the reference parameter set, so an empty YAML document is a valid
/// scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    /// Upper bound on the number of executed steps.
    #[serde(default = "default_periods")]
    pub periods: u64,
    /// Time step multiplier applied to the conduction law. 1.0 reproduces
    /// the unit-step behavior.
    #[serde(default = "default_dt_s")]
    pub dt_s: f64,
    #[serde(default)]
    pub conductor: ConductorDef,
    #[serde(default = "default_hot")]
    pub hot: ReservoirDef,
    #[serde(default = "default_cold")]
    pub cold: ReservoirDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConductorDef {
    #[serde(default = "default_material")]
    pub material: Material,
    #[serde(default = "default_area_m2")]
    pub area_m2: f64,
    #[serde(default = "default_length_m")]
    pub length_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservoirDef {
    pub volume_m3: f64,
    pub specific_heat_j_per_m3_k: f64,
    pub energy_j: f64,
}

fn default_periods() -> u64 {
    201
}

fn default_dt_s() -> f64 {
    1.0
}

fn default_material() -> Material {
    Material::Copper
}

fn default_area_m2() -> f64 {
    1.0
}

fn default_length_m() -> f64 {
    200.0
}

fn default_hot() -> ReservoirDef {
    ReservoirDef {
        volume_m3: 100.0,
        specific_heat_j_per_m3_k: 1.0,
        energy_j: 100_000.0,
    }
}

fn default_cold() -> ReservoirDef {
    ReservoirDef {
        volume_m3: 300.0,
        specific_heat_j_per_m3_k: 2.0,
        energy_j: 180_000.0,
    }
}

impl Default for ConductorDef {
    fn default() -> Self {
        Self {
            material: default_material(),
            area_m2: default_area_m2(),
            length_m: default_length_m(),
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            periods: default_periods(),
            dt_s: default_dt_s(),
            conductor: ConductorDef::default(),
            hot: default_hot(),
            cold: default_cold(),
        }
    }
}

impl Scenario {
    /// Resolve the scenario into a runnable model, failing fast on any
    /// degenerate parameter.
    pub fn compile(&self) -> SimResult<TwoReservoirModel> {
        ensure_positive(self.dt_s, "dt_s")?;

        let conductor = Conductor::new(
            self.conductor.material,
            self.conductor.area_m2,
            self.conductor.length_m,
        )?;
        let hot = Reservoir::new(
            "hot",
            self.hot.volume_m3,
            self.hot.specific_heat_j_per_m3_k,
            self.hot.energy_j,
        )?;
        let cold = Reservoir::new(
            "cold",
            self.cold.volume_m3,
            self.cold.specific_heat_j_per_m3_k,
            self.cold.energy_j,
        )?;

        Ok(TwoReservoirModel::new(conductor, hot, cold))
    }

    pub fn validate(&self) -> SimResult<()> {
        self.compile().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_parameters() {
        let scenario = Scenario::default();
        assert_eq!(scenario.periods, 201);
        assert_eq!(scenario.dt_s, 1.0);
        assert_eq!(scenario.conductor.material, Material::Copper);
        assert_eq!(scenario.conductor.area_m2, 1.0);
        assert_eq!(scenario.conductor.length_m, 200.0);
        assert_eq!(scenario.hot.energy_j, 100_000.0);
        assert_eq!(scenario.cold.energy_j, 180_000.0);
        scenario.validate().unwrap();
    }

    #[test]
    fn empty_yaml_is_the_default_scenario() {
        let scenario: Scenario = serde_yaml::from_str("{}").unwrap();
        assert_eq!(scenario, Scenario::default());
    }

    #[test]
    fn partial_yaml_overrides() {
        let yaml = "
periods: 10
conductor:
  material: wood
hot:
  volume_m3: 1.0
  specific_heat_j_per_m3_k: 1.0
  energy_j: 500.0
";
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.periods, 10);
        assert_eq!(scenario.conductor.material, Material::Wood);
        assert_eq!(scenario.conductor.length_m, 200.0);
        assert_eq!(scenario.hot.energy_j, 500.0);
        assert_eq!(scenario.cold, default_cold());
    }

    #[test]
    fn unknown_material_fails_to_parse() {
        let yaml = "
conductor:
  material: air
";
        assert!(serde_yaml::from_str::<Scenario>(yaml).is_err());
    }

    #[test]
    fn degenerate_values_fail_validation() {
        let mut scenario = Scenario::default();
        scenario.cold.specific_heat_j_per_m3_k = 0.0;
        let err = scenario.validate().unwrap_err();
        assert!(format!("{err}").contains("cold.specific_heat_j_per_m3_k"));

        let mut scenario = Scenario::default();
        scenario.dt_s = 0.0;
        assert!(scenario.validate().is_err());

        let mut scenario = Scenario::default();
        scenario.hot.energy_j = -1.0;
        assert!(scenario.validate().is_err());
    }
}
