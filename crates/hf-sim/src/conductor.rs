//! Thermal conductor bridging the two reservoirs.

use hf_core::units::{Area, Length, ThermalConductance, m, m2};

use crate::error::{SimError, SimResult};
use crate::material::Material;

/// Conductor geometry and material. Immutable for the run.
#[derive(Debug, Clone)]
pub struct Conductor {
    pub material: Material,
    pub area: Area,
    pub length: Length,
}

impl Conductor {
    pub fn new(material: Material, area_m2: f64, length_m: f64) -> SimResult<Self> {
        if !(area_m2 > 0.0 && area_m2.is_finite()) {
            return Err(SimError::InvalidValue {
                field: "conductor.area_m2".to_string(),
                value: area_m2,
                reason: "must be positive and finite",
            });
        }
        if !(length_m > 0.0 && length_m.is_finite()) {
            return Err(SimError::InvalidValue {
                field: "conductor.length_m".to_string(),
                value: length_m,
                reason: "must be positive and finite",
            });
        }
        Ok(Self {
            material,
            area: m2(area_m2),
            length: m(length_m),
        })
    }

    /// Thermal conductance G = k·A/L in W/K.
    pub fn conductance(&self) -> ThermalConductance {
        self.material.conductivity() * self.area / self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::thermal_conductance::watt_per_kelvin;

    #[test]
    fn copper_bar_conductance() {
        let conductor = Conductor::new(Material::Copper, 1.0, 200.0).unwrap();
        let g = conductor.conductance().get::<watt_per_kelvin>();
        assert!((g - 2.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_degenerate_geometry() {
        assert!(Conductor::new(Material::Iron, 0.0, 200.0).is_err());
        assert!(Conductor::new(Material::Iron, 1.0, -5.0).is_err());
        assert!(Conductor::new(Material::Iron, f64::NAN, 1.0).is_err());
    }
}
