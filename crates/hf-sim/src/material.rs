//! Conductor material table.

use std::fmt;
use std::str::FromStr;

use hf_core::units::{ThermalConductivity, w_per_m_k};
use serde::{Deserialize, Serialize};
use uom::si::thermal_conductivity::watt_per_meter_kelvin;

use crate::error::SimError;

/// Materials with tabulated thermal conductivity. There is no fallback
/// conductivity; anything outside this set is a configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Iron,
    Copper,
    Wood,
}

impl Material {
    pub const ALL: [Material; 3] = [Material::Iron, Material::Copper, Material::Wood];

    /// Thermal conductivity in W/(m·K).
    pub fn conductivity(self) -> ThermalConductivity {
        match self {
            Material::Iron => w_per_m_k(80.0),
            Material::Copper => w_per_m_k(400.0),
            Material::Wood => w_per_m_k(0.08),
        }
    }

    /// Raw conductivity value for display.
    pub fn conductivity_w_per_m_k(self) -> f64 {
        self.conductivity().get::<watt_per_meter_kelvin>()
    }

    pub fn name(self) -> &'static str {
        match self {
            Material::Iron => "iron",
            Material::Copper => "copper",
            Material::Wood => "wood",
        }
    }
}

impl FromStr for Material {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iron" => Ok(Material::Iron),
            "copper" => Ok(Material::Copper),
            "wood" => Ok(Material::Wood),
            other => Err(SimError::UnknownMaterial {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
