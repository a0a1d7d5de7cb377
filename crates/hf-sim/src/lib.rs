//! Two-reservoir Fourier conduction simulator.
//!
//! Provides:
//! - Material table with tabulated thermal conductivities
//! - Conductor and exhaustible reservoir parameters
//! - Discrete Fourier-law step update with entropy accounting
//! - Scenario schema (serde) with reference defaults and validation
//! - Bounded run loop with equilibrium termination

pub mod conductor;
pub mod error;
pub mod material;
pub mod model;
pub mod reservoir;
pub mod scenario;
pub mod sim;

// Re-exports for public API
pub use conductor::Conductor;
pub use error::{SimError, SimResult};
pub use material::Material;
pub use model::{SimState, StepRecord, TwoReservoirModel};
pub use reservoir::Reservoir;
pub use scenario::{ConductorDef, ReservoirDef, Scenario};
pub use sim::{RunSummary, Simulation, run_collect};
