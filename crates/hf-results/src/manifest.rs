//! Run provenance manifest.

use std::fs;
use std::path::Path;

use chrono::Utc;
use hf_sim::{RunSummary, Scenario};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::ResultsResult;

pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Written next to the CSV after a run so the output can be attributed to
/// the exact configuration that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct RunManifest {
    pub run_id: String,
    pub timestamp: String,
    pub tool_version: String,
    pub scenario: Scenario,
    pub steps_executed: u64,
    pub equilibrium_reached: bool,
    pub final_hot_temp_k: f64,
    pub final_cold_temp_k: f64,
}

/// Content-based run id: identical scenarios hash to identical ids.
pub fn compute_run_id(scenario: &Scenario, tool_version: &str) -> String {
    let mut hasher = Sha256::new();

    let scenario_json = serde_json::to_string(scenario).unwrap_or_default();
    hasher.update(scenario_json.as_bytes());
    hasher.update(tool_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

impl RunManifest {
    pub fn for_run(scenario: &Scenario, summary: &RunSummary) -> Self {
        Self {
            run_id: compute_run_id(scenario, TOOL_VERSION),
            timestamp: Utc::now().to_rfc3339(),
            tool_version: TOOL_VERSION.to_string(),
            scenario: scenario.clone(),
            steps_executed: summary.steps_executed,
            equilibrium_reached: summary.equilibrium_reached,
            final_hot_temp_k: summary.final_hot_temp_k,
            final_cold_temp_k: summary.final_cold_temp_k,
        }
    }

    pub fn write(&self, path: &Path) -> ResultsResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
