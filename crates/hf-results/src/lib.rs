//! hf-results: run output sinks and provenance.

pub mod manifest;
pub mod sink;

pub use manifest::{RunManifest, compute_run_id};
pub use sink::CsvSink;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
