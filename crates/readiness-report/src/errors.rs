use thiserror::Error;

/// Errors emitted by the scoring and aggregation engine.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Reports with different key sets must never be merged.
    #[error("report shape mismatch: {0}")]
    ShapeMismatch(String),
    /// Averaging requires at least one report.
    #[error("no reports to average")]
    EmptyBatch,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
