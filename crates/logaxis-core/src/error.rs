// File: crates/logaxis-core/src/error.rs
// Summary: Error type shared by configuration, controls, shell, and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Axis-type selection outside {"linear", "logarithmic"}.
    #[error("yAxis type must be either linear or logarithmic (got {0:?})")]
    InvalidAxisType(String),

    #[error("growth parameter must be a finite, non-negative number (got {0})")]
    InvalidGrowth(f64),

    #[error("unrecognized color {0:?}")]
    InvalidColor(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error("failed to serialize chart options: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
