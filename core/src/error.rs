use thiserror::Error;

#[derive(Error, Debug)]
pub enum VizError {
    #[error("malformed snapshot at tick {tick}: {reason}")]
    MalformedSnapshot { tick: usize, reason: String },

    #[error(
        "non-contiguous tick sequence: snapshot {index} declares tick {actual}, expected {expected}"
    )]
    NonContiguousTick {
        index: usize,
        expected: u64,
        actual: u64,
    },

    #[error("no tick snapshots supplied")]
    EmptyInput,

    #[error("frame index {index} out of range: aligned table has {frames} rows")]
    FrameIndex { index: usize, frames: usize },

    #[error("chart output failed: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VizError {
    /// Wrap a plotters backend or drawing failure. The sink error message is
    /// surfaced unchanged; nothing is retried.
    pub fn render(err: impl std::fmt::Display) -> Self {
        VizError::Render(err.to_string())
    }
}

pub type VizResult<T> = Result<T, VizError>;
