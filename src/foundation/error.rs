/// Convenience result type used across the crate.
pub type SynthResult<T> = Result<T, SynthError>;

/// Top-level error taxonomy used by synthesis, sequencing and coordinate APIs.
#[derive(thiserror::Error, Debug)]
pub enum SynthError {
    /// A requested width or height was zero or did not fit in memory.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// The compositor was handed no frames.
    #[error("empty frame sequence: at least one frame is required")]
    EmptyFrameSequence,

    /// A point was given in a shape the coordinate mapper does not project.
    #[error("unsupported point type: {0}")]
    UnsupportedPointType(String),

    /// One or more partition workers failed; every worker was joined before this was returned.
    ///
    /// `worker` is the lowest-indexed failing worker, `failed` the total number of failures.
    #[error("worker failure: worker {worker} ({failed} failed): {message}")]
    WorkerFailure {
        /// Index of the first failing worker.
        worker: usize,
        /// Number of workers that failed.
        failed: usize,
        /// Failure message of `worker`.
        message: String,
    },

    /// Two buffers that must share a size did not.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A renderer failed to paint its current state.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SynthError {
    /// Build a [`SynthError::InvalidDimension`] value.
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    /// Build a [`SynthError::UnsupportedPointType`] value.
    pub fn unsupported_point(msg: impl Into<String>) -> Self {
        Self::UnsupportedPointType(msg.into())
    }

    /// Build a [`SynthError::DimensionMismatch`] value.
    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }

    /// Build a [`SynthError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SynthError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SynthError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
