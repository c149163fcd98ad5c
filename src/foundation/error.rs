/// Convenience result type used across reelcast.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by composition APIs.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// A timing string did not split into two finite, non-negative numbers.
    #[error("malformed timing spec '{spec}' (expected \"<start>-<end>\" in seconds)")]
    MalformedTimingSpec {
        /// The offending timing string.
        spec: String,
    },

    /// A scene resolved to a zero or negative number of frames.
    #[error("invalid duration for scene {scene_index} (timing '{timing}'): end <= start")]
    InvalidSceneDuration {
        /// Index of the scene in document order.
        scene_index: usize,
        /// The scene's timing string.
        timing: String,
    },

    /// Invalid user-provided or composition data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while evaluating timeline state for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::MalformedTimingSpec`] value.
    pub fn malformed_timing(spec: impl Into<String>) -> Self {
        Self::MalformedTimingSpec { spec: spec.into() }
    }

    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
