use thiserror::Error;

/// Error types for building animation data and driver state
///
/// Pose evaluation itself never fails; these cover the checked constructors
/// for tracks, clips and playback settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimError {
    /// A joint track was built from the wrong number of samples
    #[error("Track length mismatch: expected {expected} samples, got {actual}")]
    TrackLength { expected: usize, actual: usize },

    /// Cycle duration must be positive and finite
    #[error("Invalid cycle duration: {0} seconds")]
    InvalidCycleDuration(f32),

    /// Playback speed must be non-negative and finite
    #[error("Invalid playback speed: {0}")]
    InvalidSpeed(f32),
}

/// Result type using AnimError
pub type Result<T> = std::result::Result<T, AnimError>;
