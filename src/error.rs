use thiserror::Error;

/// Failures surfaced by the sketching routines.
///
/// Invalid arguments are rejected at the call boundary; numeric failure
/// inside the solver propagates as [`SketchError::Diverged`]. There is no
/// retry or recovery layer, every error is fatal to the call.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("image has no pixels")]
    EmptyImage,

    #[error("rank k={k} is out of range (expected 1..={max})")]
    RankOutOfRange { k: usize, max: usize },

    #[error("penalty weight alpha={0} must be finite and non-negative")]
    InvalidPenalty(f64),

    #[error("input contains non-finite values")]
    NonFiniteInput,

    #[error("solver produced non-finite iterates")]
    Diverged,
}

pub type Result<T> = std::result::Result<T, SketchError>;
