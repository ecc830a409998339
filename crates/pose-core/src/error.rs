use thiserror::Error;

/// Domain errors reported by the pose algebra.
///
/// None of the operations retry or recover; a malformed input is returned to
/// the caller instead of propagating as NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoseError {
    #[error("non-finite component in {0}")]
    NonFinite(&'static str),
    #[error("zero-norm quaternion")]
    ZeroNormQuaternion,
    #[error("expected buffer of length {expected}, got {got}")]
    BufferLength { expected: usize, got: usize },
}
