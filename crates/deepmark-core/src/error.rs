//! Error taxonomy for the annotation core.

use thiserror::Error;

/// Errors raised by coordinate conversions and gesture handling.
///
/// None of these are fatal: every variant is recovered at the boundary
/// where it occurs, so a malformed input event can never break the
/// interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnnotationError {
    /// A conversion or draw start was attempted before an image is open.
    #[error("no image loaded")]
    NoImageLoaded,
    /// A finalize step ran with no matching in-progress shape
    /// (e.g. a spurious pointer-up).
    #[error("no in-progress shape to finalize")]
    MalformedTempState,
    /// A pointer sample or projected point was non-finite
    /// (e.g. a missing touch point).
    #[error("non-finite coordinates in gesture input")]
    InvalidGeometry,
}

/// Result type for annotation core operations.
pub type AnnotationResult<T> = Result<T, AnnotationError>;
