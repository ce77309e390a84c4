//! Error types for dataset decoding, shape validation and weight persistence.

use thiserror::Error;

/// Result type alias for digitnet operations.
pub type Result<T> = std::result::Result<T, DigitnetError>;

/// Errors that can occur while loading data or persisting weights.
///
/// All of these are fatal to the operation that raised them; there is no
/// retry and no partial result. A rejected weight update (candidate outside
/// the admission band) is a normal per-element policy, not an error.
#[derive(Debug, Error)]
pub enum DigitnetError {
    /// An IDX container whose magic word does not match the expected tag.
    #[error("bad IDX magic word: expected {expected}, found {found}")]
    BadMagic { expected: u32, found: u32 },

    /// A weight snapshot with a missing or non-numeric line.
    #[error("malformed snapshot: {reason}")]
    MalformedSnapshot { reason: String },

    /// Underlying read/write failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// An image/label pairing with differing counts.
    #[error("dataset shape mismatch: {images} images vs {labels} labels")]
    ShapeMismatch { images: usize, labels: usize },
}
