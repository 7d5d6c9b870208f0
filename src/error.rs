//! Error types for sentence segmentation

use thiserror::Error;

/// Error type for segmenter construction.
///
/// Segmentation itself is infallible; errors can only arise while building a
/// [`Segmenter`](crate::Segmenter) from user-supplied resources.
#[derive(Debug, Error)]
pub enum Error {
    /// An abbreviation dictionary document could not be parsed
    #[error("invalid abbreviation dictionary: {0}")]
    Dictionary(String),
}

/// Result type for segmenter construction
pub type Result<T> = std::result::Result<T, Error>;
