use std::str::Utf8Error;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// Input handed over as raw bytes was not a UTF-8 string.
    #[error("Only strings can be tokenized: {0}")]
    InvalidInputType(#[from] Utf8Error),
}

/// Validates raw bytes as text before segmentation.
pub fn validate_text(bytes: &[u8]) -> Result<&str, SegmentError> {
    Ok(std::str::from_utf8(bytes)?)
}
