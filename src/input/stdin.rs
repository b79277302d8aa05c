use super::{LoadError, LoadedDocument};
use crate::segment::SegmentError;
use std::io::Read;
use tracing::debug;

/// Read all of `reader` (normally standard input) as one document.
pub fn load(mut reader: impl Read) -> Result<LoadedDocument, LoadError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    debug!(bytes = bytes.len(), "read standard input");

    let text = String::from_utf8(bytes)
        .map_err(|err| SegmentError::InvalidInputType(err.utf8_error()))?;

    Ok(LoadedDocument {
        text,
        source: "stdin".to_string(),
    })
}
