use super::{LoadError, LoadedDocument};
use crate::segment::SegmentError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a text file for segmentation.
///
/// Empty files are accepted and segment to no tokens. Content that is not
/// UTF-8 is rejected before any segmentation happens.
pub fn load(path: impl AsRef<Path>) -> Result<LoadedDocument, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input file");

    let text = String::from_utf8(bytes)
        .map_err(|err| SegmentError::InvalidInputType(err.utf8_error()))?;

    Ok(LoadedDocument {
        text,
        source: format!("file:{}", path.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_load_nonexistent_file() {
        let result = load("/nonexistent/path/input_12345.txt");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("valid.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all("eesti kiiking".as_bytes()).unwrap();

        let doc = load(&path).unwrap();
        assert_eq!(doc.text, "eesti kiiking");
        assert!(doc.source.starts_with("file:"));
        assert!(doc.source.ends_with("valid.txt"));
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        File::create(&path).unwrap();

        let doc = load(&path).unwrap();
        assert!(doc.text.is_empty());
    }

    #[test]
    fn test_load_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, [b'm', 0xe4, b'e']).unwrap();

        let result = load(&path);
        assert!(matches!(
            result,
            Err(LoadError::Segment(SegmentError::InvalidInputType(_)))
        ));
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(dir.path());
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
