use crate::segment::SegmentError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Segment(#[from] SegmentError),
}

/// Text read from an input source, ready for segmentation.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub text: String,
    /// Where the text came from, e.g. `file:notes.txt` or `stdin`.
    pub source: String,
}

pub mod file;
pub mod stdin;
