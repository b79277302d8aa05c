use super::category::Category;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;

/// A maximal run of same-category characters within a borrowed source string.
///
/// `start` and `end` count Unicode scalar values, not bytes. The byte range is
/// kept alongside so that [`Token::text`] slices without rescanning.
#[derive(Debug, Clone, Copy)]
pub struct Token<'a> {
    start: usize,
    end: usize,
    bytes: (usize, usize),
    source: &'a str,
    category: Category,
}

impl<'a> Token<'a> {
    pub(crate) fn new(
        source: &'a str,
        chars: Range<usize>,
        bytes: Range<usize>,
        category: Category,
    ) -> Self {
        debug_assert!(chars.start < chars.end);
        debug_assert!(bytes.end <= source.len());
        Self {
            start: chars.start,
            end: chars.end,
            bytes: (bytes.start, bytes.end),
            source,
            category,
        }
    }

    /// Index of the first character of the run.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index one past the last character of the run.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The whole string this token was cut from.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Number of characters in the run.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false: the segmenter never produces empty runs.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn byte_range(&self) -> Range<usize> {
        self.bytes.0..self.bytes.1
    }

    /// The characters of the run, borrowed from the source.
    pub fn text(&self) -> &'a str {
        &self.source[self.byte_range()]
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.category == other.category
            && self.source == other.source
    }
}

impl Eq for Token<'_> {}

impl Hash for Token<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        self.category.hash(state);
        self.source.hash(state);
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: [{}:{}], {}",
            self.text(),
            self.start,
            self.end,
            self.category
        )
    }
}
