use super::category::{Category, Classify, UnicodeClassifier};
use super::error::{validate_text, SegmentError};
use super::mode::Mode;
use super::token::Token;
use std::iter::FusedIterator;
use std::str::CharIndices;
use tracing::{debug, trace};

/// Splits text into runs of same-category characters.
///
/// All four traversal policies share one scanner, [`Tokens`]; the eager
/// variants only filter and collect what it yields.
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter<C = UnicodeClassifier> {
    classifier: C,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::with_classifier(UnicodeClassifier)
    }
}

impl<C: Classify> Segmenter<C> {
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Every maximal run, covering the whole input in order.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        self.collect(text, Mode::All, |_| true)
    }

    /// Letter runs only; everything else acts as a separator.
    pub fn tokenize_alpha<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        self.collect(text, Mode::Alpha, |category| category == Category::Alpha)
    }

    /// Letter and digit runs only.
    pub fn tokenize_alphanumeric<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        self.collect(text, Mode::Alphanumeric, Category::is_alphanumeric)
    }

    /// Same tokens as [`Segmenter::tokenize`], scanned one run per `next()`.
    pub fn tokenize_lazy<'a>(&self, text: &'a str) -> Tokens<'a, C>
    where
        C: Clone,
    {
        Tokens::new(text, self.classifier.clone())
    }

    /// Segments `text` with the traversal policy named by `mode`.
    pub fn segment<'a>(&self, text: &'a str, mode: Mode) -> Vec<Token<'a>> {
        match mode {
            Mode::All => self.tokenize(text),
            Mode::Alpha => self.tokenize_alpha(text),
            Mode::Alphanumeric => self.tokenize_alphanumeric(text),
            Mode::Lazy => {
                let classifier = |c: char| self.classifier.classify(c);
                Tokens::new(text, classifier).collect()
            }
        }
    }

    /// Segments raw bytes, rejecting anything that is not UTF-8.
    pub fn segment_bytes<'a>(
        &self,
        bytes: &'a [u8],
        mode: Mode,
    ) -> Result<Vec<Token<'a>>, SegmentError> {
        let text = validate_text(bytes)?;
        Ok(self.segment(text, mode))
    }

    fn collect<'a>(
        &self,
        text: &'a str,
        mode: Mode,
        keep: impl Fn(Category) -> bool,
    ) -> Vec<Token<'a>> {
        if text.is_empty() {
            return Vec::new();
        }

        let classifier = |c: char| self.classifier.classify(c);
        let tokens: Vec<Token<'a>> = Tokens::new(text, classifier)
            .filter(|token| keep(token.category()))
            .collect();

        debug!(
            mode = %mode,
            bytes = text.len(),
            tokens = tokens.len(),
            "segmented text"
        );
        tokens
    }
}

/// First character of the run that has not been emitted yet.
#[derive(Debug, Clone, Copy)]
struct RunStart {
    index: usize,
    byte: usize,
    category: Category,
}

/// Lazy sequence of tokens over one source string.
///
/// Each character is classified exactly once. A run is closed when the next
/// character's category differs from the run's, and the token carries the
/// category of the run's own characters, never the one that closed it.
#[derive(Debug, Clone)]
pub struct Tokens<'a, C> {
    source: &'a str,
    chars: CharIndices<'a>,
    classifier: C,
    pending: Option<RunStart>,
    next_index: usize,
}

impl<'a, C: Classify> Tokens<'a, C> {
    pub fn new(source: &'a str, classifier: C) -> Self {
        let mut chars = source.char_indices();
        let pending = chars.next().map(|(byte, c)| RunStart {
            index: 0,
            byte,
            category: classifier.classify(c),
        });

        Self {
            source,
            chars,
            classifier,
            pending,
            next_index: 1,
        }
    }

    /// The string being segmented.
    pub fn source(&self) -> &'a str {
        self.source
    }

    fn emit(source: &'a str, run: RunStart, end: usize, byte_end: usize) -> Token<'a> {
        trace!(
            start = run.index,
            end,
            category = %run.category,
            "run boundary"
        );
        Token::new(source, run.index..end, run.byte..byte_end, run.category)
    }
}

impl<'a, C: Classify> Iterator for Tokens<'a, C> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let run = self.pending.take()?;

        for (byte, c) in self.chars.by_ref() {
            let index = self.next_index;
            self.next_index += 1;

            let category = self.classifier.classify(c);
            if category != run.category {
                self.pending = Some(RunStart {
                    index,
                    byte,
                    category,
                });
                return Some(Self::emit(self.source, run, index, byte));
            }
        }

        Some(Self::emit(self.source, run, self.next_index, self.source.len()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.pending {
            None => (0, Some(0)),
            Some(_) => {
                // Every remaining character could open a run of its own.
                let (_, upper) = self.chars.size_hint();
                (1, upper.map(|n| n + 1))
            }
        }
    }
}

impl<C: Classify> FusedIterator for Tokens<'_, C> {}

/// Every maximal run of `text`, classified with [`UnicodeClassifier`].
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    Segmenter::new().tokenize(text)
}

/// Letter runs of `text` only.
pub fn tokenize_alpha(text: &str) -> Vec<Token<'_>> {
    Segmenter::new().tokenize_alpha(text)
}

/// Letter and digit runs of `text` only.
pub fn tokenize_alphanumeric(text: &str) -> Vec<Token<'_>> {
    Segmenter::new().tokenize_alphanumeric(text)
}

/// Lazily yields every maximal run of `text`.
pub fn tokenize_lazy(text: &str) -> Tokens<'_, UnicodeClassifier> {
    Tokens::new(text, UnicodeClassifier)
}

/// Like [`tokenize`], for input that has not been validated as UTF-8 yet.
pub fn tokenize_bytes(bytes: &[u8]) -> Result<Vec<Token<'_>>, SegmentError> {
    Segmenter::new().segment_bytes(bytes, Mode::All)
}
