//! Lexical segmentation of text into runs of same-category characters.
//!
//! Every character is classified as a letter, digit, whitespace, punctuation
//! or other, and maximal runs of one class become [`Token`]s that borrow the
//! source string.
//!
//! ```
//! use catseg::{tokenize_alphanumeric, Category};
//!
//! let tokens = tokenize_alphanumeric("October 3rd, 2019");
//! let words: Vec<_> = tokens.iter().map(|t| (t.text(), t.category())).collect();
//! assert_eq!(
//!     words,
//!     [
//!         ("October", Category::Alpha),
//!         ("3", Category::Digit),
//!         ("rd", Category::Alpha),
//!         ("2019", Category::Digit),
//!     ]
//! );
//! ```

pub mod app;
pub mod config;
pub mod input;
pub mod render;
pub mod repl;
pub mod segment;

pub use segment::{
    classify, tokenize, tokenize_alpha, tokenize_alphanumeric, tokenize_bytes, tokenize_lazy,
    Category, Classify, Mode, SegmentError, Segmenter, Token, Tokens, UnicodeClassifier,
};
