pub mod category;
pub mod error;
pub mod mode;
pub mod segmenter;
pub mod token;

pub use category::{classify, Category, Classify, UnicodeClassifier};
pub use error::{validate_text, SegmentError};
pub use mode::Mode;
pub use segmenter::{
    tokenize, tokenize_alpha, tokenize_alphanumeric, tokenize_bytes, tokenize_lazy, Segmenter,
    Tokens,
};
pub use token::Token;
