use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Character class shared by every character of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Alpha,
    Digit,
    Space,
    Punct,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Alpha,
        Category::Digit,
        Category::Space,
        Category::Punct,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Alpha => "alpha",
            Category::Digit => "digit",
            Category::Space => "space",
            Category::Punct => "punct",
            Category::Other => "other",
        }
    }

    /// True for the categories kept by alphanumeric segmentation.
    pub fn is_alphanumeric(self) -> bool {
        matches!(self, Category::Alpha | Category::Digit)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown category: {0}")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Maps a single character to its [`Category`].
///
/// Implementations must be pure: the segmenter classifies each character once
/// and trusts the answer for the lifetime of the produced tokens.
pub trait Classify {
    fn classify(&self, c: char) -> Category;
}

impl<F> Classify for F
where
    F: Fn(char) -> Category,
{
    fn classify(&self, c: char) -> Category {
        self(c)
    }
}

/// Classifier backed by the Unicode character database.
///
/// Letters are the `L*` general categories, digits are `Nd` plus the `No`
/// characters that carry a digit value (superscripts, circled digits and the
/// like), whitespace is the `White_Space` property plus the information
/// separators U+001C..U+001F, and punctuation is the `P*` group. The first
/// matching class wins, in that order. Combining marks, letter-like numbers
/// and fractions all end up as `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeClassifier;

impl Classify for UnicodeClassifier {
    fn classify(&self, c: char) -> Category {
        classify(c)
    }
}

pub fn classify(c: char) -> Category {
    let general = get_general_category(c);

    if is_letter(general) {
        Category::Alpha
    } else if is_digit(c, general) {
        Category::Digit
    } else if is_space(c) {
        Category::Space
    } else if is_punctuation(general) {
        Category::Punct
    } else {
        Category::Other
    }
}

fn is_letter(general: GeneralCategory) -> bool {
    matches!(
        general,
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// `No` characters whose numeric value is a single digit.
const DIGIT_VALUED_OTHER_NUMBERS: &[(char, char)] = &[
    ('\u{00B2}', '\u{00B3}'),
    ('\u{00B9}', '\u{00B9}'),
    ('\u{1369}', '\u{1371}'),
    ('\u{19DA}', '\u{19DA}'),
    ('\u{2070}', '\u{2070}'),
    ('\u{2074}', '\u{2079}'),
    ('\u{2080}', '\u{2089}'),
    ('\u{2460}', '\u{2468}'),
    ('\u{2474}', '\u{247C}'),
    ('\u{2488}', '\u{2490}'),
    ('\u{24EA}', '\u{24EA}'),
    ('\u{24F5}', '\u{24FD}'),
    ('\u{24FF}', '\u{24FF}'),
    ('\u{2776}', '\u{277E}'),
    ('\u{2780}', '\u{2788}'),
    ('\u{278A}', '\u{2792}'),
    ('\u{10A40}', '\u{10A43}'),
    ('\u{10E60}', '\u{10E68}'),
    ('\u{11052}', '\u{1105A}'),
    ('\u{1F100}', '\u{1F10A}'),
];

fn is_digit(c: char, general: GeneralCategory) -> bool {
    match general {
        GeneralCategory::DecimalNumber => true,
        GeneralCategory::OtherNumber => DIGIT_VALUED_OTHER_NUMBERS
            .iter()
            .any(|&(lo, hi)| (lo..=hi).contains(&c)),
        _ => false,
    }
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

fn is_punctuation(general: GeneralCategory) -> bool {
    matches!(
        general,
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}
