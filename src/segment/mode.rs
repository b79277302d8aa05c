use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Traversal policy for a segmentation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Every run, tiling the whole input.
    #[default]
    All,
    /// Letter runs only.
    Alpha,
    /// Letter and digit runs only.
    Alphanumeric,
    /// Every run, produced on demand.
    Lazy,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::All => "all",
            Mode::Alpha => "alpha",
            Mode::Alphanumeric => "alnum",
            Mode::Lazy => "lazy",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown mode: {0} (expected all, alpha, alnum or lazy)")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "full" => Ok(Mode::All),
            "alpha" => Ok(Mode::Alpha),
            "alnum" | "alphanumeric" => Ok(Mode::Alphanumeric),
            "lazy" => Ok(Mode::Lazy),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode_names() {
        assert_eq!("all".parse(), Ok(Mode::All));
        assert_eq!("alpha".parse(), Ok(Mode::Alpha));
        assert_eq!("alnum".parse(), Ok(Mode::Alphanumeric));
        assert_eq!("lazy".parse(), Ok(Mode::Lazy));
    }

    #[test]
    fn test_parse_mode_aliases_and_case() {
        assert_eq!("full".parse(), Ok(Mode::All));
        assert_eq!("Alphanumeric".parse(), Ok(Mode::Alphanumeric));
        assert_eq!(" LAZY ".parse(), Ok(Mode::Lazy));
    }

    #[test]
    fn test_parse_mode_unknown() {
        let err = "words".parse::<Mode>().unwrap_err();
        assert_eq!(err, ParseModeError("words".to_string()));
    }

    #[test]
    fn test_mode_display_parses_back() {
        for mode in [Mode::All, Mode::Alpha, Mode::Alphanumeric, Mode::Lazy] {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }

    #[test]
    fn test_default_mode_is_all() {
        assert_eq!(Mode::default(), Mode::All);
    }
}
