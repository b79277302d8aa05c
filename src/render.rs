//! Text reports for segmented tokens.
//!
//! Supports three layouts:
//! - `table` → aligned rows with category and spans, plus a summary line
//! - `json` → array of token objects
//! - `lines` → one escaped token text per line

use crate::config::OutputConfig;
use crate::segment::{Category, Token};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Table,
    Json,
    Lines,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Table => "table",
            Format::Json => "json",
            Format::Lines => "lines",
        };
        f.pad(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown format: {0} (expected table, json or lines)")]
pub struct ParseFormatError(String);

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Format::Table),
            "json" => Ok(Format::Json),
            "lines" => Ok(Format::Lines),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    text: &'a str,
    start: usize,
    end: usize,
    category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    byte_start: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    byte_end: Option<usize>,
}

impl<'a> TokenRecord<'a> {
    fn new(token: &Token<'a>, with_bytes: bool) -> Self {
        let bytes = token.byte_range();
        Self {
            text: token.text(),
            start: token.start(),
            end: token.end(),
            category: token.category(),
            byte_start: with_bytes.then_some(bytes.start),
            byte_end: with_bytes.then_some(bytes.end),
        }
    }
}

/// Render tokens in the layout selected by `config.format`.
pub fn render(tokens: &[Token<'_>], config: &OutputConfig) -> Result<String, RenderError> {
    match config.format {
        Format::Table => Ok(render_table(tokens, config)),
        Format::Json => render_json(tokens, config.show_bytes),
        Format::Lines => Ok(render_lines(tokens)),
    }
}

/// Token text quoted, with control characters and quotes escaped.
pub fn quote_text(text: &str) -> String {
    format!("\"{}\"", text.escape_debug())
}

pub fn render_table(tokens: &[Token<'_>], config: &OutputConfig) -> String {
    let mut lines = Vec::with_capacity(tokens.len() + 1);

    if tokens.is_empty() {
        lines.push("(no tokens)".to_string());
    }

    let quoted: Vec<String> = tokens.iter().map(|t| quote_text(t.text())).collect();
    let text_width = quoted
        .iter()
        .map(|q| q.width())
        .max()
        .unwrap_or(0)
        .min(config.max_text_width);
    let index_width = tokens.len().to_string().len();

    for (i, (token, text)) in tokens.iter().zip(&quoted).enumerate() {
        let pad = text_width.saturating_sub(text.width());
        let mut row = format!(
            "{:>index_width$}  {}{}  {:<5}",
            i,
            text,
            " ".repeat(pad),
            token.category()
        );

        if config.show_offsets {
            row.push_str(&format!("  {}..{}", token.start(), token.end()));
        }
        if config.show_bytes {
            let bytes = token.byte_range();
            row.push_str(&format!("  b{}..{}", bytes.start, bytes.end));
        }

        lines.push(row.trim_end().to_string());
    }

    if config.show_summary {
        lines.push(summarize(tokens));
    }

    lines.join("\n")
}

pub fn render_json(tokens: &[Token<'_>], with_bytes: bool) -> Result<String, RenderError> {
    let records: Vec<TokenRecord<'_>> = tokens
        .iter()
        .map(|token| TokenRecord::new(token, with_bytes))
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

pub fn render_lines(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|token| token.text().escape_debug().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Count tokens per category, e.g. `3 tokens (alpha: 2, digit: 0, space: 1, punct: 0, other: 0)`.
pub fn summarize(tokens: &[Token<'_>]) -> String {
    let counts: Vec<String> = Category::ALL
        .iter()
        .map(|&category| {
            let n = tokens.iter().filter(|t| t.category() == category).count();
            format!("{}: {}", category, n)
        })
        .collect();

    let noun = if tokens.len() == 1 { "token" } else { "tokens" };
    format!("{} {} ({})", tokens.len(), noun, counts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::tokenize;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_format() {
        assert_eq!("table".parse::<Format>(), Ok(Format::Table));
        assert_eq!("JSON".parse::<Format>(), Ok(Format::Json));
        assert_eq!("lines".parse::<Format>(), Ok(Format::Lines));
        assert!("xml".parse::<Format>().is_err());
    }

    #[test]
    fn test_render_table_rows() {
        let tokens = tokenize("hi 42");
        let config = OutputConfig {
            show_summary: false,
            ..OutputConfig::default()
        };
        let table = render_table(&tokens, &config);
        assert_eq!(
            table,
            "0  \"hi\"  alpha  0..2\n1  \" \"   space  2..3\n2  \"42\"  digit  3..5"
        );
    }

    #[test]
    fn test_render_table_with_bytes() {
        let tokens = tokenize("õ");
        let config = OutputConfig {
            show_bytes: true,
            show_summary: false,
            ..OutputConfig::default()
        };
        assert_eq!(render_table(&tokens, &config), "0  \"õ\"  alpha  0..1  b0..2");
    }

    #[test]
    fn test_render_table_without_offsets() {
        let tokens = tokenize("a");
        let config = OutputConfig {
            show_offsets: false,
            show_summary: false,
            ..OutputConfig::default()
        };
        assert_eq!(render_table(&tokens, &config), "0  \"a\"  alpha");
    }

    #[test]
    fn test_render_table_escapes_control_characters() {
        let tokens = tokenize("a\n\tb");
        let config = OutputConfig {
            show_summary: false,
            ..OutputConfig::default()
        };
        let table = render_table(&tokens, &config);
        assert!(table.contains("\"\\n\\t\""));
    }

    #[test]
    fn test_render_table_empty() {
        let table = render_table(&[], &OutputConfig::default());
        assert_eq!(
            table,
            "(no tokens)\n0 tokens (alpha: 0, digit: 0, space: 0, punct: 0, other: 0)"
        );
    }

    #[test]
    fn test_summarize_counts_categories() {
        let tokens = tokenize("October 3rd, 2019");
        assert_eq!(
            summarize(&tokens),
            "7 tokens (alpha: 2, digit: 2, space: 2, punct: 1, other: 0)"
        );
    }

    #[test]
    fn test_render_json() {
        let tokens = tokenize("fika!");
        let json = render_json(&tokens, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"text": "fika", "start": 0, "end": 4, "category": "alpha"},
                {"text": "!", "start": 4, "end": 5, "category": "punct"}
            ])
        );
    }

    #[test]
    fn test_render_json_with_bytes() {
        let tokens = tokenize("мама");
        let json = render_json(&tokens, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["byte_start"], 0);
        assert_eq!(value[0]["byte_end"], 8);
        assert_eq!(value[0]["end"], 4);
    }

    #[test]
    fn test_render_lines() {
        let tokens = tokenize("a b\n");
        assert_eq!(render_lines(&tokens), "a\n \nb\n\\n");
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let tokens = tokenize("ok");
        let config = OutputConfig {
            format: Format::Lines,
            ..OutputConfig::default()
        };
        assert_eq!(render(&tokens, &config).unwrap(), "ok");
    }
}
