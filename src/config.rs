// Configuration for catseg segmentation and output
// Defaults are used unless the command line overrides them

use crate::render::Format;
use crate::segment::Mode;

/// Segmentation configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentConfig {
    /// Traversal policy used when none is requested (default all)
    pub mode: Mode,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self { mode: Mode::All }
    }
}

/// Output configuration for token reports
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// Report layout (default table)
    pub format: Format,

    /// Show character spans in table output (default true)
    pub show_offsets: bool,

    /// Show byte ranges next to character spans (default false)
    pub show_bytes: bool,

    /// Print per-category counts under a table (default true)
    pub show_summary: bool,

    /// Text column is padded up to this display width (default 24)
    pub max_text_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: Format::Table,
            show_offsets: true,
            show_bytes: false,
            show_summary: true,
            max_text_width: 24,
        }
    }
}

/// Master configuration combining all catseg settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub segment: SegmentConfig,
    pub output: OutputConfig,
}
