use catseg::app::App;
use catseg::config::{Config, OutputConfig, SegmentConfig};
use catseg::input::{file, stdin, LoadedDocument};
use catseg::render::Format;
use catseg::repl;
use catseg::segment::Mode;
use clap::Parser;
use std::error::Error;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Split text into runs of letters, digits, whitespace, punctuation and other characters.
#[derive(Parser, Debug)]
#[command(name = "catseg", author, version, about, long_about = None)]
struct Cli {
    /// Text to segment; several arguments are joined with single spaces
    text: Vec<String>,

    /// Segment the contents of a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Traversal mode: all, alpha, alnum or lazy
    #[arg(short, long, default_value_t = Mode::All)]
    mode: Mode,

    /// Output format: table, json or lines
    #[arg(long, default_value_t = Format::Table)]
    format: Format,

    /// Hide character spans in table output
    #[arg(long)]
    no_offsets: bool,

    /// Show byte ranges next to character spans
    #[arg(long)]
    bytes: bool,

    /// Hide the per-category summary line
    #[arg(long)]
    no_summary: bool,

    /// Start an interactive session even when stdin is not a terminal
    #[arg(short, long)]
    interactive: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let defaults = OutputConfig::default();
        Config {
            segment: SegmentConfig { mode: self.mode },
            output: OutputConfig {
                format: self.format,
                show_offsets: !self.no_offsets,
                show_bytes: self.bytes,
                show_summary: !self.no_summary,
                ..defaults
            },
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "catseg=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_report(app: &App, doc: &LoadedDocument) -> Result<(), Box<dyn Error>> {
    debug!(source = %doc.source, mode = %app.segment_mode(), "segmenting document");
    println!("{}", app.report(&doc.text)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut app = App::with_config(cli.config());

    if let Some(path) = &cli.file {
        return print_report(&app, &file::load(path)?);
    }

    if !cli.text.is_empty() {
        let doc = LoadedDocument {
            text: cli.text.join(" "),
            source: "args".to_string(),
        };
        return print_report(&app, &doc);
    }

    let input = io::stdin();
    if cli.interactive || input.is_terminal() {
        let interactive = io::stdout().is_terminal();
        repl::run(&mut app, input.lock(), io::stdout().lock(), interactive)?;
        return Ok(());
    }

    print_report(&app, &stdin::load(input.lock())?)
}
