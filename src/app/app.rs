use super::event::AppEvent;
use super::mode::AppMode;
use crate::config::Config;
use crate::input::file;
use crate::render::{render, RenderError};
use crate::segment::{Mode, Segmenter};
use tracing::{info, warn};

pub const HELP: &str = "\
Commands:
  <text>        segment the line
  \\<text>       segment the line literally (for text starting with : or @)
  @<path>       segment a file
  :mode         show the current mode
  :mode <name>  switch mode: all, alpha, alnum, lazy
  :h, :help     show this help
  :q, :quit     quit";

/// Session state shared by the REPL and one-shot runs
pub struct App {
    mode: AppMode,
    config: Config,
    segmenter: Segmenter,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            mode: AppMode::Running,
            config,
            segmenter: Segmenter::new(),
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn segment_mode(&self) -> Mode {
        self.config.segment.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Segment `text` with the current mode and render it per the output config.
    pub fn report(&self, text: &str) -> Result<String, RenderError> {
        let tokens = self.segmenter.segment(text, self.config.segment.mode);
        render(&tokens, &self.config.output)
    }

    /// Apply an event, returning text to show the user if there is any.
    pub fn handle_event(&mut self, event: AppEvent) -> Option<String> {
        match event {
            AppEvent::Tokenize(text) => Some(self.report_or_error(&text)),
            AppEvent::LoadFile(path) => match file::load(&path) {
                Ok(doc) => {
                    info!(source = %doc.source, "segmenting file");
                    Some(self.report_or_error(&doc.text))
                }
                Err(err) => {
                    warn!(path = %path, error = %err, "failed to load file");
                    Some(format!("Error: {}", err))
                }
            },
            AppEvent::SetMode(mode) => {
                self.config.segment.mode = mode;
                Some(format!("Mode set to {}", mode))
            }
            AppEvent::ShowMode => Some(format!("Mode: {}", self.config.segment.mode)),
            AppEvent::Help => Some(HELP.to_string()),
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
                None
            }
            AppEvent::InvalidCommand(input) => {
                Some(format!("Unknown command: {}. Type :h for help.", input))
            }
        }
    }

    fn report_or_error(&self, text: &str) -> String {
        self.report(text).unwrap_or_else(|err| {
            warn!(error = %err, "failed to render report");
            format!("Error: {}", err)
        })
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
