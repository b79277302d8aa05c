use crate::app::AppEvent;
use crate::segment::Mode;

/// Commands that can be parsed from REPL input
///
/// These commands map to AppEvent for handling in App core.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Quit the session
    Quit,

    /// Show help information
    Help,

    /// Segment the contents of a file
    LoadFile(String),

    /// Switch the traversal mode for following input
    SetMode(Mode),

    /// Print the current traversal mode
    ShowMode,

    /// Segment a line of text
    Tokenize(String),

    /// Unknown/invalid command
    Unknown(String),
}

/// Convert a parsed REPL command into an AppEvent
///
/// This is the translation layer between REPL input and App core.
pub fn command_to_app_event(command: ReplCommand) -> AppEvent {
    match command {
        ReplCommand::Quit => AppEvent::Quit,
        ReplCommand::Help => AppEvent::Help,
        ReplCommand::LoadFile(path) => AppEvent::LoadFile(path),
        ReplCommand::SetMode(mode) => AppEvent::SetMode(mode),
        ReplCommand::ShowMode => AppEvent::ShowMode,
        ReplCommand::Tokenize(text) => AppEvent::Tokenize(text),
        ReplCommand::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
