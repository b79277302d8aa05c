use crate::segment::Mode;

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Tokenize(String),
    LoadFile(String),
    SetMode(Mode),
    ShowMode,
    Quit,
    Help,
    InvalidCommand(String),
}
