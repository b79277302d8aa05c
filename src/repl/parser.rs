use super::ReplCommand;

/// Parse REPL input string into a command
///
/// Supports:
/// - `:q` or `:quit` → Quit command
/// - `:h` or `:help` → Help command
/// - `:mode` → Show the current mode
/// - `:mode alpha` → Switch mode (all, alpha, alnum, lazy)
/// - `@filename` → Segment a file
/// - `\text` → Segment `text` literally, even if it starts with `:` or `@`
/// - Anything else → Segment the line as typed
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let trimmed = input.trim();

    // Check for empty input first
    if trimmed.is_empty() {
        return ReplCommand::Unknown(trimmed.to_string());
    }

    if let Some(literal) = input.strip_prefix('\\') {
        return ReplCommand::Tokenize(literal.to_string());
    }

    // Handle system commands starting with ':'
    if let Some(cmd) = trimmed.strip_prefix(':') {
        let mut parts = cmd.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("q" | "quit"), None, None) => ReplCommand::Quit,
            (Some("h" | "help"), None, None) => ReplCommand::Help,
            (Some("m" | "mode"), None, None) => ReplCommand::ShowMode,
            (Some("m" | "mode"), Some(name), None) => match name.parse() {
                Ok(mode) => ReplCommand::SetMode(mode),
                Err(_) => ReplCommand::Unknown(trimmed.to_string()),
            },
            _ => ReplCommand::Unknown(trimmed.to_string()),
        }
    } else if let Some(rest) = trimmed.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() {
            ReplCommand::Unknown(trimmed.to_string())
        } else {
            ReplCommand::LoadFile(filename.to_string())
        }
    } else {
        ReplCommand::Tokenize(input.to_string())
    }
}
