use super::{command_to_app_event, parse_repl_input};
use crate::app::{App, AppMode};
use crate::segment::validate_text;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

const BANNER: &str = "catseg: type text to segment, :h for help, :q to quit";
const PROMPT: &str = "> ";

/// Read lines from `input` until it ends or the app quits, writing every
/// report to `output`.
///
/// A line that is not UTF-8 is reported and skipped; the session goes on.
/// `interactive` controls the banner and prompt, which are noise when input
/// is piped.
pub fn run<R: BufRead, W: Write>(
    app: &mut App,
    mut input: R,
    mut output: W,
    interactive: bool,
) -> io::Result<()> {
    if interactive {
        writeln!(output, "{}", BANNER)?;
    }

    let mut buf = Vec::new();
    while app.mode() != AppMode::Quit {
        if interactive {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("input closed");
            break;
        }

        let reply = match validate_text(strip_line_ending(&buf)) {
            Ok(line) => app.handle_event(command_to_app_event(parse_repl_input(line))),
            Err(err) => {
                warn!(error = %err, "skipping input line");
                Some(format!("Error: {}", err))
            }
        };

        if let Some(reply) = reply {
            writeln!(output, "{}", reply)?;
        }
    }

    output.flush()
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::io::Cursor;

    fn run_script(script: &str, interactive: bool) -> (App, String) {
        run_bytes(script.as_bytes(), interactive)
    }

    fn run_bytes(script: &[u8], interactive: bool) -> (App, String) {
        let mut app = App::with_config(Config::default());
        let mut output = Vec::new();
        run(&mut app, Cursor::new(script), &mut output, interactive).unwrap();
        (app, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_run_segments_each_line() {
        let (_, output) = run_script("fika\n", false);
        assert!(output.contains("\"fika\"  alpha  0..4"));
        assert!(output.contains("1 token (alpha: 1"));
    }

    #[test]
    fn test_run_stops_at_quit() {
        let (app, output) = run_script(":q\nfika\n", false);
        assert_eq!(app.mode(), AppMode::Quit);
        assert!(!output.contains("fika"));
    }

    #[test]
    fn test_run_mode_switch_applies_to_next_line() {
        let (_, output) = run_script(":mode alpha\neesti kiiking\n", false);
        assert!(output.contains("Mode set to alpha"));
        assert!(output.contains("\"kiiking\"  alpha  6..13"));
        assert!(output.contains("2 tokens (alpha: 2, digit: 0, space: 0"));
    }

    #[test]
    fn test_run_interactive_prints_banner_and_prompt() {
        let (_, output) = run_script(":q\n", true);
        assert!(output.starts_with(BANNER));
        assert!(output.contains(PROMPT));
    }

    #[test]
    fn test_run_reports_unknown_commands() {
        let (_, output) = run_script(":x\n", false);
        assert!(output.contains("Unknown command: :x"));
    }

    #[test]
    fn test_run_skips_lines_that_are_not_utf8() {
        let (app, output) = run_bytes(b"fika\n\xff\xfe\nkiik\n:q\n", false);
        assert!(output.contains("\"fika\"  alpha  0..4"));
        assert!(output.contains("Error: Only strings can be tokenized"));
        assert!(output.contains("\"kiik\"  alpha  0..4"));
        assert_eq!(app.mode(), AppMode::Quit);
    }

    #[test]
    fn test_run_strips_crlf_line_endings() {
        let (_, output) = run_script("fika\r\n", false);
        assert!(output.contains("\"fika\"  alpha  0..4"));
        assert!(!output.contains("\\r"));
    }

    #[test]
    fn test_run_last_line_without_newline() {
        let (_, output) = run_script("fika", false);
        assert!(output.contains("1 token (alpha: 1"));
    }
}
