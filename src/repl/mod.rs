//! REPL (Read-Eval-Print Loop) module
//!
//! Line-oriented front end over the segmenter.
//!
//! ## Module Structure
//!
//! - **command.rs**: Command definitions and conversion to AppEvent
//! - **parser.rs**: Manual string parsing for `@`, `:` and `\` prefixes
//! - **session.rs**: Read loop driving an App from any `BufRead`
//!
//! ## Usage in main.rs
//!
//! ```rust,ignore
//! use catseg::{app::App, repl};
//!
//! let mut app = App::with_config(config);
//! repl::run(&mut app, io::stdin().lock(), io::stdout().lock(), true)?;
//! ```

pub mod command;
pub mod parser;
pub mod session;

// Re-export public types
pub use command::{command_to_app_event, ReplCommand};
pub use parser::parse_repl_input;
pub use session::run;
