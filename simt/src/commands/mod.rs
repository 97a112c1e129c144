//! Command modules for the simt CLI.
//!
//! Each subcommand lives in its own file and writes to any `io::Write`, so
//! the binary passes stdout while tests pass a buffer.

pub mod lex;
pub mod parse;
pub mod repl;

use std::io::Read;
use std::path::Path;

use crate::error::Result;

// Re-export command types and functions
pub use lex::{run_lex, LexArgs};
pub use parse::{run_parse, ParseArgs};
pub use repl::{run_repl, ReplArgs};

/// Reads a whole source file; `-` reads standard input.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    Ok(std::fs::read_to_string(path)?)
}
