//! Parse command implementation.
//!
//! Parses a source file, prints the recognized statements and reports
//! diagnostics on stderr.

use std::io::Write;
use std::path::PathBuf;

use simc_lex::Lexer;
use simc_par::{ParseError, Parser};
use tracing::{debug, warn};

use crate::commands::read_source;
use crate::error::{Result, SimtError};

/// Arguments for the parse command.
#[derive(Debug, Clone)]
pub struct ParseArgs {
    /// Source file, or `-` for stdin.
    pub file: PathBuf,
}

/// Runs the parse command against stdout and stderr.
///
/// Fails with [`SimtError::Parse`] when any diagnostic was reported.
pub fn run_parse(args: ParseArgs) -> Result<()> {
    let source = read_source(&args.file)?;
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let errors = write_program(&source, &mut stdout.lock(), &mut stderr.lock())?;

    if errors.is_empty() {
        return Ok(());
    }
    warn!(file = %args.file.display(), errors = errors.len(), "parse failed");
    Err(SimtError::Parse {
        path: args.file.display().to_string(),
        count: errors.len(),
    })
}

/// Parses `source`, writes each statement to `out` and each diagnostic to
/// `err`, and returns the diagnostics.
pub fn write_program<W: Write, E: Write>(
    source: &str,
    out: &mut W,
    err: &mut E,
) -> Result<Vec<ParseError>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    debug!(statements = program.statements.len(), "parsed source");

    write!(out, "{}", program)?;
    for error in parser.errors() {
        writeln!(err, "error: {}", error)?;
    }
    Ok(parser.errors().to_vec())
}
