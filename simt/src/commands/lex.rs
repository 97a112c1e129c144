//! Lex command implementation.
//!
//! Prints every token of a source file as `TYPE("literal")`, one per line,
//! optionally prefixed with the byte offset where the token starts.

use std::io::Write;
use std::path::PathBuf;

use simc_lex::{Lexer, Token};
use tracing::debug;

use crate::commands::read_source;
use crate::error::Result;

/// Arguments for the lex command.
#[derive(Debug, Clone)]
pub struct LexArgs {
    /// Source file, or `-` for stdin.
    pub file: PathBuf,
    /// Also print the trailing `EOF("")` token.
    pub show_eof: bool,
    /// Prefix each token with its starting byte offset.
    pub show_offsets: bool,
}

/// Runs the lex command against stdout.
pub fn run_lex(args: LexArgs) -> Result<()> {
    let source = read_source(&args.file)?;
    let stdout = std::io::stdout();
    let count = write_tokens(&source, &args, &mut stdout.lock())?;
    debug!(file = %args.file.display(), tokens = count, "lexed source");
    Ok(())
}

/// Writes the token stream of `source` and returns how many tokens were
/// written, `EOF` excluded.
pub fn write_tokens<W: Write>(source: &str, args: &LexArgs, out: &mut W) -> Result<usize> {
    let mut tokens = Lexer::new(source).tokens();
    let mut count = 0;
    while let Some(token) = tokens.next() {
        write_token(&token, tokens.token_start(), args.show_offsets, out)?;
        count += 1;
    }
    if args.show_eof {
        write_token(&Token::eof(), source.len(), args.show_offsets, out)?;
    }
    Ok(count)
}

fn write_token<W: Write>(
    token: &Token,
    offset: usize,
    show_offset: bool,
    out: &mut W,
) -> Result<()> {
    if show_offset {
        writeln!(out, "{}\t{}", offset, token)?;
    } else {
        writeln!(out, "{}", token)?;
    }
    Ok(())
}
