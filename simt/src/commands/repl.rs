//! Interactive read-lex-print loop.

use std::io::{BufRead, Write};

use simc_lex::Lexer;
use tracing::debug;

use crate::config::ReplConfig;
use crate::error::Result;

/// Arguments for the repl command.
#[derive(Debug, Clone)]
pub struct ReplArgs {
    /// Prompt printed before each line.
    pub prompt: String,
    /// Print the greeting first.
    pub banner: bool,
    /// Name used in the greeting.
    pub user: Option<String>,
}

impl ReplArgs {
    /// Builds the arguments from config and the `USER` / `USERNAME`
    /// environment variables.
    pub fn from_config(config: &ReplConfig) -> Self {
        let user = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .ok()
            .filter(|name| !name.is_empty());
        Self {
            prompt: config.prompt.clone(),
            banner: config.banner,
            user,
        }
    }
}

/// Runs the REPL on stdin and stdout.
pub fn run_repl(args: ReplArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl(&args, stdin.lock(), &mut stdout.lock())
}

/// Prints the greeting, then lexes `input` line by line until it runs out.
pub fn repl<R: BufRead, W: Write>(args: &ReplArgs, mut input: R, out: &mut W) -> Result<()> {
    if args.banner {
        write_greeting(args.user.as_deref(), out)?;
    }

    let mut buf = Vec::new();
    let mut lines = 0usize;
    loop {
        write!(out, "{}", args.prompt)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            break;
        }
        lines += 1;

        // Undecodable bytes become U+FFFD and lex as ILLEGAL.
        let line = String::from_utf8_lossy(&buf);
        for token in Lexer::new(&line) {
            writeln!(out, "{}", token)?;
        }
    }

    debug!(lines, "repl finished");
    Ok(())
}

fn write_greeting<W: Write>(user: Option<&str>, out: &mut W) -> Result<()> {
    match user {
        Some(name) => writeln!(out, "Hi {}! This is the Simian language!", name)?,
        None => writeln!(out, "Hi! This is the Simian language!")?,
    }
    writeln!(out, "Feel free to type in commands.")?;
    writeln!(out, "(Use Ctrl-D to stop)")?;
    Ok(())
}
