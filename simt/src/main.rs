//! Simt CLI - Command-line front end for the Simian language.
//!
//! This is the main entry point for the simt CLI application.
//! It uses clap for argument parsing and dispatches to the REPL, the
//! token dump or the parse check.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_lex, run_parse, run_repl, LexArgs, ParseArgs, ReplArgs};
use config::Config;
use error::{Result, SimtError};

/// Simt - Tools for the Simian language
///
/// With no subcommand simt starts an interactive session that prints the
/// tokens of every line typed.
#[derive(Parser, Debug)]
#[command(name = "simt")]
#[command(author = "Simian Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line front end for the Simian language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SIMT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SIMT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "SIMT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands for the simt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive token printer (default)
    Repl,

    /// Print every token of a source file
    Lex(LexCommand),

    /// Parse a source file and print its statements
    ///
    /// Diagnostics go to stderr and the exit status is non-zero when any
    /// were reported.
    Parse(ParseCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source file (`-` reads stdin)
    file: PathBuf,

    /// Also print the trailing EOF token
    #[arg(long)]
    eof: bool,

    /// Prefix each token with its starting byte offset
    #[arg(long)]
    offsets: bool,
}

/// Arguments for the parse subcommand.
#[derive(Parser, Debug)]
struct ParseCommand {
    /// Source file (`-` reads stdin)
    file: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration, initializes logging and runs the selected command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command.unwrap_or(Commands::Repl), config)
}

/// Initialize the logging system on stderr.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| SimtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Repl => run_repl(ReplArgs::from_config(&config.repl)),
        Commands::Lex(args) => run_lex(LexArgs {
            file: args.file,
            show_eof: args.eof || config.lex.show_eof,
            show_offsets: args.offsets,
        }),
        Commands::Parse(args) => run_parse(ParseArgs { file: args.file }),
    }
}
