//! # Tic-tac-toe CLI Library
//!
//! Command-line front end for the tic-tac-toe engine: interactive games,
//! batch simulations between strategies, and configuration inspection.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments, initialises logging and executes
//! the requested subcommand, returning a process exit code.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["tictactoe", "sim", "--games", "10", "--seed", "7"];
//! let code = tictactoe_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one game against the computer or a second human
//! - `sim`: Pit a strategy against the computer over many games
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, TictactoeCli};
use commands::{handle_cfg_command, handle_play_command, handle_sim_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "cfg"];

/// Main entry point for the CLI application.
///
/// Reads interactive input from the process's stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`] with interactive input taken from `input`.
///
/// ```
/// use std::io::Cursor;
/// let mut input = Cursor::new(b"0\n3\n1\n4\n2\n".to_vec());
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = tictactoe_cli::run_with_input(
///     ["tictactoe", "play", "--mode", "multi"],
///     &mut input,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("player 1 (X) wins!"));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match TictactoeCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, out, err),
    };

    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Play(args) => handle_play_command(args, out, err, input),
        Commands::Sim(args) => handle_sim_command(args, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout with a zero exit
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "Usage: tictactoe <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            let _ = writeln!(err, "\nFor full help, run: tictactoe --help");
            exit_code::ERROR
        }
    }
}
