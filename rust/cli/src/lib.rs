//! # Hilo CLI Library
//!
//! This library provides the command-line interface for the hilo card game
//! engine. It exposes subcommands for playing, simulating, and analyzing
//! higher/lower wagering sessions.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["hilo", "deal", "--seed", "42"];
//! let code = hilo_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play an interactive session on this terminal
//! - `sim`: Run automated sessions and record them as JSONL
//! - `stats`: Aggregate statistics from JSONL match record files
//! - `deal`: Deal a single house/player pair for inspection
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, HiloCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command,
    handle_stats_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "stats", "deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = HiloCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "");
                    write_or_exit!(err, "Hilo card game CLI");
                    write_or_exit!(err, "Usage: hilo <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: hilo --help");
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Play { seed } => {
                // Use stdin for real input (supports both TTY and piped stdin)
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                match handle_play_command(seed, out, &mut stdin_lock) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(e) => {
                        write_or_exit!(err, "Error: {}", e);
                        exit_code::ERROR
                    }
                }
            }
            Commands::Sim {
                sessions,
                seed,
                output,
            } => match handle_sim_command(sessions, seed, output, out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Stats { input } => match handle_stats_command(&input, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Deal { seed } => match handle_deal_command(seed, out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Cfg => match handle_cfg_command(out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_help_prints_to_stdout_and_exits_zero() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(vec!["hilo", "--help"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("play"));
        assert!(output.contains("stats"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_unknown_command_lists_commands_and_exits_two() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(vec!["hilo", "frobnicate"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);

        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("Usage: hilo <command> [options]"));
        for c in ["play", "sim", "stats", "deal", "cfg"] {
            assert!(errors.contains(c), "missing command {} in usage", c);
        }
    }

    #[test]
    fn test_deal_command_dispatch_with_seed() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(vec!["hilo", "deal", "--seed", "42"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("House has "));
    }

    #[test]
    #[serial]
    fn test_cfg_command_dispatch() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(vec!["hilo", "cfg"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("log_dir"));
    }

    #[test]
    fn test_stats_missing_file_exits_two() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(
            vec!["hilo", "stats", "--input", "nonexistent.jsonl"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::ERROR);

        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("Error:"));
    }

    #[test]
    fn test_sim_rejects_zero_sessions_via_dispatch() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(
            vec!["hilo", "sim", "--sessions", "0"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::ERROR);
        assert!(String::from_utf8(err).unwrap().contains("at least 1"));
    }

    #[test]
    fn test_cli_types_preserve_all_subcommands() {
        let commands = vec![
            vec!["hilo", "play"],
            vec!["hilo", "sim", "--sessions", "1"],
            vec!["hilo", "stats", "--input", "test.jsonl"],
            vec!["hilo", "deal"],
            vec!["hilo", "cfg"],
        ];
        for cmd_args in commands {
            let result = HiloCli::try_parse_from(&cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
    }
}
