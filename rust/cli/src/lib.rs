//! # Lowball CLI Library
//!
//! Command-line front end for the deuce-to-seven triple draw engine.
//!
//! The entry point is [`run`], which parses arguments and dispatches to a
//! subcommand. All output goes to the streams passed in, so the whole CLI can
//! be driven from tests.
//!
//! ## Subcommands
//!
//! - `deal`: deal one hand and show seat 0's view
//! - `play`: play hands from seat 0 against autoplayed opponents
//! - `sim`: autoplay hands and optionally write JSON Lines hand records
//! - `eval`: compare two five-card hands
//! - `cfg`: show resolved configuration with value sources

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, LowballCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
    handle_sim_command, Overrides,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["deal", "play", "sim", "eval", "cfg"];

/// Parses `args` and runs the selected subcommand.
///
/// Returns the process exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`].
///
/// ```
/// use std::io;
/// let args = vec!["lowball", "eval", "7c 5d 4h 3s 2c", "8c 6d 4d 3c 2d"];
/// let mut out = Vec::new();
/// let code = lowball_cli::run(args, &mut out, &mut io::stderr());
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().ends_with("A wins\n"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match LowballCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Deal { seed, seats } => handle_deal_command(seed, seats, out),
        Commands::Play {
            hands,
            seed,
            seats,
            ai,
        } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            let overrides = Overrides { seed, seats, ai };
            handle_play_command(hands, overrides, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            hands,
            output,
            seed,
            seats,
            ai,
        } => handle_sim_command(hands, output, Overrides { seed, seats, ai }, out, err),
        Commands::Eval { hand_a, hand_b } => handle_eval_command(&hand_a, &hand_b, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }
    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "\nLowball CLI");
    let _ = writeln!(err, "Usage: lowball <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: lowball --help");
    exit_code::ERROR
}
