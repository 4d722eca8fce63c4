//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "lowball",
    version,
    about = "Deuce-to-seven triple draw at the terminal"
)]
pub struct LowballCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal one hand and show what the human seat sees
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=8))]
        seats: Option<u8>,
    },
    /// Play hands from seat 0 against autoplayed opponents
    Play {
        #[arg(long, default_value_t = 1)]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=8))]
        seats: Option<u8>,
        /// Opponent policy (baseline or station)
        #[arg(long)]
        ai: Option<String>,
    },
    /// Autoplay complete hands and optionally record them as JSON Lines
    Sim {
        #[arg(long)]
        hands: u64,
        #[arg(long)]
        output: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=8))]
        seats: Option<u8>,
        #[arg(long)]
        ai: Option<String>,
    },
    /// Compare two five-card hands under 2-7 lowball
    Eval {
        /// First hand, e.g. "7c 5d 4h 3s 2c"
        hand_a: String,
        /// Second hand
        hand_b: String,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
