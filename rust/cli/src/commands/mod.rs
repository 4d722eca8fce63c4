//! Command handlers, one module per subcommand.
//!
//! Each handler takes its output streams (and stdin where it reads input) as
//! parameters and reports failures through [`CliError`].

mod cfg;
mod deal;
mod eval;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use crate::config::{self, Config};
use crate::error::CliError;

/// Overrides taken from command-line flags; they win over env and file values.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub seats: Option<u8>,
    pub ai: Option<String>,
}

pub(crate) fn resolve_config(overrides: Overrides) -> Result<Config, CliError> {
    let mut cfg = config::load_with_sources()
        .map_err(|e| CliError::Config(e.to_string()))?
        .config;
    if let Some(seed) = overrides.seed {
        cfg.seed = Some(seed);
    }
    if let Some(seats) = overrides.seats {
        cfg.seats = usize::from(seats);
    }
    if let Some(ai) = overrides.ai {
        cfg.ai = ai;
    }
    config::validate(&cfg).map_err(|e| CliError::Config(e.to_string()))?;
    Ok(cfg)
}
