//! `cfg`: prints the resolved configuration as JSON, each value tagged with
//! where it came from (`default`, `file` or `env`).

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;

    let config::ConfigResolved { config, sources } = resolved;
    let entry = |value: serde_json::Value, source: config::ValueSource| {
        serde_json::json!({ "value": value, "source": source })
    };
    let display = serde_json::json!({
        "seats": entry(config.seats.into(), sources.seats),
        "small_bet": entry(config.small_bet.into(), sources.small_bet),
        "big_bet": entry(config.big_bet.into(), sources.big_bet),
        "cap": entry(config.cap.into(), sources.cap),
        "small_blind": entry(config.small_blind.into(), sources.small_blind),
        "big_blind": entry(config.big_blind.into(), sources.big_blind),
        "starting_stack": entry(config.starting_stack.into(), sources.starting_stack),
        "seed": entry(config.seed.into(), sources.seed),
        "ai": entry(config.ai.into(), sources.ai),
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
