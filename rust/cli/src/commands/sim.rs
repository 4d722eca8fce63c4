//! `sim`: autoplays complete hands at one table and optionally writes each
//! settled hand as a JSON line.

use std::io::Write;
use std::path::Path;

use lowball_ai::autoplay::{Autoplayer, StopReason};
use lowball_ai::create_ai;
use lowball_engine::errors::GameError;
use lowball_engine::logger::HandLogger;
use lowball_engine::store::TableStore;

use super::{resolve_config, Overrides};
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;

pub fn handle_sim_command(
    hands: u64,
    output: Option<String>,
    overrides: Overrides,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".into()));
    }
    let cfg = resolve_config(overrides)?;
    let ai = create_ai(&cfg.ai)
        .ok_or_else(|| CliError::Config(format!("unknown ai '{}'", cfg.ai)))?;
    let autoplayer = Autoplayer::new(ai);

    let mut logger = match &output {
        Some(path) => {
            ensure_parent_dir(Path::new(path)).map_err(CliError::InvalidInput)?;
            HandLogger::create(path)?
        }
        None => HandLogger::sink(),
    };

    let mut store = TableStore::new();
    let id = store.create_table_with(cfg.table_config(None))?;
    let mut wins = vec![0u64; cfg.seats];
    let mut split_pots = 0u64;
    let mut played = 0u64;

    for _ in 0..hands {
        match store.deal(&id) {
            Ok(_) => {}
            Err(GameError::InsufficientChips { .. }) => {
                ui::display_warning(
                    err,
                    &format!(
                        "stopping after {} hands: fewer than two seats can cover the big blind",
                        played
                    ),
                )?;
                break;
            }
            Err(e) => return Err(e.into()),
        }
        let report = autoplayer.run(store.table_mut(&id)?);
        match report.stop {
            StopReason::Showdown => {}
            StopReason::Rejected(e) => return Err(e.into()),
            other => {
                tracing::warn!(table_id = %id, stop = ?other, "hand did not reach showdown; settling early");
            }
        }
        let result = store.showdown(&id)?;
        logger.write(&result.record)?;
        if result.winners.len() > 1 {
            split_pots += 1;
        }
        for seat in &result.winners {
            wins[*seat] += 1;
        }
        played += 1;
    }

    let table = store.table(&id)?;
    writeln!(out, "Simulated: {} hands (seed {})", played, table.seed())?;
    for (seat, count) in wins.iter().enumerate() {
        writeln!(out, "Seat {}: {} pots won", seat, count)?;
    }
    writeln!(out, "Split pots: {}", split_pots)?;
    let stacks: Vec<String> = table.seats().iter().map(|s| s.stack().to_string()).collect();
    writeln!(out, "Final stacks: {}", stacks.join(" "))?;
    if let Some(path) = output {
        writeln!(out, "Wrote {} records to {}", logger.written(), path)?;
    }
    Ok(())
}
