//! `deal`: deals one hand and shows the table from seat 0.

use std::io::Write;

use lowball_engine::store::TableStore;

use super::{resolve_config, Overrides};
use crate::error::CliError;
use crate::ui;

pub fn handle_deal_command(
    seed: Option<u64>,
    seats: Option<u8>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = resolve_config(Overrides {
        seed,
        seats,
        ai: None,
    })?;
    let mut store = TableStore::new();
    let id = store.create_table_with(cfg.table_config(Some(0)))?;
    let view = store.deal(&id)?;
    let table = store.table(&id)?;

    writeln!(out, "Table: {}", id)?;
    writeln!(out, "Seed: {}", table.seed())?;
    writeln!(
        out,
        "Blinds: {}/{} | Limits: {}/{} cap {}",
        cfg.small_blind, cfg.big_blind, cfg.small_bet, cfg.big_bet, cfg.cap
    )?;
    ui::render_history(out, &view.history, 0)?;
    writeln!(out, "First to act: seat {}", view.on_turn)?;
    ui::render_view(out, &view)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn same_seed_deals_same_hand() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        handle_deal_command(Some(42), Some(4), &mut first).unwrap();
        handle_deal_command(Some(42), Some(4), &mut second).unwrap();

        let hand_line = |buf: &[u8]| {
            String::from_utf8_lossy(buf)
                .lines()
                .find(|l| l.starts_with("Your hand:"))
                .map(str::to_string)
        };
        assert!(hand_line(&first).is_some());
        assert_eq!(hand_line(&first), hand_line(&second));
    }
}
