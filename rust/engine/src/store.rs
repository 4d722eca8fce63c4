use std::collections::HashMap;

use uuid::Uuid;

use crate::cards::Card;
use crate::config::{Blinds, TableConfig};
use crate::engine::Table;
use crate::errors::GameError;
use crate::player::SeatId;
use crate::rules::{BetAction, LimitConfig};
use crate::view::{RoundStatus, SeatView, ShowdownResult};

pub type TableId = String;

/// Owns every table of the process, keyed by id.
///
/// All engine operations go through a store handle; there is no global
/// registry. Callers that share a store across threads must serialize
/// access themselves (one writer per table).
#[derive(Debug, Default)]
pub struct TableStore {
    tables: HashMap<TableId, Table>,
}

impl TableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with default stacks and a random seed.
    pub fn create_table(
        &mut self,
        seat_count: usize,
        small_bet: u32,
        big_bet: u32,
        cap: u32,
        small_blind: u32,
        big_blind: u32,
    ) -> Result<TableId, GameError> {
        self.create_table_with(TableConfig {
            seats: seat_count,
            limits: LimitConfig {
                small_bet,
                big_bet,
                cap,
            },
            blinds: Blinds {
                small: small_blind,
                big: big_blind,
            },
            ..TableConfig::default()
        })
    }

    pub fn create_table_with(&mut self, config: TableConfig) -> Result<TableId, GameError> {
        let id = format!("td7_{}", Uuid::new_v4().simple());
        let table = Table::new(id.clone(), config)?;
        tracing::info!(table_id = %id, seats = table.seats().len(), seed = table.seed(), "table created");
        self.tables.insert(id.clone(), table);
        Ok(id)
    }

    pub fn table(&self, id: &str) -> Result<&Table, GameError> {
        self.tables
            .get(id)
            .ok_or_else(|| GameError::TableNotFound(id.to_string()))
    }

    pub fn table_mut(&mut self, id: &str) -> Result<&mut Table, GameError> {
        self.tables
            .get_mut(id)
            .ok_or_else(|| GameError::TableNotFound(id.to_string()))
    }

    /// Deals a new hand and returns what the human seat (seat 0 when none is set) sees.
    pub fn deal(&mut self, id: &str) -> Result<SeatView, GameError> {
        let table = self.table_mut(id)?;
        table.deal()?;
        table.view(table.config().human_seat.unwrap_or(0))
    }

    pub fn act(&mut self, id: &str, seat: SeatId, action: BetAction) -> Result<SeatView, GameError> {
        let table = self.table_mut(id)?;
        table.act(seat, action)?;
        table.view(seat)
    }

    pub fn draw(&mut self, id: &str, seat: SeatId, discards: &[Card]) -> Result<SeatView, GameError> {
        let table = self.table_mut(id)?;
        table.draw(seat, discards)?;
        table.view(seat)
    }

    pub fn showdown(&mut self, id: &str) -> Result<ShowdownResult, GameError> {
        self.table_mut(id)?.showdown()
    }

    pub fn inspect_round(&self, id: &str) -> Result<RoundStatus, GameError> {
        Ok(self.table(id)?.inspect_round())
    }

    pub fn view(&self, id: &str, seat: SeatId) -> Result<SeatView, GameError> {
        self.table(id)?.view(seat)
    }

    pub fn remove_table(&mut self, id: &str) -> Result<Table, GameError> {
        self.tables
            .remove(id)
            .ok_or_else(|| GameError::TableNotFound(id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
