use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::SeatId;

/// Represents a betting street in triple draw.
/// One betting round before the first draw and one after each of the three draws.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Street {
    /// Before the first draw
    Pre,
    /// After the first draw
    Post1,
    /// After the second draw
    Post2,
    /// After the third (final) draw
    Post3,
}

impl Street {
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Pre => Some(Street::Post1),
            Street::Post1 => Some(Street::Post2),
            Street::Post2 => Some(Street::Post3),
            Street::Post3 => None,
        }
    }

    /// Pre and Post1 are played with the small bet, Post2 and Post3 with the big bet.
    pub fn uses_big_bet(self) -> bool {
        matches!(self, Street::Post2 | Street::Post3)
    }
}

/// What a seat did, as recorded in the hand history.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum HandAction {
    SmallBlind(u32),
    BigBlind(u32),
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    Raise(u32),
    /// Only the count is recorded so the history never leaks discarded cards.
    Draw(u8),
}

/// Records a single seat action during a hand.
/// Associates the action with the seat and the street when it occurred.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat identifier
    pub seat: SeatId,
    /// The betting street when this action occurred (for draws, the street just closed)
    pub street: Street,
    /// The action taken by the seat
    pub action: HandAction,
}

/// A seat's final five cards as revealed at settlement.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RevealedHand {
    pub seat: SeatId,
    pub hand: Option<[Card; 5]>,
    pub in_hand: bool,
}

/// Information about the showdown phase when hands are revealed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Seats that won a share of the pot
    pub winners: Vec<SeatId>,
    /// Pot size before distribution
    pub pot: u32,
    /// Optional notes about the outcome (e.g. "uncontested", "split pot")
    #[serde(default)]
    pub notes: Option<String>,
}

/// Complete record of a triple draw hand including all actions and outcome.
/// Serialized to JSONL format for hand history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    pub table_id: String,
    /// Seed of the table's deck RNG (enables deterministic replay)
    pub seed: Option<u64>,
    pub button: SeatId,
    /// Chronological list of all seat actions
    pub actions: Vec<ActionRecord>,
    pub hands: Vec<RevealedHand>,
    /// Stacks after settlement, indexed by seat
    pub stacks: Vec<u32>,
    /// Timestamp when the hand was settled (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

pub fn today_yyyymmdd() -> String {
    Utc::now().format("%Y%m%d").to_string()
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`HandRecord`]s to a JSON Lines file.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    written: usize,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::open(path, false)
    }

    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::open(path, true)
    }

    fn open<P: AsRef<Path>>(path: P, append: bool) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            written: 0,
        })
    }

    /// A logger that discards everything; useful when no output file is configured.
    pub fn sink() -> Self {
        Self {
            writer: None,
            written: 0,
        }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        self.written += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_id_is_zero_padded() {
        assert_eq!(format_hand_id("20240101", 7), "20240101-000007");
    }

    #[test]
    fn street_progression_stops_after_post3() {
        assert_eq!(Street::Pre.next(), Some(Street::Post1));
        assert_eq!(Street::Post2.next(), Some(Street::Post3));
        assert_eq!(Street::Post3.next(), None);
        assert!(!Street::Post1.uses_big_bet());
        assert!(Street::Post2.uses_big_bet());
    }

    #[test]
    fn draw_action_serializes_count_only() {
        let rec = ActionRecord {
            seat: 2,
            street: Street::Pre,
            action: HandAction::Draw(3),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["action"]["kind"], "draw");
        assert_eq!(json["action"]["amount"], 3);
        assert_eq!(json["street"], "pre");
    }
}
