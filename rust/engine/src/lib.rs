//! # lowball-engine: Deuce-to-Seven Triple Draw Core
//!
//! A deterministic fixed-limit 2-7 triple draw engine for 2 to 8 seats.
//! Provides the table state machine, betting and draw rules, the lowball
//! hand evaluator and pot settlement, with a seedable RNG so every hand can
//! be replayed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Seeded shuffling with ChaCha20 RNG and discard recycling
//! - [`hand`] - 2-7 lowball evaluation and comparison
//! - [`rules`] - Fixed-limit sizing, raise cap and action validation
//! - [`game`] - Phase and betting-round state
//! - [`engine`] - The [`engine::Table`] state machine (deal and betting)
//! - [`draw`] - The draw controller
//! - [`showdown`] - Settlement and pot splitting
//! - [`store`] - [`store::TableStore`], the registry all operations go through
//! - [`view`] - Per-seat views and status snapshots
//! - [`logger`] - Action history and JSONL hand records
//! - [`errors`] - Error types for table operations
//!
//! ## Quick Start
//!
//! ```rust
//! use lowball_engine::rules::BetAction;
//! use lowball_engine::store::TableStore;
//!
//! let mut store = TableStore::new();
//! let id = store.create_table(4, 1, 2, 4, 1, 2).unwrap();
//! let view = store.deal(&id).unwrap();
//! assert_eq!(view.pot, 3);
//!
//! // seat 3 sits after the big blind and acts first
//! let status = store.inspect_round(&id).unwrap();
//! assert_eq!(status.on_turn, 3);
//! store.act(&id, 3, BetAction::Call).unwrap();
//! ```
//!
//! ## Hand Evaluation
//!
//! ```rust
//! use lowball_engine::cards::parse_cards;
//! use lowball_engine::hand::compare_lowball;
//! use std::cmp::Ordering;
//!
//! let seven: [_; 5] = parse_cards("7c5d4h3s2c").unwrap().try_into().unwrap();
//! let king: [_; 5] = parse_cards("Kc9d6h4s2c").unwrap().try_into().unwrap();
//! assert_eq!(compare_lowball(&seven, &king), Ordering::Less);
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod draw;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod showdown;
pub mod store;
pub mod view;
