// src/score/mod.rs
//! # Scoring
//!
//! Turns already-fetched statistics documents into a ranked board:
//!
//! ```text
//! PlayerRecord ─ path::extract ─> aggregate ─> round ─> ScoreEntry ─ rank::sort ─> RankedEntry
//! ```
//!
//! Nothing in here does I/O or keeps state between runs. Missing or odd data never
//! aborts a run; it falls through to the formula's default value.
pub mod path;
pub mod aggregate;
pub mod round;
pub mod rank;
pub mod pipeline;

pub use path::{PathSpec, StatMiss};
pub use pipeline::run;

use serde_json::Value;

/// One player's fetched data. `document` is `None` when lookup or fetch failed.
#[derive(Clone, Debug)]
pub struct PlayerRecord {
    pub name: String,
    pub document: Option<Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: f64,
}

/// A row of the final board; ranks are contiguous from 1.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedEntry {
    pub rank: usize,
    pub name: String,
    pub score: f64,
}
