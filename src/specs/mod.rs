// src/specs/mod.rs
//! # Remote “specs”
//!
//! One module per remote page or endpoint. Each spec encodes *where the data lives*
//! and *how to read it*:
//!
//! - `leaderboard` – the player names on a hypixel.net leaderboard page (HTML).
//! - `mojang` – username → player UUID.
//! - `hypixel` – player UUID → raw statistics document (JSON).
//!
//! ## What does **not** live here
//! - **Pacing.** Specs make exactly one request per call; the runner wraps calls in a
//!   `core::Throttle`.
//! - **Scoring.** Documents are handed over untouched; `score` decides what to read.
//! - **Recovery.** Specs return `FetchError`; the runner decides whether a failure is
//!   fatal (the page) or degrades to an absent record (one player).
//!
//! ## Typical call chain
//! ```text
//! runner → LeaderboardPage::player_names → NameResolver::resolve → StatsSource::fetch
//!        → score::run → file::export_board
//! ```
//!
//! The traits below are the seams the runner is written against, so a run can be
//! driven end to end by in-memory fakes.
pub mod leaderboard;
pub mod mojang;
pub mod hypixel;

use serde_json::Value;
use uuid::Uuid;

use crate::core::FetchError;

/// Stable player identifier returned by the name lookup.
pub type PlayerId = Uuid;

pub trait LeaderboardPage {
    /// Up to `count` unique names from the top of the board at `url`, in page order.
    fn player_names(&self, url: &str, count: usize) -> Result<Vec<String>, FetchError>;
}

pub trait NameResolver {
    fn resolve(&self, name: &str) -> Result<PlayerId, FetchError>;
}

pub trait StatsSource {
    fn fetch(&self, id: &PlayerId) -> Result<Value, FetchError>;
}
