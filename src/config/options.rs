// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use super::consts::*;
use crate::score::path::PathSpec;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub score: ScoreOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Replace out-of-range values with their defaults, warning about each one.
    pub fn validate(&mut self) {
        self.scrape.validate();
        self.score.validate();
    }
}

/* ---------------- Scrape ---------------- */

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    /// Leaderboard page to take the player names from.
    pub url: String,
    /// How many players to take from the top of the page.
    pub player_count: usize,
    /// Minimum gap between name → id lookups.
    pub lookup_delay_ms: u64,
    /// Minimum gap between statistics fetches.
    pub stats_delay_ms: u64,
    pub api_key: Option<String>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(LEADERBOARD_URL),
            player_count: DEFAULT_PLAYER_COUNT,
            lookup_delay_ms: DEFAULT_LOOKUP_DELAY_MS,
            stats_delay_ms: DEFAULT_STATS_DELAY_MS,
            api_key: None,
        }
    }
}

impl ScrapeOptions {
    pub fn lookup_delay(&self) -> Duration {
        Duration::from_millis(self.lookup_delay_ms)
    }

    pub fn stats_delay(&self) -> Duration {
        Duration::from_millis(self.stats_delay_ms)
    }

    fn validate(&mut self) {
        if self.player_count == 0 {
            logw!("player count must be at least 1, defaulting to {DEFAULT_PLAYER_COUNT}");
            self.player_count = DEFAULT_PLAYER_COUNT;
        }
        if self.lookup_delay_ms < MIN_DELAY_MS {
            logw!("Mojang delay {}ms is below the minimum, using {MIN_DELAY_MS}ms", self.lookup_delay_ms);
            self.lookup_delay_ms = MIN_DELAY_MS;
        }
        if self.stats_delay_ms < MIN_DELAY_MS {
            logw!("Hypixel delay {}ms is below the minimum, using {MIN_DELAY_MS}ms", self.stats_delay_ms);
            self.stats_delay_ms = MIN_DELAY_MS;
        }
    }
}

/* ---------------- Score ---------------- */

/// Which path each negative step reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisorPaths {
    /// The i-th negative step reads `negative_paths[i]`.
    #[default]
    Negative,
    /// The i-th negative step reads `positive_paths[i]`. Kept so boards from
    /// mlm 1.0 can be reproduced.
    PositiveIndexed,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScoreOptions {
    pub positive_paths: Vec<PathSpec>,
    pub negative_paths: Vec<PathSpec>,
    /// Product/quotient instead of sum/difference.
    pub multiplicative: bool,
    pub decimals: u32,
    /// Lowest score first.
    pub reverse: bool,
    pub divisor_paths: DivisorPaths,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            positive_paths: default_positive_paths(),
            negative_paths: Vec::new(),
            multiplicative: false,
            decimals: DEFAULT_DECIMALS,
            reverse: false,
            divisor_paths: DivisorPaths::Negative,
        }
    }
}

impl ScoreOptions {
    fn validate(&mut self) {
        if self.decimals > MAX_DECIMALS {
            logw!("invalid number of decimals {}, defaulting to {DEFAULT_DECIMALS}", self.decimals);
            self.decimals = DEFAULT_DECIMALS;
        }
        if self.positive_paths.is_empty() {
            logw!("positive paths cannot be empty, using the default bridge wins paths");
            self.positive_paths = default_positive_paths();
        }
    }
}

pub fn default_positive_paths() -> Vec<PathSpec> {
    DEFAULT_POSITIVE_PATHS.iter().map(|p| PathSpec::parse(p)).collect()
}

/* ---------------- Export ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Output file; a timestamped name is used when unset.
    pub file_name: Option<PathBuf>,
    /// Print step-by-step progress to the console.
    pub show_progress: bool,
}
