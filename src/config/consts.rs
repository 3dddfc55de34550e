// src/config/consts.rs

// Net config
pub const LEADERBOARD_URL: &str = "https://hypixel.net/duels/leaderboard/bridge";
pub const MOJANG_PROFILE_URL: &str = "https://api.mojang.com/users/profiles/minecraft/";
pub const HYPIXEL_PLAYER_URL: &str = "https://api.hypixel.net/v2/player";
pub const USER_AGENT: &str = "Mozilla";
pub const REFERRER: &str = "http://www.google.com";
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const API_KEY_HEADER: &str = "API-Key";
pub const API_KEY_ENV: &str = "HYPIXEL_API_KEY";

// Scrape
pub const DEFAULT_PLAYER_COUNT: usize = 100;

// Rate limiting (serial; one throttle per service)
pub const DEFAULT_LOOKUP_DELAY_MS: u64 = 2000;
pub const DEFAULT_STATS_DELAY_MS: u64 = 2000;
pub const MIN_DELAY_MS: u64 = 1000;

// Score
pub const DEFAULT_POSITIVE_PATHS: [&str; 7] = [
    "player.stats.Duels.bridge_duel_wins",
    "player.stats.Duels.bridge_doubles_wins",
    "player.stats.Duels.bridge_threes_wins",
    "player.stats.Duels.bridge_four_wins",
    "player.stats.Duels.bridge_2v2v2v2_wins",
    "player.stats.Duels.bridge_3v3v3v3_wins",
    "player.stats.Duels.capture_threes_wins",
];
pub const DEFAULT_DECIMALS: u32 = 1;
pub const MAX_DECIMALS: u32 = 10;

// Export
pub const OUTPUT_EXT: &str = "csv";
pub const OUTPUT_SEP: char = ',';
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";
