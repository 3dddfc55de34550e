// src/config/file.rs
//! Optional TOML config file. Every section and key may be omitted.
//!
//! ```toml
//! [scrape]
//! url = "https://hypixel.net/duels/leaderboard/bridge"
//! player_count = 50
//!
//! [score]
//! positive_paths = ["player.stats.Duels.bridge_kills"]
//! negative_paths = ["player.stats.Duels.bridge_deaths"]
//! multiplicative = true
//! decimals = 2
//! ```

use std::path::Path;

use super::options::AppOptions;

/// Load options from `path`. Falls back to defaults if the file is missing or invalid.
pub fn load(path: impl AsRef<Path>) -> AppOptions {
    let path = path.as_ref();
    if !path.exists() {
        logw!("config file {} not found, using defaults", path.display());
        return AppOptions::default();
    }
    match std::fs::read_to_string(path) {
        Ok(contents) => match parse(&contents) {
            Ok(opts) => {
                logf!("config loaded from {}", path.display());
                opts
            }
            Err(e) => {
                logw!("failed to parse {}: {e}, using defaults", path.display());
                AppOptions::default()
            }
        },
        Err(e) => {
            logw!("failed to read {}: {e}, using defaults", path.display());
            AppOptions::default()
        }
    }
}

pub fn parse(contents: &str) -> Result<AppOptions, toml::de::Error> {
    toml::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::DivisorPaths;
    use crate::score::PathSpec;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let opts = parse(
            r#"
            [score]
            negative_paths = ["player.stats.Duels.bridge_deaths"]
            multiplicative = true
            divisor_paths = "positive_indexed"
            "#,
        )
        .unwrap();

        assert!(opts.score.multiplicative);
        assert_eq!(opts.score.divisor_paths, DivisorPaths::PositiveIndexed);
        assert_eq!(opts.score.negative_paths, vec![PathSpec::parse("player.stats.Duels.bridge_deaths")]);
        assert_eq!(opts.score.positive_paths.len(), 7);
        assert_eq!(opts.scrape, AppOptions::default().scrape);
    }

    #[test]
    fn bad_types_are_errors() {
        assert!(parse("[score]\ndecimals = \"two\"").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let p = std::env::temp_dir().join("mlm_no_such_config.toml");
        let _ = std::fs::remove_file(&p);
        assert_eq!(load(&p), AppOptions::default());
    }
}
