// src/score/path.rs
//! Dot-separated paths into a player's statistics document.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Ordered field names identifying one leaf in a statistics document,
/// parsed from `a.b.c`. Empty segments are kept; they never match a field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub struct PathSpec {
    raw: String,
    segments: Vec<String>,
}

impl PathSpec {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: s!(raw),
            segments: raw.split('.').map(String::from).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl From<String> for PathSpec {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for PathSpec {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parse a comma-separated path list. Spaces are removed and empty entries dropped.
pub fn parse_path_list(text: &str) -> Vec<PathSpec> {
    let compact: String = text.chars().filter(|c| *c != ' ').collect();
    compact
        .split(',')
        .filter(|p| !p.is_empty())
        .map(PathSpec::parse)
        .collect()
}

/// Why a lookup fell through to the default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatMiss {
    /// A step hit a non-mapping or an absent field.
    NotFound,
    /// The leaf exists but is not a number.
    NotNumeric,
}

/// Walk `path` through `doc`. Integer and float leaves both come back as `f64`.
pub fn lookup(doc: &Value, path: &PathSpec) -> Result<f64, StatMiss> {
    let mut cur = doc;
    for piece in path.segments() {
        cur = cur
            .as_object()
            .and_then(|map| map.get(piece))
            .ok_or(StatMiss::NotFound)?;
    }
    match cur {
        Value::Number(n) => n.as_f64().ok_or(StatMiss::NotNumeric),
        _ => Err(StatMiss::NotNumeric),
    }
}

/// Total form of [`lookup`]: any miss is logged and resolves to `default`.
pub fn extract(doc: &Value, path: &PathSpec, default: f64) -> f64 {
    match lookup(doc, path) {
        Ok(v) => v,
        Err(StatMiss::NotFound) => {
            logw!("stat at {path} was not found, defaulting to {default}");
            default
        }
        Err(StatMiss::NotNumeric) => {
            logw!("stat at {path} was not a number, defaulting to {default}");
            default
        }
    }
}
