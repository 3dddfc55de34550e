// src/score/aggregate.rs
//! Reduce one statistics document to a single score.

use serde_json::Value;

use crate::config::options::{DivisorPaths, ScoreOptions};
use super::path::{extract, PathSpec};

/// Combine the configured paths of `doc` into one score.
///
/// Additive: `0 + Σ positive − Σ negative`, missing stats count as 0.
/// Multiplicative: `1 × Π positive ÷ negative₀ ÷ negative₁ …`, missing stats count as 1.
/// Division happens in list order and is unguarded, so a zero divisor yields ±inf or NaN.
pub fn aggregate(doc: &Value, opts: &ScoreOptions) -> f64 {
    let (start, default) = if opts.multiplicative { (1.0, 1.0) } else { (0.0, 0.0) };

    let mut total = start;
    for path in &opts.positive_paths {
        let v = extract(doc, path, default);
        total = if opts.multiplicative { total * v } else { total + v };
    }

    for (i, path) in opts.negative_paths.iter().enumerate() {
        let v = match divisor_path(opts, i, path) {
            Some(p) => extract(doc, p, default),
            None => default,
        };
        total = if opts.multiplicative { total / v } else { total - v };
    }

    total
}

/// Which path the i-th negative step reads.
fn divisor_path<'a>(opts: &'a ScoreOptions, i: usize, own: &'a PathSpec) -> Option<&'a PathSpec> {
    match opts.divisor_paths {
        DivisorPaths::Negative => Some(own),
        // Legacy reads the positive list at the same index; past its end nothing is read.
        DivisorPaths::PositiveIndexed => opts.positive_paths.get(i),
    }
}
