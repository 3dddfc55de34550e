// src/score/rank.rs
//! Ranking of scored players.

use std::cmp::Ordering;

use super::{RankedEntry, ScoreEntry};

/// Order `scores` and number them 1..=N.
///
/// Highest first unless `reverse`. Equal scores keep their input order in either
/// direction, and NaN scores always go last.
pub fn sort(scores: Vec<ScoreEntry>, reverse: bool) -> Vec<RankedEntry> {
    let mut indexed: Vec<(usize, ScoreEntry)> = scores.into_iter().enumerate().collect();

    indexed.sort_by(|(ia, a), (ib, b)| compare(a.score, b.score, reverse).then(ia.cmp(ib)));

    indexed
        .into_iter()
        .enumerate()
        .map(|(pos, (_, e))| RankedEntry { rank: pos + 1, name: e.name, score: e.score })
        .collect()
}

fn compare(a: f64, b: f64, reverse: bool) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            // neither is NaN, and -0.0 == 0.0 counts as a tie
            let asc = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if reverse { asc } else { asc.reverse() }
        }
    }
}
