// src/score/pipeline.rs

use serde_json::{Map, Value};

use crate::config::options::ScoreOptions;
use super::{aggregate::aggregate, rank, round::round, PlayerRecord, RankedEntry, ScoreEntry};

/// Score every record and rank the results.
///
/// An absent document scores as an empty one, so a player whose fetch failed still
/// takes a place on the board with the default score.
pub fn run(records: Vec<PlayerRecord>, opts: &ScoreOptions) -> Vec<RankedEntry> {
    let empty = Value::Object(Map::new());

    let scores: Vec<ScoreEntry> = records
        .into_iter()
        .map(|rec| {
            let _span = tracing::info_span!("player", name = %rec.name).entered();
            if rec.document.is_none() {
                logd!("no statistics document, scoring as empty");
            }
            let doc = rec.document.as_ref().unwrap_or(&empty);
            let score = round(aggregate(doc, opts), opts.decimals);
            ScoreEntry { name: rec.name, score }
        })
        .collect();

    rank::sort(scores, opts.reverse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::score::path::PathSpec;

    fn wins_opts() -> ScoreOptions {
        ScoreOptions {
            positive_paths: vec![PathSpec::parse("player.wins")],
            ..ScoreOptions::default()
        }
    }

    fn rec(name: &str, doc: Option<Value>) -> PlayerRecord {
        PlayerRecord { name: s!(name), document: doc }
    }

    #[test]
    fn absent_document_scores_default_and_stays_on_the_board() {
        let records = vec![
            rec("A", Some(json!({ "player": { "wins": 4 } }))),
            rec("Ghost", None),
        ];
        let out = run(records, &wins_opts());
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].name, "Ghost");
        assert_eq!(out[1].score, 0.0);
        assert_eq!(out[1].rank, 2);
    }

    #[test]
    fn scores_are_rounded_before_ranking() {
        // 2.04 and 2.01 both round to 2.0 and tie, keeping input order.
        let records = vec![
            rec("low", Some(json!({ "player": { "wins": 2.01 } }))),
            rec("high", Some(json!({ "player": { "wins": 2.04 } }))),
        ];
        let out = run(records, &wins_opts());
        assert_eq!(out[0].name, "low");
        assert_eq!(out[0].score, 2.0);
        assert_eq!(out[1].score, 2.0);
    }
}
