// tests/pipeline.rs
//
// End-to-end scoring over in-memory documents.
//
use rstest::rstest;
use serde_json::{json, Value};

use mini_leaderboard::config::options::{DivisorPaths, ScoreOptions};
use mini_leaderboard::score::{self, path::extract, round::round, PathSpec, PlayerRecord, RankedEntry};

fn record(name: &str, doc: Option<Value>) -> PlayerRecord {
    PlayerRecord { name: name.into(), document: doc }
}

fn wins(n: f64) -> Option<Value> {
    Some(json!({ "player": { "stats": { "wins": n } } }))
}

fn opts(pos: &[&str], neg: &[&str]) -> ScoreOptions {
    ScoreOptions {
        positive_paths: pos.iter().map(|p| PathSpec::parse(p)).collect(),
        negative_paths: neg.iter().map(|p| PathSpec::parse(p)).collect(),
        ..ScoreOptions::default()
    }
}

fn triples(board: &[RankedEntry]) -> Vec<(usize, &str, f64)> {
    board.iter().map(|e| (e.rank, e.name.as_str(), e.score)).collect()
}

#[test]
fn tied_players_keep_page_order() {
    let records = || vec![record("A", wins(10.0)), record("B", wins(10.0)), record("C", wins(5.0))];
    let mut o = opts(&["player.stats.wins"], &[]);

    let board = score::run(records(), &o);
    assert_eq!(triples(&board), [(1, "A", 10.0), (2, "B", 10.0), (3, "C", 5.0)]);

    o.reverse = true;
    let board = score::run(records(), &o);
    assert_eq!(triples(&board), [(1, "C", 5.0), (2, "A", 10.0), (3, "B", 10.0)]);
}

#[test]
fn distinct_scores_rank_max_first() {
    let records = vec![
        record("mid", wins(50.0)),
        record("top", wins(99.0)),
        record("low", wins(1.0)),
        record("second", wins(75.5)),
    ];
    let board = score::run(records, &opts(&["player.stats.wins"], &[]));
    assert_eq!(board.first().unwrap().name, "top");
    assert_eq!(board.last().unwrap().name, "low");
    assert_eq!(board.iter().map(|e| e.rank).collect::<Vec<_>>(), [1, 2, 3, 4]);
}

#[test]
fn absent_document_still_appears_once_with_default_score() {
    let records = vec![record("A", wins(3.0)), record("Gone", None), record("B", wins(-2.0))];
    let board = score::run(records, &opts(&["player.stats.wins"], &[]));

    let gone: Vec<_> = board.iter().filter(|e| e.name == "Gone").collect();
    assert_eq!(gone.len(), 1);
    assert_eq!(gone[0].score, 0.0);
    assert_eq!(triples(&board), [(1, "A", 3.0), (2, "Gone", 0.0), (3, "B", -2.0)]);
}

#[test]
fn default_paths_sum_bridge_modes() {
    let doc = json!({
        "player": { "stats": { "Duels": {
            "bridge_duel_wins": 100,
            "bridge_doubles_wins": 40,
            "bridge_threes_wins": 10,
            "bridge_four_wins": 5,
            "bridge_2v2v2v2_wins": 2,
            "bridge_3v3v3v3_wins": 1,
            "capture_threes_wins": 3,
            "sumo_duel_wins": 1000
        }}}
    });
    let board = score::run(vec![record("P", Some(doc))], &ScoreOptions::default());
    assert_eq!(board[0].score, 161.0);
}

#[test]
fn multiplicative_division_follows_list_order() {
    let doc = json!({ "s": { "a": 1e300, "big": 1e300, "tiny": 1e-300 } });
    let mut forward = opts(&["s.a"], &["s.big", "s.tiny"]);
    forward.multiplicative = true;
    let mut backward = opts(&["s.a"], &["s.tiny", "s.big"]);
    backward.multiplicative = true;

    // 1e300 / 1e300 / 1e-300 stays finite; dividing by the tiny stat first overflows
    let f = score::run(vec![record("x", Some(doc.clone()))], &forward)[0].score;
    let b = score::run(vec![record("x", Some(doc))], &backward)[0].score;
    assert_eq!(f, 1e300);
    assert_eq!(b, f64::INFINITY);
}

#[test]
fn additive_ignores_positive_order() {
    let doc = json!({ "s": { "a": 0.1, "b": 0.2, "c": 0.3 } });
    let one = score::run(vec![record("x", Some(doc.clone()))], &opts(&["s.a", "s.b", "s.c"], &[]));
    let two = score::run(vec![record("x", Some(doc))], &opts(&["s.c", "s.a", "s.b"], &[]));
    assert_eq!(one[0].score, two[0].score);
    assert_eq!(one[0].score, 0.6);
}

#[test]
fn nan_scores_rank_last() {
    let doc_nan = json!({ "s": { "a": 0, "b": 0 } });
    let doc_ok = json!({ "s": { "a": 6, "b": 3 } });
    for reverse in [false, true] {
        let mut o = opts(&["s.a"], &["s.b"]);
        o.multiplicative = true;
        o.reverse = reverse;
        let board = score::run(
            vec![record("nan", Some(doc_nan.clone())), record("ok", Some(doc_ok.clone())), record("none", None)],
            &o,
        );
        assert_eq!(board.last().unwrap().name, "nan");
        assert!(board.last().unwrap().score.is_nan());
        assert_eq!(board.len(), 3);
    }
}

#[test]
fn legacy_divisors_match_positive_indexed_reads() {
    let doc = json!({ "s": { "kills": 50, "deaths": 10 } });
    let mut o = opts(&["s.kills"], &["s.deaths"]);
    o.multiplicative = true;

    assert_eq!(score::run(vec![record("x", Some(doc.clone()))], &o)[0].score, 5.0);

    o.divisor_paths = DivisorPaths::PositiveIndexed;
    assert_eq!(score::run(vec![record("x", Some(doc))], &o)[0].score, 1.0);
}

#[rstest]
#[case(json!({ "a": { "b": "text" } }))]
#[case(json!({ "a": { "b": true } }))]
#[case(json!({ "a": { "b": null } }))]
#[case(json!({ "a": { "c": 1 } }))]
#[case(json!({ "a": 4 }))]
#[case(json!([1, 2, 3]))]
fn unusable_leaf_takes_default(#[case] doc: Value) {
    assert_eq!(extract(&doc, &PathSpec::parse("a.b"), 42.0), 42.0);
}

#[test]
fn rounding_examples() {
    assert_eq!(round(1.25, 1), 1.3);
    assert_eq!(round(1.24, 1), 1.2);
    assert_eq!(round(7.5, 0), 8.0);
    assert_eq!(round(-7.5, 0), -7.0);
}
