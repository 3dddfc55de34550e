// src/csv.rs
use std::io::{self, Write};

use crate::score::RankedEntry;

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Board rows ---------------- */

/// Fixed `decimals` digits; non-finite scores print as `inf`, `-inf`, `NaN`.
pub fn format_score(score: f64, decimals: u32) -> String {
    if score.is_finite() {
        format!("{:.*}", decimals as usize, score)
    } else {
        format!("{score}")
    }
}

/// `rank,name,score` for each entry. No header row.
pub fn board_rows(entries: &[RankedEntry], decimals: u32) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|e| vec![e.rank.to_string(), e.name.clone(), format_score(e.score, decimals)])
        .collect()
}

/// Write the whole board to any writer.
pub fn write_board<W: Write>(mut w: W, entries: &[RankedEntry], decimals: u32, sep: char) -> io::Result<()> {
    for row in board_rows(entries, decimals) {
        write_row(&mut w, &row, sep)?;
    }
    w.flush()
}
