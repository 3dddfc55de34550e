// src/core/sanitize.rs

/// The handful of entities the leaderboard markup uses. `&amp;` goes last so
/// `&amp;lt;` stays literal.
const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

pub fn normalize_entities(s: &str) -> String {
    ENTITIES.iter().fold(s!(s), |acc, (from, to)| acc.replace(*from, *to))
}

/// Collapse whitespace runs to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Player names never contain whitespace; the page pads and wraps them.
pub fn compact_name(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Remove any `[ ... ]` bracket tags (rank prefixes like `[MVP+]`).
/// Greedy within each bracket pair, no nesting.
pub fn strip_brackets(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_bracket = false;
    for ch in s.chars() {
        match ch {
            '[' => in_bracket = true,
            ']' => in_bracket = false,
            _ if !in_bracket => out.push(ch),
            _ => {}
        }
    }
    out.trim().to_string()
}
