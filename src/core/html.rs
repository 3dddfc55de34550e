// src/core/html.rs
// Tolerant, hand-rolled HTML scanning. Enough to walk class-marked blocks of a
// server-rendered page; not a DOM.

const VOID_TAGS: [&str; 8] = ["br", "img", "input", "meta", "link", "hr", "source", "wbr"];

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// One tag as it appears in the source.
#[derive(Debug, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Lowercased tag name, without the `/`.
    pub name: String,
    /// Raw text after the name, up to (not including) `>`.
    pub attrs: &'a str,
    pub closing: bool,
    /// Byte offset of `<`.
    pub start: usize,
    /// Byte offset just past `>`.
    pub end: usize,
}

impl Tag<'_> {
    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.name.as_str()) || self.attrs.trim_end().ends_with('/')
    }

    /// Whitespace-separated tokens of the `class` attribute.
    pub fn classes(&self) -> Vec<String> {
        attr_value(self.attrs, "class")
            .map(|v| v.split_whitespace().map(String::from).collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }
}

/// Next real tag at or after `from`. Comments, doctypes and stray `<` are skipped.
pub fn next_tag(s: &str, from: usize) -> Option<Tag<'_>> {
    let b = s.as_bytes();
    let mut i = from;
    while i < b.len() {
        let lt = i + s.get(i..)?.find('<')?;
        if s[lt..].starts_with("<!--") {
            i = s[lt..].find("-->").map(|e| lt + e + 3)?;
            continue;
        }
        let mut j = lt + 1;
        let closing = b.get(j) == Some(&b'/');
        if closing { j += 1; }

        let name_start = j;
        while j < b.len() && (b[j].is_ascii_alphanumeric() || b[j] == b'-') {
            j += 1;
        }
        if j == name_start {
            // "<!doctype", "< 3", etc.
            i = lt + 1;
            continue;
        }
        let name = s[name_start..j].to_ascii_lowercase();
        let gt = find_tag_end(b, j)?;
        return Some(Tag { name, attrs: &s[j..gt], closing, start: lt, end: gt + 1 });
    }
    None
}

/// Position of the `>` closing a tag, ignoring any inside quoted attribute values.
fn find_tag_end(b: &[u8], from: usize) -> Option<usize> {
    let mut in_s = false;
    let mut in_d = false;
    for (k, &c) in b.iter().enumerate().skip(from) {
        match c {
            b'\'' if !in_d => in_s = !in_s,
            b'"' if !in_s => in_d = !in_d,
            b'>' if !in_s && !in_d => return Some(k),
            _ => {}
        }
    }
    None
}

/// Value of attribute `name` in a tag's raw attribute text (quoted or bare).
pub fn attr_value<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(attrs);
    let needle = to_lower(name);
    let mut from = 0;
    while let Some(rel) = lc[from..].find(&needle) {
        let at = from + rel;
        from = at + needle.len();
        // must be a whole attribute name
        let before_ok = at == 0 || attrs.as_bytes()[at - 1].is_ascii_whitespace();
        let rest = attrs[from..].trim_start();
        if !before_ok || !rest.starts_with('=') {
            continue;
        }
        let val = rest[1..].trim_start();
        return Some(match val.chars().next() {
            Some(q) if q == '"' || q == '\'' => {
                let inner = &val[1..];
                &inner[..inner.find(q).unwrap_or(inner.len())]
            }
            _ => {
                let end = val.find(|c: char| c.is_ascii_whitespace()).unwrap_or(val.len());
                &val[..end]
            }
        });
    }
    None
}

/// Byte offset just past the close of the element opened by `open`.
/// Same-name nesting is counted; an unclosed element runs to the end of `s`.
pub fn element_end(s: &str, open: &Tag<'_>) -> usize {
    if open.is_void() {
        return open.end;
    }
    let mut depth = 1usize;
    let mut pos = open.end;
    while let Some(t) = next_tag(s, pos) {
        pos = t.end;
        if t.name != open.name || t.is_void() {
            continue;
        }
        if t.closing {
            depth -= 1;
            if depth == 0 {
                return t.end;
            }
        } else {
            depth += 1;
        }
    }
    s.len()
}

/// Next element at or after `from` carrying `class`, as `(start, end)` byte offsets
/// covering its opening through closing tag.
pub fn next_element_with_class(s: &str, class: &str, from: usize) -> Option<(usize, usize)> {
    let mut pos = from;
    while let Some(t) = next_tag(s, pos) {
        pos = t.end;
        if !t.closing && t.has_class(class) {
            return Some((t.start, element_end(s, &t)));
        }
    }
    None
}

/// First element named `name` at or after `from`, as `(start, end)` byte offsets.
pub fn next_element_named(s: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let mut pos = from;
    while let Some(t) = next_tag(s, pos) {
        pos = t.end;
        if !t.closing && t.name.eq_ignore_ascii_case(name) {
            return Some((t.start, element_end(s, &t)));
        }
    }
    None
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&super::sanitize::normalize_entities(&out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_tag_names_and_classes() {
        let s = r#"<!-- <div class="player"> --><TR class='row player'  data-x="a>b">"#;
        let t = next_tag(s, 0).unwrap();
        assert_eq!(t.name, "tr");
        assert!(!t.closing);
        assert!(t.has_class("player"));
        assert!(t.has_class("row"));
        assert!(!t.has_class("play"));
        assert_eq!(t.end, s.len());
    }

    #[test]
    fn attr_value_needs_whole_name() {
        assert_eq!(attr_value(r#" data-class="x" class="y""#, "class"), Some("y"));
        assert_eq!(attr_value(" class=bare id=7", "class"), Some("bare"));
        assert_eq!(attr_value(r#" id="q""#, "class"), None);
    }

    #[test]
    fn element_end_counts_nesting() {
        let s = "<div class=a><div>x</div><br><div>y</div></div><p>after</p>";
        let (start, end) = next_element_with_class(s, "a", 0).unwrap();
        assert_eq!(start, 0);
        assert_eq!(&s[end..], "<p>after</p>");
    }

    #[test]
    fn unclosed_element_runs_to_end() {
        let s = "<table class=leaderboard><tr><td>x</td></tr>";
        let (_, end) = next_element_with_class(s, "leaderboard", 0).unwrap();
        assert_eq!(end, s.len());
    }

    #[test]
    fn strip_tags_normalizes() {
        assert_eq!(strip_tags("<a href='#'> Foo&nbsp;<b>Bar</b>\n</a>"), "Foo Bar");
        assert_eq!(inner_after_open_tag("<a href=x>in<i>ner</i></a>"), "in<i>ner</i>");
    }
}
