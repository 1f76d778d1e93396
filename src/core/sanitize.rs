// src/core/sanitize.rs

/// Collapse whitespace runs to one space and trim both ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Join non-empty parts with single spaces.
/// Missing pieces of a highlight must not leave double spaces behind.
pub fn join_parts<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = s!();
    for p in parts {
        let p = p.trim();
        if p.is_empty() { continue; }
        if !out.is_empty() { out.push(' '); }
        out.push_str(p);
    }
    out
}
