// src/core/sanitize.rs

use crate::config::consts::SHEET_NAME_MAX;

/// File-safe stem for a tractate key: whitespace and `/` become `_`,
/// quotes are dropped.
pub fn file_stem(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for ch in key.chars() {
        match ch {
            '"' | '\'' => {}
            '/' | '\\' => out.push('_'),
            c if c.is_whitespace() => out.push('_'),
            c => out.push(c),
        }
    }
    out
}

/// Worksheet name for a tractate key: `file_stem` cut to the sheet name limit.
pub fn sheet_name(key: &str) -> String {
    truncate_chars(&file_stem(key), SHEET_NAME_MAX)
}

/// First `max` chars of `s` (not bytes).
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Cut to `max` chars and append `...` when anything was removed.
pub fn ellipsize(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        join!(&truncate_chars(s, max), "...")
    } else {
        s.to_string()
    }
}

/// Collapse runs of whitespace into a single space and trim.
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
