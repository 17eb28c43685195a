// src/core/scan.rs
// Naive text scanning helpers for hand-formatted source literals.
// Brace counting does not know about string literals: a `{` or `}` inside a
// quoted name is counted like any other.

/// Given the byte offset of an opening `{`, return the block up to and
/// including its matching `}`. `None` if the counter never returns to zero.
pub fn balanced_block(s: &str, open: usize) -> Option<&str> {
    let tail = s.get(open..)?;
    if !tail.starts_with('{') {
        return None;
    }
    let mut depth = 0usize;
    for (i, ch) in tail.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&tail[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Byte offset of the char following the one starting at `at`.
pub fn next_char_boundary(s: &str, at: usize) -> usize {
    s[at..].chars().next().map_or(s.len(), |c| at + c.len_utf8())
}

/// 1-based inclusive line slice, clamped to the available lines,
/// joined with `\n` and trimmed.
pub fn slice_lines(lines: &[&str], start: usize, end: usize) -> String {
    let from = start.saturating_sub(1).min(lines.len());
    let to = end.min(lines.len()).max(from);
    lines[from..to].join("\n").trim().to_string()
}
