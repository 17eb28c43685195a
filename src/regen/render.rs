// src/regen/render.rs
//! TypeScript rendering of a chapter map.
//!
//! The output is written so that `specs::chapter_data` reads it back to the
//! same records. Names are emitted verbatim inside double quotes; a name that
//! itself contains `"` will not survive the round trip and is logged as a
//! warning.

use std::fmt::Write as _;

use tracing::warn;

use crate::model::{ChapterMap, ChapterRecord};

const FIELD_TYPES: [&str; 7] = [
    "number: number;",
    "englishName: string;",
    "hebrewName: string;",
    "startFolio: number;",
    "startSide: 'a' | 'b';",
    "endFolio: number;",
    "endSide: 'a' | 'b';",
];

/// `export const <declaration>: Record<...> = { ... };` for one instance per
/// key, keys in lexicographic order.
pub fn render_chapter_data(map: &ChapterMap, declaration: &str) -> String {
    render_entries(map.iter().map(|(k, v)| (k.as_str(), v.as_slice())), declaration)
}

fn render_entries<'a>(
    entries: impl IntoIterator<Item = (&'a str, &'a [ChapterRecord])>,
    declaration: &str,
) -> String {
    let mut out = format!("export const {declaration}: Record<string, Array<{{\n");
    for field in FIELD_TYPES {
        let _ = writeln!(out, "  {field}");
    }
    out.push_str("}>> = {\n");

    for (key, chapters) in entries {
        let _ = writeln!(out, "  \"{key}\": [");
        for ch in chapters {
            if let Some(name) = unquotable_name(ch) {
                warn!("{key} chapter {}: name {name:?} contains '\"' and will not re-parse", ch.number);
            }
            out.push_str(&record_line(ch));
            out.push('\n');
        }
        out.push_str("  ],\n");
    }
    out.push_str("};\n");
    out
}

/// The first name that cannot sit inside `"..."` unchanged.
pub fn unquotable_name(ch: &ChapterRecord) -> Option<&str> {
    [ch.english_name.as_str(), ch.hebrew_name.as_str()]
        .into_iter()
        .find(|name| name.contains('"'))
}

pub fn record_line(ch: &ChapterRecord) -> String {
    format!(
        "    {{ number: {}, englishName: \"{}\", hebrewName: \"{}\", startFolio: {}, startSide: '{}', endFolio: {}, endSide: '{}' }},",
        ch.number, ch.english_name, ch.hebrew_name, ch.start.number, ch.start.side, ch.end.number, ch.end.side,
    )
}
