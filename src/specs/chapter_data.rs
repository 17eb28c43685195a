// src/specs/chapter_data.rs
//! Reader for the `CHAPTER_DATA` object literal.
//!
//! Expected shape:
//! ```text
//! export const CHAPTER_DATA<anything> = {
//!   berakhot: [
//!     { number: 1, englishName: "..", hebrewName: "..", startFolio: 2, startSide: "a", endFolio: 13, endSide: "a" },
//!   ],
//!   "bava kamma": [ ... ],
//! };
//! ```
//! Sides may be quoted with `"` or `'`; the regenerator writes `'`.
//!
//! This is text scraping, not a JS parser. Braces or quotes inside names will
//! confuse it.

use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, warn};

use crate::config::consts::DECLARATION_NAME;
use crate::core::scan::{balanced_block, next_char_boundary};
use crate::error::{Error, Result};
use crate::file;
use crate::model::{ChapterRecord, ChapterTable, Folio, Side};

// `<key>: [` where key is a bare word or a double-quoted string.
static ENTRY_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\w+|"[^"]+"):\s*\["#).expect("entry head pattern"));

// What may follow the `]` that closes an entry: the next entry, or the end of the object.
static NEXT_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\A,\s*(?:\w+|"[^"]+"):\s*\["#).expect("next entry pattern"));
static OBJECT_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A,?\s*\}").expect("object end pattern"));

static RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\{\s*number:\s*([0-9]+),",
        r#"\s*englishName:\s*"([^"]*)","#,
        r#"\s*hebrewName:\s*"([^"]*)","#,
        r"\s*startFolio:\s*([0-9]+),",
        r#"\s*startSide:\s*["']([ab])["'],"#,
        r"\s*endFolio:\s*([0-9]+),",
        r#"\s*endSide:\s*["']([ab])["']\s*\}"#,
    ))
    .expect("chapter record pattern")
});

/// Read and parse `CHAPTER_DATA` from a source file.
pub fn read_chapter_data(path: &Path, declaration: &str) -> Result<ChapterTable> {
    let text = file::read_to_string(path)?;
    parse_declaration(&text, declaration)
}

/// Parse the `CHAPTER_DATA` literal out of a whole source file.
pub fn parse_chapter_data(text: &str) -> Result<ChapterTable> {
    parse_declaration(text, DECLARATION_NAME)
}

/// Parse the object literal declared as `export const <name> ... = { ... }`.
pub fn parse_declaration(text: &str, name: &str) -> Result<ChapterTable> {
    let body = object_span(text, name)?;

    let mut table = ChapterTable::new();
    for (key, chapters_text) in split_entries(body) {
        let key = key.trim_matches('"');
        let chapters = parse_records(chapters_text);

        let candidates = chapters_text.matches("number:").count();
        if candidates > chapters.len() {
            debug!(
                "{key}: dropped {} of {candidates} records that did not match the fixed shape",
                candidates - chapters.len()
            );
        }
        table.push_instance(key, chapters);
    }
    Ok(table)
}

/// The `{ ... }` text of the declaration, braces included.
/// An unbalanced literal yields an empty span.
fn object_span<'a>(text: &'a str, name: &str) -> Result<&'a str> {
    let pattern = format!(r"(?s)export const {}.*?= \{{", regex::escape(name));
    let decl = Regex::new(&pattern).map_err(|_| Error::DeclarationNotFound(s!(name)))?;
    let m = decl
        .find(text)
        .ok_or_else(|| Error::DeclarationNotFound(s!(name)))?;

    let open = m.end() - 1;
    Ok(balanced_block(text, open).unwrap_or_else(|| {
        warn!("{name}: opening brace at byte {open} is never closed");
        ""
    }))
}

/// Split the object body into `(raw key, chapter list text)` pairs.
///
/// An entry body ends at the first `]` followed by either another `key: [` or
/// the object's closing brace. When no such `]` exists the scan resumes one
/// char after the failed head, the way a regex search would.
fn split_entries(span: &str) -> Vec<(&str, &str)> {
    let mut out = Vec::new();
    let mut pos = 0usize;

    while pos <= span.len() {
        let Some(caps) = ENTRY_HEAD.captures_at(span, pos) else { break };
        let (Some(head), Some(key)) = (caps.get(0), caps.get(1)) else { break };

        match entry_end(span, head.end()) {
            Some(close) => {
                out.push((key.as_str(), &span[head.end()..close]));
                pos = close + 1;
            }
            None => pos = next_char_boundary(span, head.start()),
        }
    }
    out
}

fn entry_end(span: &str, from: usize) -> Option<usize> {
    span[from..]
        .match_indices(']')
        .map(|(i, _)| from + i)
        .find(|&close| {
            let tail = &span[close + 1..];
            NEXT_ENTRY.is_match(tail) || OBJECT_END.is_match(tail)
        })
}

/// Every well-formed record in an entry body, in order.
pub fn parse_records(text: &str) -> Vec<ChapterRecord> {
    RECORD.captures_iter(text).filter_map(|c| record_from(&c)).collect()
}

fn record_from(c: &Captures<'_>) -> Option<ChapterRecord> {
    let folio = |n: usize, s: usize| -> Option<Folio> {
        Some(Folio::new(c[n].parse().ok()?, Side::from_marker(&c[s])?))
    };
    Some(ChapterRecord {
        number: c[1].parse().ok()?,
        english_name: s!(&c[2]),
        hebrew_name: s!(&c[3]),
        start: folio(4, 5)?,
        end: folio(6, 7)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"import { Link } from "wouter";

export const CHAPTER_DATA: Record<string, Array<{ number: number; englishName: string; hebrewName: string; startFolio: number; startSide: 'a' | 'b'; endFolio: number; endSide: 'a' | 'b' }>> = {
  berakhot: [
    { number: 1, englishName: "Me'eimatay", hebrewName: "מאימתי", startFolio: 2, startSide: "a", endFolio: 13, endSide: "a" },
    { number: 2, englishName: "Hayah Korei", hebrewName: "היה קורא", startFolio: 13, startSide: "a", endFolio: 17, endSide: "b" }
  ],
  "bava kamma": [
    { number: 1, englishName: "Arba'ah Avot", hebrewName: "ארבעה אבות", startFolio: 2, startSide: "a", endFolio: 17, endSide: "a" },
    { number: 2, englishName: "Broken", hebrewName: "כיצד הרגל", startFolio: 17, startSide: "c", endFolio: 27, endSide: "a" },
    { number: 3, englishName: "HaMani'ach", hebrewName: "המניח", startFolio: 27, startSide: 'a', endFolio: 36, endSide: 'b' },
  ],
  berakhot: [
    { number: 1, englishName: "Me'eimatay", hebrewName: "מאימתי", startFolio: 2, startSide: "a", endFolio: 13, endSide: "b" }
  ]
};

export default function TractateContents() {
  return { chapters: CHAPTER_DATA };
}
"#;

    #[test]
    fn parses_entries_and_groups_duplicate_keys() {
        let t = parse_chapter_data(SOURCE).unwrap();
        let keys: Vec<_> = t.iter().map(|(k, v)| (k, v.len())).collect();
        assert_eq!(keys, [("berakhot", 2), ("bava kamma", 1)]);

        let berakhot = t.instances("berakhot").unwrap();
        assert_eq!(berakhot[0].len(), 2);
        assert_eq!(berakhot[1].len(), 1);
        assert_eq!(berakhot[0][1].english_name, "Hayah Korei");
        assert_eq!(berakhot[0][1].end, Folio::new(17, Side::B));
        assert_eq!(berakhot[1][0].folio_range(), "2a-13b");
    }

    #[test]
    fn malformed_records_are_dropped_silently() {
        let t = parse_chapter_data(SOURCE).unwrap();
        let bk = &t.instances("bava kamma").unwrap()[0];
        let numbers: Vec<_> = bk.iter().map(|c| c.number).collect();
        assert_eq!(numbers, [1, 3]); // side "c" does not match
        assert_eq!(bk[1].hebrew_name, "המניח");
        assert_eq!(bk[1].start, Folio::new(27, Side::A)); // single-quoted side
    }

    #[test]
    fn missing_declaration_is_fatal() {
        let err = parse_chapter_data("const OTHER = { a: [] };").unwrap_err();
        assert!(matches!(err, Error::DeclarationNotFound(ref n) if n == "CHAPTER_DATA"));
        assert_eq!(err.to_string(), "Could not find CHAPTER_DATA object");
    }

    #[test]
    fn unbalanced_literal_yields_empty_table() {
        let t = parse_chapter_data("export const CHAPTER_DATA = { a: [ { number: 1").unwrap();
        assert!(t.is_empty());
    }

    #[test]
    fn empty_entries_are_kept_as_empty_instances() {
        let src = "export const CHAPTER_DATA = {\n  tamid: [],\n  meilah: [\n  ]\n};";
        let t = parse_chapter_data(src).unwrap();
        let keys: Vec<_> = t.iter().map(|(k, v)| (k, v[0].len())).collect();
        assert_eq!(keys, [("tamid", 0), ("meilah", 0)]);
    }

    #[test]
    fn beitza_five_and_seven() {
        let chapters = |n: u32| -> String {
            (1..=n)
                .map(|i| format!(
                    "    {{ number: {i}, englishName: \"Chapter {i}\", hebrewName: \"פרק\", startFolio: {}, startSide: \"a\", endFolio: {}, endSide: \"b\" }},\n",
                    i * 2, i * 2 + 1
                ))
                .collect()
        };
        let src = format!(
            "export const CHAPTER_DATA = {{\n  \"beitza\": [\n{}  ],\n  \"beitza\": [\n{}  ],\n}};",
            chapters(5),
            chapters(7)
        );
        let t = parse_chapter_data(&src).unwrap();
        let lens: Vec<_> = t.instances("beitza").unwrap().iter().map(Vec::len).collect();
        assert_eq!(lens, [5, 7]);
    }

    #[test]
    fn custom_declaration_name() {
        let src = "export const MISHNAH_DATA = { peah: [ { number: 1, englishName: \"A\", hebrewName: \"ב\", startFolio: 1, startSide: \"a\", endFolio: 1, endSide: \"b\" } ] };";
        assert!(parse_chapter_data(src).is_err());
        let t = parse_declaration(src, "MISHNAH_DATA").unwrap();
        assert_eq!(t.instances("peah").unwrap()[0].len(), 1);
    }
}
