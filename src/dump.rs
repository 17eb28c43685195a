// src/dump.rs
//! Raw-range dumper.
//!
//! Works from a hand-maintained table of line ranges known to hold duplicated
//! tractate entries. Nothing here parses the literal; the ranges are taken on
//! trust and the text between them is copied out for manual review.

use std::fmt;

use crate::config::consts::{CHAPTER_MARKER, RAW_PREVIEW_CHARS, SIMILAR_LINES_MAX};
use crate::core::sanitize::ellipsize;
use crate::core::scan::slice_lines;
use crate::data::DataSet;

pub const RAW_HEADERS: [&str; 5] = ["Tractate", "Instance", "Line_Start", "Line_End", "Raw_Data"];
pub const SUMMARY_HEADERS: [&str; 5] =
    ["Tractate", "Instance_1_Lines", "Instance_2_Lines", "Line_Difference", "Issue_Description"];

const SIMILAR: &str = "Similar lengths - likely exact duplicate";
const DIFFERENT: &str = "Different content lengths";
const BOTH_HAVE_CHAPTERS: &str = " | Both contain chapter data";

/// 1-based inclusive line range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of lines covered, `end - start + 1`.
    pub fn len(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn slice(&self, lines: &[&str]) -> String {
        slice_lines(lines, self.start, self.end)
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateRanges {
    pub key: String,
    pub ranges: Vec<LineRange>,
}

impl DuplicateRanges {
    pub fn new(key: &str, ranges: &[(usize, usize)]) -> Self {
        Self {
            key: s!(key),
            ranges: ranges.iter().map(|&(s, e)| LineRange::new(s, e)).collect(),
        }
    }
}

/// Line ranges of the known duplicated entries in `tractate-contents.tsx`.
pub fn known_duplicates() -> Vec<DuplicateRanges> {
    vec![
        DuplicateRanges::new("beitza", &[(442, 488), (1375, 1421)]),
        DuplicateRanges::new("bava_kamma", &[(258, 349), (2050, 2141)]),
        DuplicateRanges::new("bava_metzia", &[(350, 441), (2142, 2233)]),
        DuplicateRanges::new("bava_batra", &[(166, 257), (2234, 2325)]),
        DuplicateRanges::new("avodah_zarah", &[(119, 165), (2427, 2473)]),
        DuplicateRanges::new("bekhorot", &[(489, 571), (3153, 3235)]),
        DuplicateRanges::new("arakhin", &[(36, 118), (3236, 3318)]),
    ]
}

/// Everything the dumper writes, before it touches the disk.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dump {
    pub raw: DataSet,
    /// `(key, review text)` in table order.
    pub reviews: Vec<(String, String)>,
    pub summary: DataSet,
}

pub fn dump(text: &str, table: &[DuplicateRanges]) -> Dump {
    let lines: Vec<&str> = text.lines().collect();

    let mut raw = DataSet::new(&RAW_HEADERS);
    let mut summary = DataSet::new(&SUMMARY_HEADERS);
    let mut reviews = Vec::with_capacity(table.len());

    for dup in table {
        let texts: Vec<String> = dup.ranges.iter().map(|r| r.slice(&lines)).collect();

        for (ix, (range, body)) in dup.ranges.iter().zip(&texts).enumerate() {
            raw.push(vec![
                dup.key.as_str().into(),
                format!("Instance_{}", ix + 1).into(),
                range.start.into(),
                range.end.into(),
                ellipsize(body, RAW_PREVIEW_CHARS).into(),
            ]);
        }

        reviews.push((dup.key.clone(), review_text(&dup.key, &dup.ranges, &texts)));

        if let ([r1, r2, ..], [t1, t2, ..]) = (dup.ranges.as_slice(), texts.as_slice()) {
            let difference = r1.len().abs_diff(r2.len());
            summary.push(vec![
                dup.key.as_str().into(),
                lines_cell(r1).into(),
                lines_cell(r2).into(),
                difference.into(),
                issue_description(difference, t1, t2).into(),
            ]);
        }
    }

    Dump { raw, reviews, summary }
}

fn lines_cell(r: &LineRange) -> String {
    format!("{r} ({} lines)", r.len())
}

fn issue_description(difference: usize, a: &str, b: &str) -> String {
    let mut issue = s!(if difference <= SIMILAR_LINES_MAX { SIMILAR } else { DIFFERENT });
    if a.contains(CHAPTER_MARKER) && b.contains(CHAPTER_MARKER) {
        issue.push_str(BOTH_HAVE_CHAPTERS);
    }
    issue
}

/// Side-by-side review file contents for one key.
pub fn review_text(key: &str, ranges: &[LineRange], texts: &[String]) -> String {
    let mut out = format!("DUPLICATE ANALYSIS FOR: {}\n", key.to_uppercase());
    out.push_str(&"=".repeat(60));
    out.push_str("\n\n");
    for (ix, (range, body)) in ranges.iter().zip(texts).enumerate() {
        out.push_str(&format!("INSTANCE {} (Lines {range}):\n", ix + 1));
        out.push_str(&"-".repeat(40));
        out.push('\n');
        out.push_str(body);
        out.push_str("\n\n");
    }
    out
}
