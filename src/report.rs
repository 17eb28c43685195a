// src/report.rs
//
// Duplicate-entry report: summary, per-chapter detail, per-tractate
// side-by-side tables, plus structural validation of every instance.
//
// Instances are aligned by position, not by content: slot N of Instance 1
// sits next to slot N of Instance 2 whatever their chapter numbers say.

use std::collections::HashMap;

use crate::data::{Cell, DataSet};
use crate::model::{ChapterRecord, ChapterTable, TractateInstance};

pub const COMPARISON_HEADERS: [&str; 10] = [
    "Tractate", "Instance", "Chapter_Number", "English_Name", "Hebrew_Name",
    "Start_Folio", "Start_Side", "End_Folio", "End_Side", "Folio_Range",
];

pub const SUMMARY_HEADERS: [&str; 6] = [
    "Tractate", "Num_Instances", "Chapters_Instance_1", "Chapters_Instance_2",
    "Difference", "Issue_Type",
];

pub const DETAIL_HEADERS: [&str; 10] = [
    "Tractate", "Chapter",
    "Instance_1_English", "Instance_2_English",
    "Instance_1_Hebrew", "Instance_2_Hebrew",
    "Instance_1_Range", "Instance_2_Range",
    "Differences", "Has_Differences",
];

pub const VALIDATION_HEADERS: [&str; 4] = ["Tractate", "Instance", "Chapter", "Issue"];

pub const COUNT_MISMATCH: &str = "Chapter count mismatch";
pub const DUPLICATE_ENTRY: &str = "Duplicate entry";
pub const NO_DIFFERENCES: &str = "No differences";

/// Everything the extractor writes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub summary: DataSet,
    pub details: DataSet,
    pub validation: DataSet,
    /// One side-by-side table per duplicated key, in encounter order.
    pub tractates: Vec<(String, DataSet)>,
}

pub fn build_report(table: &ChapterTable) -> Report {
    Report {
        summary: summary(table),
        details: details(table),
        validation: validation(table),
        tractates: table
            .duplicates()
            .map(|(key, instances)| (s!(key), comparison_table(key, instances)))
            .collect(),
    }
}

pub fn instance_label(ix: usize) -> String {
    format!("Instance {}", ix + 1)
}

/* ---------------- Side-by-side comparison ---------------- */

/// One (chapter slot, instance) cell of the aligned comparison.
/// `chapter` is `None` for padding when the instance is shorter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComparisonRow<'a> {
    pub tractate: &'a str,
    pub instance: usize, // 0-based
    pub chapter: Option<&'a ChapterRecord>,
}

/// Slot-major rows: slot 0 of every instance, then slot 1, ...
/// Always `instances.len() * longest` rows.
pub fn comparison_rows<'a>(key: &'a str, instances: &'a [TractateInstance]) -> Vec<ComparisonRow<'a>> {
    let longest = instances.iter().map(Vec::len).max().unwrap_or(0);
    let mut rows = Vec::with_capacity(longest * instances.len());
    for slot in 0..longest {
        for (instance, chapters) in instances.iter().enumerate() {
            rows.push(ComparisonRow { tractate: key, instance, chapter: chapters.get(slot) });
        }
    }
    rows
}

pub fn comparison_table(key: &str, instances: &[TractateInstance]) -> DataSet {
    let mut ds = DataSet::new(&COMPARISON_HEADERS);
    for row in comparison_rows(key, instances) {
        let rest: [Cell; 8] = match row.chapter {
            Some(ch) => [
                ch.number.into(),
                ch.english_name.as_str().into(),
                ch.hebrew_name.as_str().into(),
                ch.start.number.into(),
                ch.start.side.as_str().into(),
                ch.end.number.into(),
                ch.end.side.as_str().into(),
                ch.folio_range().into(),
            ],
            None => [
                Cell::Empty, "".into(), "".into(), Cell::Empty,
                "".into(), Cell::Empty, "".into(), "".into(),
            ],
        };
        let mut cells = vec![Cell::from(row.tractate), Cell::from(instance_label(row.instance))];
        cells.extend(rest);
        ds.push(cells);
    }
    ds
}

/* ---------------- Summary ---------------- */

pub fn summary(table: &ChapterTable) -> DataSet {
    let mut ds = DataSet::new(&SUMMARY_HEADERS);
    for (key, instances) in table.duplicates() {
        let first = instances.first().map_or(0, Vec::len);
        let second = instances.get(1).map_or(0, Vec::len);
        let issue = if first != second { COUNT_MISMATCH } else { DUPLICATE_ENTRY };
        ds.push(vec![
            key.into(),
            instances.len().into(),
            first.into(),
            second.into(),
            first.abs_diff(second).into(),
            issue.into(),
        ]);
    }
    ds
}

/* ---------------- Per-chapter detail ---------------- */

/// For each chapter number (first-seen order across the aligned rows), compare
/// the first two rows that carry it. Numbers seen only once are skipped.
pub fn details(table: &ChapterTable) -> DataSet {
    let mut ds = DataSet::new(&DETAIL_HEADERS);
    for (key, instances) in table.duplicates() {
        let mut order: Vec<u32> = Vec::new();
        let mut firsts: HashMap<u32, Vec<&ChapterRecord>> = HashMap::new();

        for row in comparison_rows(key, instances) {
            let Some(ch) = row.chapter else { continue };
            let seen = firsts.entry(ch.number).or_insert_with(|| {
                order.push(ch.number);
                Vec::with_capacity(2)
            });
            if seen.len() < 2 {
                seen.push(ch);
            }
        }

        for number in order {
            let &[a, b] = firsts[&number].as_slice() else { continue };
            let diffs = differing_fields(a, b);
            let (differences, has_differences) = if diffs.is_empty() {
                (s!(NO_DIFFERENCES), "No")
            } else {
                (diffs.join(", "), "Yes")
            };
            ds.push(vec![
                key.into(),
                number.into(),
                a.english_name.as_str().into(),
                b.english_name.as_str().into(),
                a.hebrew_name.as_str().into(),
                b.hebrew_name.as_str().into(),
                a.folio_range().into(),
                b.folio_range().into(),
                differences.into(),
                has_differences.into(),
            ]);
        }
    }
    ds
}

/// Plain string inequality on the three compared fields.
pub fn differing_fields(a: &ChapterRecord, b: &ChapterRecord) -> Vec<&'static str> {
    let mut out = Vec::new();
    if a.english_name != b.english_name { out.push("English_Name"); }
    if a.hebrew_name != b.hebrew_name { out.push("Hebrew_Name"); }
    if a.folio_range() != b.folio_range() { out.push("Folio_Range"); }
    out
}

/* ---------------- Validation ---------------- */

/// Structural problems in any instance, duplicated or not:
/// empty lists, ordinals that are not 1..=n, and ranges that end before they start.
pub fn validation(table: &ChapterTable) -> DataSet {
    let mut ds = DataSet::new(&VALIDATION_HEADERS);
    for (key, instances) in table.iter() {
        for (ix, chapters) in instances.iter().enumerate() {
            for (chapter, issue) in instance_issues(chapters) {
                ds.push(vec![key.into(), instance_label(ix).into(), chapter.into(), issue.into()]);
            }
        }
    }
    ds
}

pub fn instance_issues(chapters: &[ChapterRecord]) -> Vec<(Option<u32>, String)> {
    if chapters.is_empty() {
        return vec![(None, s!("Empty chapter list"))];
    }
    let mut out = Vec::new();
    for (expected, ch) in (1u32..).zip(chapters) {
        if ch.number != expected {
            out.push((Some(ch.number), format!("Expected chapter {expected}, found {}", ch.number)));
        }
        if !ch.is_ordered() {
            out.push((Some(ch.number), format!("Starts at {} after it ends at {}", ch.start, ch.end)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Folio, Side};

    fn ch(number: u32, en: &str, he: &str, start: (u32, Side), end: (u32, Side)) -> ChapterRecord {
        ChapterRecord {
            number,
            english_name: s!(en),
            hebrew_name: s!(he),
            start: Folio::new(start.0, start.1),
            end: Folio::new(end.0, end.1),
        }
    }

    fn numbered(n: u32) -> TractateInstance {
        (1..=n)
            .map(|i| ch(i, &format!("Chapter {i}"), "פרק", (i * 2, Side::A), (i * 2 + 1, Side::B)))
            .collect()
    }

    #[test]
    fn comparison_pads_to_longest_instance() {
        let instances = vec![numbered(5), numbered(7), numbered(2)];
        let ds = comparison_table("beitza", &instances);
        assert_eq!(ds.len(), 3 * 7);

        let labels = ["Instance 1", "Instance 2", "Instance 3"];
        for r in 0..ds.len() {
            let Some(Cell::Text(l)) = ds.get(r, "Instance") else { panic!("no label") };
            assert!(labels.contains(&l.as_str()));
        }

        // slot 5 (0-based) is row 15..18; instance 1 is padding there
        assert_eq!(ds.get(15, "Chapter_Number"), Some(&Cell::Empty));
        assert_eq!(ds.get(15, "English_Name"), Some(&Cell::from("")));
        assert_eq!(ds.get(16, "Chapter_Number"), Some(&Cell::Int(6)));
        assert_eq!(ds.get(16, "Folio_Range"), Some(&Cell::from("12a-13b")));
    }

    #[test]
    fn summary_flags_count_mismatch() {
        let mut t = ChapterTable::new();
        t.push_instance("beitza", numbered(5));
        t.push_instance("berakhot", numbered(9));
        t.push_instance("beitza", numbered(7));
        t.push_instance("yoma", numbered(8));
        t.push_instance("yoma", numbered(8));

        let s = summary(&t);
        assert_eq!(s.len(), 2);
        assert_eq!(s.rows[0], vec![
            Cell::from("beitza"), Cell::Int(2), Cell::Int(5), Cell::Int(7), Cell::Int(2),
            Cell::from(COUNT_MISMATCH),
        ]);
        assert_eq!(s.get(1, "Tractate"), Some(&Cell::from("yoma")));
        assert_eq!(s.get(1, "Difference"), Some(&Cell::Int(0)));
        assert_eq!(s.get(1, "Issue_Type"), Some(&Cell::from(DUPLICATE_ENTRY)));
    }

    #[test]
    fn details_compare_first_two_rows_per_number() {
        let a = vec![
            ch(1, "Arba'ah Avot", "ארבעה אבות", (2, Side::A), (17, Side::A)),
            ch(2, "Keytzad HaRegel", "כיצד הרגל", (17, Side::A), (27, Side::A)),
            ch(3, "Only Here", "רק כאן", (27, Side::A), (36, Side::B)),
        ];
        let b = vec![
            ch(1, "Arba'ah Avot", "ארבעה אבות", (2, Side::A), (17, Side::A)),
            ch(2, "Chapter 2", "כיצד הרגל", (17, Side::B), (27, Side::A)),
        ];
        let mut t = ChapterTable::new();
        t.push_instance("bava kamma", a);
        t.push_instance("bava kamma", b);

        let d = details(&t);
        assert_eq!(d.len(), 2); // chapter 3 has no partner
        assert_eq!(d.get(0, "Differences"), Some(&Cell::from(NO_DIFFERENCES)));
        assert_eq!(d.get(0, "Has_Differences"), Some(&Cell::from("No")));
        assert_eq!(d.get(1, "Chapter"), Some(&Cell::Int(2)));
        assert_eq!(d.get(1, "Differences"), Some(&Cell::from("English_Name, Folio_Range")));
        assert_eq!(d.get(1, "Instance_2_Range"), Some(&Cell::from("17b-27a")));
        assert_eq!(d.get(1, "Has_Differences"), Some(&Cell::from("Yes")));
    }

    #[test]
    fn validation_reports_gaps_backwards_ranges_and_empty_lists() {
        let mut bad = numbered(3);
        bad[1].number = 5;
        bad[2].end = Folio::new(1, Side::A);
        let mut t = ChapterTable::new();
        t.push_instance("sotah", bad);
        t.push_instance("tamid", Vec::new());
        t.push_instance("yoma", numbered(4));

        let v = validation(&t);
        assert_eq!(v.len(), 3);
        assert_eq!(v.get(0, "Issue"), Some(&Cell::from("Expected chapter 2, found 5")));
        assert_eq!(v.get(1, "Issue"), Some(&Cell::from("Starts at 6a after it ends at 1a")));
        assert_eq!(v.get(2, "Tractate"), Some(&Cell::from("tamid")));
        assert_eq!(v.get(2, "Chapter"), Some(&Cell::Empty));
    }

    #[test]
    fn report_has_one_table_per_duplicate() {
        let mut t = ChapterTable::new();
        t.push_instance("beitza", numbered(5));
        t.push_instance("beitza", numbered(7));
        t.push_instance("berakhot", numbered(9));
        let r = build_report(&t);
        assert_eq!(r.tractates.len(), 1);
        assert_eq!(r.tractates[0].0, "beitza");
        assert_eq!(r.tractates[0].1.len(), 14);
        assert!(r.validation.is_empty());
    }
}
