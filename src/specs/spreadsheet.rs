// src/specs/spreadsheet.rs
//! Reading the corrected chapter list.
//!
//! The first sheet (or the whole CSV) is a header row followed by data rows.
//! Only four columns matter; they are located by header text, so column order
//! and extra columns are irrelevant.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::config::consts::{COL_CHAPTER, COL_PAGE_END, COL_PAGE_START, COL_TRACTATE, CSV_SEP};
use crate::core::sanitize::normalize_ws;
use crate::csv::parse_rows;
use crate::error::{Error, Result};
use crate::file;

/// One input row, cells as text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChapterRow {
    pub tractate: String,
    pub chapter: String,
    pub start_page: String,
    pub end_page: String,
}

impl ChapterRow {
    pub fn new(tractate: &str, chapter: &str, start_page: &str, end_page: &str) -> Self {
        Self {
            tractate: s!(tractate),
            chapter: s!(chapter),
            start_page: s!(start_page),
            end_page: s!(end_page),
        }
    }
}

/// Read chapter rows from `.csv`, or from any workbook format calamine opens.
pub fn read_chapter_rows(path: &Path) -> Result<Vec<ChapterRow>> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let grid = if is_csv {
        parse_rows(&file::read_to_string(path)?, CSV_SEP)
    } else {
        read_first_sheet(path)?
    };
    rows_from_grid(grid)
}

fn read_first_sheet(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::EmptySheet(path.to_path_buf()))??;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect())
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(n) => n.to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        _ => s!(),
    }
}

/// Header row → column positions; data rows → `ChapterRow`s.
/// Fully blank rows are skipped; short rows read missing cells as empty.
pub fn rows_from_grid(grid: Vec<Vec<String>>) -> Result<Vec<ChapterRow>> {
    let mut rows = grid.into_iter();
    let headers: Vec<String> = rows
        .next()
        .unwrap_or_default()
        .iter()
        .map(|h| normalize_ws(h))
        .collect();

    let col = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::MissingColumn(s!(name)))
    };
    let (t, c, ps, pe) = (col(COL_TRACTATE)?, col(COL_CHAPTER)?, col(COL_PAGE_START)?, col(COL_PAGE_END)?);

    let cell = |row: &[String], ix: usize| row.get(ix).map(|s| s.trim()).unwrap_or_default().to_string();

    Ok(rows
        .filter(|row| row.iter().any(|c| !c.trim().is_empty()))
        .map(|row| ChapterRow {
            tractate: cell(&row, t),
            chapter: cell(&row, c),
            start_page: cell(&row, ps),
            end_page: cell(&row, pe),
        })
        .collect())
}
