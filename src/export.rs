// src/export.rs
//
// Writes the duplicate report. The workbook is preferred; if anything about
// it fails (sheet name collision, save error, ...) the same tables go out as
// separate CSV files and the run still counts as a success.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use tracing::warn;

use crate::config::consts::*;
use crate::core::sanitize::{file_stem, sheet_name};
use crate::data::{Cell, DataSet};
use crate::error::Result;
use crate::file::{ensure_parent, resolve_unique_filename, write_csv};
use crate::report::Report;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportOutput {
    Workbook(PathBuf),
    /// Workbook export failed; these CSV files were written instead.
    Csv { files: Vec<PathBuf>, reason: String },
}

impl ReportOutput {
    pub fn files(&self) -> Vec<PathBuf> {
        match self {
            ReportOutput::Workbook(p) => vec![p.clone()],
            ReportOutput::Csv { files, .. } => files.clone(),
        }
    }
}

/// Workbook at `workbook_path`, or CSV files in `out_dir` when that fails.
pub fn write_report(report: &Report, workbook_path: &Path, out_dir: &Path) -> Result<ReportOutput> {
    match write_workbook(report, workbook_path) {
        Ok(()) => Ok(ReportOutput::Workbook(workbook_path.to_path_buf())),
        Err(e) => {
            warn!("Excel export failed, falling back to CSV: {e}");
            let files = write_csv_fallback(report, out_dir)?;
            Ok(ReportOutput::Csv { files, reason: e.to_string() })
        }
    }
}

/// Summary, Detailed_Comparison, Validation, then one sheet per duplicated key.
pub fn write_workbook(report: &Report, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    add_sheet(&mut workbook, SUMMARY_SHEET, &report.summary)?;
    add_sheet(&mut workbook, DETAIL_SHEET, &report.details)?;
    add_sheet(&mut workbook, VALIDATION_SHEET, &report.validation)?;
    for (key, ds) in &report.tractates {
        add_sheet(&mut workbook, &sheet_name(key), ds)?;
    }

    ensure_parent(path)?;
    workbook.save(path)?;
    Ok(())
}

fn add_sheet(workbook: &mut Workbook, name: &str, ds: &DataSet) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(name)?;

    for (col, header) in ds.headers.iter().enumerate() {
        sheet.write_string(0, col as u16, header.as_str())?;
    }
    for (r, row) in ds.rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Empty => {}
                Cell::Int(n) => { sheet.write_number(r, col, *n as f64)?; }
                Cell::Text(s) => { sheet.write_string(r, col, s.as_str())?; }
            }
        }
    }
    Ok(())
}

/// Same tables as separate CSV files. Per-tractate file names are not
/// truncated; colliding stems get a ` (N)` suffix.
pub fn write_csv_fallback(report: &Report, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = vec![
        write_csv(&out_dir.join(SUMMARY_CSV), &report.summary)?,
        write_csv(&out_dir.join(DETAILS_CSV), &report.details)?,
        write_csv(&out_dir.join(VALIDATION_CSV), &report.validation)?,
    ];

    let mut seen: HashMap<String, usize> = HashMap::new();
    for (key, ds) in &report.tractates {
        let stem = join!(TRACTATE_CSV_PREFIX, &file_stem(key));
        let path = resolve_unique_filename(out_dir, &stem, &mut seen, "csv");
        written.push(write_csv(&path, ds)?);
    }
    Ok(written)
}
