// src/config/options.rs
// Per-tool run options. The binaries take no arguments and run with
// `Default`; tests point the paths at temp dirs.
use std::path::PathBuf;

use super::consts::*;
use crate::dump::{DuplicateRanges, known_duplicates};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub source: PathBuf,
    pub declaration: String,
    pub out_dir: PathBuf,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from(SOURCE_FILE),
            declaration: s!(DECLARATION_NAME),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExtractOptions {
    pub fn workbook_path(&self) -> PathBuf {
        self.out_dir.join(REPORT_WORKBOOK)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DumpOptions {
    pub source: PathBuf,
    pub out_dir: PathBuf,
    /// Manually curated line ranges; not derived from parsing.
    pub ranges: Vec<DuplicateRanges>,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from(SOURCE_FILE),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            ranges: known_duplicates(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegenOptions {
    /// `.xlsx`/`.xls`/`.ods`, or `.csv`.
    pub input: PathBuf,
    pub declaration: String,
    pub out_path: PathBuf,
}

impl Default for RegenOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(SPREADSHEET_FILE),
            declaration: s!(DECLARATION_NAME),
            out_path: PathBuf::from(DEFAULT_OUT_DIR).join(REGEN_OUT_FILE),
        }
    }
}
