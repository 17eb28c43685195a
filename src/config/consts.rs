// src/config/consts.rs

// Inputs
pub const SOURCE_FILE: &str = "client/src/pages/tractate-contents.tsx";
pub const SPREADSHEET_FILE: &str = "attached_assets/talmud_chapters.xlsx";
pub const DECLARATION_NAME: &str = "CHAPTER_DATA";

// Output
pub const DEFAULT_OUT_DIR: &str = ".";
pub const CSV_SEP: char = ',';

// Extract: workbook
pub const REPORT_WORKBOOK: &str = "duplicate_tractates_analysis.xlsx";
pub const SUMMARY_SHEET: &str = "Summary";
pub const DETAIL_SHEET: &str = "Detailed_Comparison";
pub const VALIDATION_SHEET: &str = "Validation";
pub const SHEET_NAME_MAX: usize = 31; // Excel limit

// Extract: CSV fallback
pub const SUMMARY_CSV: &str = "duplicate_tractates_summary.csv";
pub const DETAILS_CSV: &str = "duplicate_tractates_details.csv";
pub const VALIDATION_CSV: &str = "duplicate_tractates_validation.csv";
pub const TRACTATE_CSV_PREFIX: &str = "duplicate_tractate_";

// Dump
pub const RAW_CSV: &str = "duplicate_tractates_raw.csv";
pub const DUMP_SUMMARY_CSV: &str = "duplicate_summary.csv";
pub const REVIEW_FILE_PREFIX: &str = "duplicate_";
pub const RAW_PREVIEW_CHARS: usize = 500;
pub const SIMILAR_LINES_MAX: usize = 10;
pub const CHAPTER_MARKER: &str = "Chapter 1";

// Regenerate
pub const REGEN_OUT_FILE: &str = "new_chapter_data.ts";
pub const PREVIEW_LINES: usize = 20;
pub const COL_TRACTATE: &str = "Tractate name";
pub const COL_CHAPTER: &str = "Chapter";
pub const COL_PAGE_START: &str = "Chapter page start";
pub const COL_PAGE_END: &str = "Chapter page end";
