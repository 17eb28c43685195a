// src/runner.rs
//! One function per tool: read inputs, build the model, write outputs.
//! `progress` can be None (no status lines) or Some(&mut impl Progress).

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::consts::*;
use crate::config::options::{DumpOptions, ExtractOptions, RegenOptions};
use crate::core::sanitize::file_stem;
use crate::dump::dump;
use crate::error::Result;
use crate::export::{ReportOutput, write_report};
use crate::file::{self, ensure_directory, resolve_unique_filename, write_csv, write_text};
use crate::model::ChapterMap;
use crate::progress::Progress;
use crate::regen::{build_chapter_map, render_chapter_data};
use crate::report::build_report;
use crate::specs::{chapter_data, spreadsheet};

/// Plain list of what a run produced.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct ExtractSummary {
    /// Duplicated keys with the chapter count of each instance.
    pub duplicates: Vec<(String, Vec<usize>)>,
    /// Rows in the validation table.
    pub issues: usize,
    pub output: ReportOutput,
}

impl ExtractSummary {
    pub fn total_instances(&self) -> usize {
        self.duplicates.iter().map(|(_, counts)| counts.len()).sum()
    }
}

#[derive(Clone, Debug)]
pub struct RegenSummary {
    pub chapters: ChapterMap,
    pub text: String,
    pub files_written: Vec<PathBuf>,
}

/* ---------------- Extractor ---------------- */

pub fn run_extract(opts: &ExtractOptions, mut progress: Option<&mut dyn Progress>) -> Result<ExtractSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Extracting duplicate tractate data from {}...", opts.source.display()));
    }
    let table = chapter_data::read_chapter_data(&opts.source, &opts.declaration)?;
    info!("{} keys, {} instances", table.len(), table.instance_count());

    let duplicates: Vec<(String, Vec<usize>)> = table
        .duplicates()
        .map(|(key, instances)| (s!(key), instances.iter().map(Vec::len).collect()))
        .collect();

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Found {} tractates with duplicate entries:", duplicates.len()));
        for (key, _) in &duplicates {
            p.log(&format!("  - {key}"));
        }
    }

    let report = build_report(&table);
    for row in report.validation.to_string_rows().iter().skip(1) {
        warn!("{}", row.join(" | "));
    }

    ensure_directory(&opts.out_dir)?;
    let output = write_report(&report, &opts.workbook_path(), &opts.out_dir)?;
    if let Some(p) = progress.as_deref_mut() {
        for path in output.files() {
            p.file_written(&path);
        }
        p.finish();
    }

    Ok(ExtractSummary { duplicates, issues: report.validation.len(), output })
}

/* ---------------- Dumper ---------------- */

pub fn run_dump(opts: &DumpOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let text = file::read_to_string(&opts.source)?;
    let out = dump(&text, &opts.ranges);

    ensure_directory(&opts.out_dir)?;
    let mut written = vec![write_csv(&opts.out_dir.join(RAW_CSV), &out.raw)?];

    let mut seen: HashMap<String, usize> = HashMap::new();
    for (key, review) in &out.reviews {
        let stem = join!(REVIEW_FILE_PREFIX, &file_stem(key));
        let path = resolve_unique_filename(&opts.out_dir, &stem, &mut seen, "txt");
        written.push(write_text(&path, review)?);
    }

    written.push(write_csv(&opts.out_dir.join(DUMP_SUMMARY_CSV), &out.summary)?);

    if let Some(p) = progress.as_deref_mut() {
        for path in &written {
            p.file_written(path);
        }
        p.finish();
    }
    Ok(RunSummary { files_written: written })
}

/* ---------------- Regenerator ---------------- */

pub fn run_regen(opts: &RegenOptions, mut progress: Option<&mut dyn Progress>) -> Result<RegenSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Processing {}...", opts.input.display()));
    }
    let rows = spreadsheet::read_chapter_rows(&opts.input)?;
    let chapters = build_chapter_map(&rows);
    info!("{} rows → {} tractates", rows.len(), chapters.len());

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Found {} tractates with data:", chapters.len()));
        for (key, list) in &chapters {
            p.log(&format!("  {key}: {} chapters", list.len()));
        }
    }

    let text = render_chapter_data(&chapters, &opts.declaration);
    if let Some(p) = progress.as_deref_mut() {
        p.log("\nSample of generated code (first few lines):");
        for line in text.lines().take(PREVIEW_LINES) {
            p.log(line);
        }
    }

    let path = write_text(&opts.out_path, &text)?;
    if let Some(p) = progress.as_deref_mut() {
        p.file_written(&path);
        p.finish();
    }

    Ok(RegenSummary { chapters, text, files_written: vec![path] })
}
