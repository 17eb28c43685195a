// src/bin/extract_duplicates.rs
use chapter_scrape::config::options::ExtractOptions;
use chapter_scrape::export::ReportOutput;
use chapter_scrape::progress::ConsoleProgress;
use chapter_scrape::{log, runner};

fn main() {
    log::init();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> chapter_scrape::Result<()> {
    let opts = ExtractOptions::default();
    let summary = runner::run_extract(&opts, Some(&mut ConsoleProgress))?;

    match &summary.output {
        ReportOutput::Workbook(path) => {
            println!("\nExcel file exported: {}", path.display());
            println!("\nSheets created:");
            println!("  - Summary: Overview of all duplicates");
            println!("  - Detailed_Comparison: Side-by-side comparison of differences");
            println!("  - Validation: Structural issues in every instance");
            println!("  - Individual sheets for each duplicate tractate");
        }
        ReportOutput::Csv { files, .. } => {
            println!("\nCSV files exported ({}):", files.len());
        }
    }

    println!("\nSummary Statistics:");
    println!("  - Total duplicate instances: {}", summary.total_instances());
    println!("  - Unique tractates with duplicates: {}", summary.duplicates.len());
    if summary.issues > 0 {
        println!("  - Validation issues: {}", summary.issues);
    }
    Ok(())
}
