// src/bin/dump_duplicates.rs
use chapter_scrape::config::options::DumpOptions;
use chapter_scrape::progress::ConsoleProgress;
use chapter_scrape::{log, runner};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let opts = DumpOptions::default();
    let summary = runner::run_dump(&opts, Some(&mut ConsoleProgress))?;
    println!("\n{} files written for {} tractates.", summary.files_written.len(), opts.ranges.len());
    Ok(())
}
