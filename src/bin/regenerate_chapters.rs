// src/bin/regenerate_chapters.rs
use chapter_scrape::config::options::RegenOptions;
use chapter_scrape::progress::ConsoleProgress;
use chapter_scrape::{log, runner};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let opts = RegenOptions::default();
    runner::run_regen(&opts, Some(&mut ConsoleProgress))?;
    println!("\nComplete TypeScript code saved to '{}'", opts.out_path.display());
    Ok(())
}
