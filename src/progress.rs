// src/progress.rs
use std::path::Path;

/// Status reporting for the batch runs.
/// The binaries implement this to print lines; tests pass `None`.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each output file is written.
    fn file_written(&mut self, _path: &Path) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// Prints every status line to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn file_written(&mut self, path: &Path) {
        println!("Wrote {}", path.display());
    }
}
