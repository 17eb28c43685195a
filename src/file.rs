// src/file.rs

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::CSV_SEP;
use crate::csv::rows_to_string;
use crate::data::DataSet;
use crate::error::{Error, Result};

pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write a whole text file, creating parent directories as needed.
pub fn write_text(path: &Path, contents: &str) -> Result<PathBuf> {
    ensure_parent(path)?;
    fs::write(path, contents).map_err(|e| Error::io(path, e))?;
    Ok(path.to_path_buf())
}

/// Write a DataSet as CSV, header row first.
pub fn write_csv(path: &Path, ds: &DataSet) -> Result<PathBuf> {
    write_text(path, &rows_to_string(&ds.to_string_rows(), CSV_SEP))
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

/// Duplicate handling **only within this run**
pub fn resolve_unique_filename(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,                         // "csv" | "txt"
) -> PathBuf {
    // How many times have we seen this base?
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_filenames_number_repeats() {
        let dir = Path::new("out");
        let mut seen = HashMap::new();
        let a = resolve_unique_filename(dir, "duplicate_tractate_bava_kamma", &mut seen, "csv");
        let b = resolve_unique_filename(dir, "duplicate_tractate_bava_kamma", &mut seen, "csv");
        let c = resolve_unique_filename(dir, "duplicate_tractate_beitza", &mut seen, "csv");
        assert_eq!(a, dir.join("duplicate_tractate_bava_kamma.csv"));
        assert_eq!(b, dir.join("duplicate_tractate_bava_kamma (2).csv"));
        assert_eq!(c, dir.join("duplicate_tractate_beitza.csv"));
    }

    #[test]
    fn write_csv_creates_parent_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested/dir/t.csv");
        let mut ds = DataSet::new(&["A", "B"]);
        ds.push(vec!["x".into(), 3u32.into()]);
        write_csv(&path, &ds).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "A,B\nx,3\n");
    }

    #[test]
    fn ensure_directory_rejects_files() {
        let tmp = tempfile::tempdir().unwrap();
        let f = tmp.path().join("f");
        fs::write(&f, "x").unwrap();
        assert!(matches!(ensure_directory(&f), Err(Error::NotADirectory(_))));
    }
}
