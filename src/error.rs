// src/error.rs
//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The `export const <name> ... = {` declaration is missing.
    #[error("Could not find {0} object")]
    DeclarationNotFound(String),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Workbook export failed (bad sheet name, save error, ...).
    #[error("Workbook export failed: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// Reading the input spreadsheet failed.
    #[error("Spreadsheet read failed: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("{}: spreadsheet has no sheets", .0.display())]
    EmptySheet(PathBuf),

    #[error("Missing column '{0}' in spreadsheet header")]
    MissingColumn(String),

    #[error("Unparseable page reference: '{0}'")]
    InvalidPageRef(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
