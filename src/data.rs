// src/data.rs
//
// Report tables: a header row plus typed cells. Every report artifact
// (summary, details, per-tractate comparison, dumper outputs) is a DataSet,
// so the workbook and CSV writers only need to know this one shape.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Int(i64),
    Text(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Int(n) => write!(f, "{n}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self { Cell::Text(s!(s)) }
}

impl From<String> for Cell {
    fn from(s: String) -> Self { Cell::Text(s) }
}

impl From<u32> for Cell {
    fn from(n: u32) -> Self { Cell::Int(i64::from(n)) }
}

impl From<usize> for Cell {
    fn from(n: usize) -> Self { Cell::Int(n as i64) }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Cell::Empty, Into::into)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl DataSet {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| s!(*h)).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell at (`row`, column named `name`).
    pub fn get(&self, row: usize, name: &str) -> Option<&Cell> {
        let col = self.column(name)?;
        self.rows.get(row)?.get(col)
    }

    /// Headers followed by every row, stringified.
    pub fn to_string_rows(&self) -> Vec<Vec<String>> {
        let mut out = Vec::with_capacity(self.rows.len() + 1);
        out.push(self.headers.clone());
        out.extend(self.rows.iter().map(|r| r.iter().map(Cell::to_string).collect()));
        out
    }
}
