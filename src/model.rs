// src/model.rs
//! Chapter table model shared by the extractor, the dumper and the regenerator.
//!
//! A tractate key may own several instances when the source literal repeats the
//! key as separate top-level entries. `ChapterTable` keeps every instance, in the
//! order it was encountered, so reports can speak of "Instance 1" / "Instance 2".

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

static PAGE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)([ab])$").expect("page reference pattern"));

/// Folio side marker. `a` sorts before `b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::A => "a",
            Side::B => "b",
        }
    }

    pub fn from_marker(s: &str) -> Option<Side> {
        match s {
            "a" => Some(Side::A),
            "b" => Some(Side::B),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page locator: folio number plus side, e.g. `15b`.
/// Ordered by `(number, side)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Folio {
    pub number: u32,
    pub side: Side,
}

impl Folio {
    pub fn new(number: u32, side: Side) -> Self {
        Self { number, side }
    }
}

impl fmt::Display for Folio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.side)
    }
}

impl FromStr for Folio {
    type Err = Error;

    /// Accepts exactly `{digits}{a|b}` (surrounding whitespace ignored).
    /// Folio 0 is not a page.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || Error::InvalidPageRef(s.to_string());
        let caps = PAGE_REF.captures(s.trim()).ok_or_else(bad)?;
        let number: u32 = caps[1].parse().map_err(|_| bad())?;
        let side = Side::from_marker(&caps[2]).ok_or_else(bad)?;
        if number == 0 {
            return Err(bad());
        }
        Ok(Folio::new(number, side))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterRecord {
    /// 1-based position within its tractate.
    pub number: u32,
    pub english_name: String,
    pub hebrew_name: String,
    pub start: Folio,
    pub end: Folio,
}

impl ChapterRecord {
    /// `{start}-{end}`, e.g. `2a-15b`.
    pub fn folio_range(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }

    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }
}

/// One occurrence of a tractate key's chapter list.
pub type TractateInstance = Vec<ChapterRecord>;

/// One instance per key, keys in lexicographic order (regenerator output).
pub type ChapterMap = BTreeMap<String, TractateInstance>;

/// Tractate key → every instance seen, in encounter order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChapterTable {
    entries: Vec<(String, Vec<TractateInstance>)>,
    index: HashMap<String, usize>,
}

impl ChapterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instance under `key`. Repeated keys accumulate instances.
    pub fn push_instance(&mut self, key: impl Into<String>, chapters: TractateInstance) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&ix) => self.entries[ix].1.push(chapters),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, vec![chapters]));
            }
        }
    }

    pub fn instances(&self, key: &str) -> Option<&[TractateInstance]> {
        self.index.get(key).map(|&ix| self.entries[ix].1.as_slice())
    }

    /// Keys with their instances, in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TractateInstance])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Keys that appear as more than one top-level entry.
    pub fn duplicates(&self) -> impl Iterator<Item = (&str, &[TractateInstance])> {
        self.iter().filter(|(_, instances)| instances.len() > 1)
    }

    /// Flattened `(key, instance)` pairs, grouped by key in encounter order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[ChapterRecord])> {
        self.entries
            .iter()
            .flat_map(|(k, v)| v.iter().map(move |inst| (k.as_str(), inst.as_slice())))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn instance_count(&self) -> usize {
        self.entries.iter().map(|(_, v)| v.len()).sum()
    }
}

impl From<&ChapterMap> for ChapterTable {
    fn from(map: &ChapterMap) -> Self {
        let mut table = ChapterTable::new();
        for (key, chapters) in map {
            table.push_instance(key.clone(), chapters.clone());
        }
        table
    }
}
