// src/specs/mod.rs
//! # Input readers
//!
//! Each module here reads one kind of input and nothing else.
//!
//! ## What lives here
//! - `chapter_data`: the reader for the `CHAPTER_DATA` object literal in
//!   `tractate-contents.tsx`. Locates the declaration, brace-matches its extent,
//!   splits it into top-level entries and pulls out fixed-shape chapter records.
//! - `spreadsheet`: the corrected chapter list supplied as a workbook (or CSV),
//!   read into plain `ChapterRow`s with the four named columns.
//!
//! ## What does **not** live here
//! - Duplicate comparison and report shaping (`report`).
//! - Normalization of Hebrew names and page references (`regen`).
//! - Writing anything to disk (`export`, `file`).
//!
//! ## Conventions & invariants
//! - Parsing is pure: text in, model out. File reading is a thin wrapper.
//! - Only a missing declaration is fatal. Records that do not match the fixed
//!   field sequence are dropped silently (debug log only).
//! - Duplicate keys are **not** merged; each top-level entry becomes its own
//!   instance, in encounter order.
pub mod chapter_data;
pub mod spreadsheet;
