// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod data;
pub mod dump;
pub mod error;
pub mod export;
pub mod file;
pub mod log;
pub mod model;
pub mod progress;
pub mod regen;
pub mod report;
pub mod runner;

pub use error::{Error, Result};
