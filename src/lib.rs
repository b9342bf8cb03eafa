// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod gui;
pub mod runner;
pub mod scrape;

pub use error::{ExportError, ScrapeError};
pub use runner::{run_once, Notice, NoticeKind, RunOutcome, SavePrompt};
pub use scrape::{run_scrape, ExtractedRecord, ScrapeRequest};
