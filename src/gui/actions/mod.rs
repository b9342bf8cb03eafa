// src/gui/actions/mod.rs
//
// Folder module facade: consumers only see actions::scrape.

mod scrape; // src/gui/actions/scrape.rs

pub use scrape::scrape;
