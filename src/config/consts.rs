// src/config/consts.rs

// Window
pub const APP_TITLE: &str = "Web Scraper";
pub const WINDOW_W: f32 = 520.0;
pub const WINDOW_H: f32 = 150.0;

// Local diagnostics
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const CSV_HEADER: &str = "Content";
pub const CSV_SEP: char = ',';
pub const CSV_EXT: &str = "csv";
pub const CSV_FILTER_NAME: &str = "CSV files";
pub const DEFAULT_FILE: &str = "scrape.csv";
