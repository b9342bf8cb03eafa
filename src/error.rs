// src/error.rs
use std::error::Error as _;
use std::path::PathBuf;

use thiserror::Error;

/// Ways a run can stop before there is anything to export.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// URL or tag field was empty when the run was triggered.
    #[error("Please enter both URL and tag.")]
    EmptyInput,

    /// Network failure or a non-success status. Carries the cause text.
    #[error("Failed to retrieve URL: {0}")]
    Request(String),

    /// Page fetched fine but nothing matched the tag. Soft outcome.
    #[error("No elements found with the specified tag.")]
    NoData,
}

impl ScrapeError {
    pub fn request(cause: impl std::fmt::Display) -> Self {
        ScrapeError::Request(cause.to_string())
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(e: reqwest::Error) -> Self {
        // Walk the source chain so "error sending request" is followed by
        // the actual reason (refused, dns, timeout).
        let mut msg = e.to_string();
        let mut src = e.source();
        while let Some(inner) = src {
            msg.push_str(": ");
            msg.push_str(&inner.to_string());
            src = inner.source();
        }
        ScrapeError::Request(msg)
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
