// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::ExportOptions,
    core::net::Fetch,
    error::ScrapeError,
    file::{self, ExportTarget},
    scrape::{self, ScrapeRequest},
};

/// Asks the user where to save. `None` means the prompt was cancelled.
/// The GUI implements this with a native dialog; tests script it.
pub trait SavePrompt {
    fn ask(&mut self, export: &ExportOptions) -> Option<PathBuf>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Error,
    Info,
}

/// One modal message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    fn new(kind: NoticeKind, title: &str, body: impl Into<String>) -> Self {
        Self { kind, title: s!(title), body: body.into() }
    }
}

/// Where a run ended. Every variant returns the form to idle.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    InputError,
    RequestError(String),
    NoData,
    Cancelled,
    Written(PathBuf),
    WriteError(String),
}

impl RunOutcome {
    /// Modal to show, if any. A cancelled save is silent.
    pub fn notice(&self) -> Option<Notice> {
        use NoticeKind::*;
        match self {
            RunOutcome::InputError => Some(Notice::new(
                Warning, "Input Error", ScrapeError::EmptyInput.to_string(),
            )),
            RunOutcome::RequestError(cause) => Some(Notice::new(
                Error, "Request Error", ScrapeError::Request(cause.clone()).to_string(),
            )),
            RunOutcome::NoData => Some(Notice::new(
                Info, "No Data", ScrapeError::NoData.to_string(),
            )),
            RunOutcome::Cancelled => None,
            RunOutcome::Written(_) => Some(Notice::new(
                Info, "Success", "Data saved successfully.",
            )),
            RunOutcome::WriteError(msg) => Some(Notice::new(
                Error, "Write Error", format!("Failed to save file: {msg}"),
            )),
        }
    }

    /// Short text for the status line.
    pub fn status(&self) -> String {
        match self {
            RunOutcome::InputError => s!("Missing URL or tag"),
            RunOutcome::RequestError(_) => s!("Request failed"),
            RunOutcome::NoData => s!("No matching elements"),
            RunOutcome::Cancelled => s!("Save cancelled"),
            RunOutcome::Written(p) => format!("Saved {}", p.display()),
            RunOutcome::WriteError(_) => s!("Save failed"),
        }
    }
}

impl From<ScrapeError> for RunOutcome {
    fn from(e: ScrapeError) -> Self {
        match e {
            ScrapeError::EmptyInput => RunOutcome::InputError,
            ScrapeError::Request(cause) => RunOutcome::RequestError(cause),
            ScrapeError::NoData => RunOutcome::NoData,
        }
    }
}

/// One full press of the Scrape button: fetch, extract, prompt, write.
/// Nothing from the run is kept once this returns.
pub fn run_once<F, P>(
    fetcher: &F,
    prompt: &mut P,
    export: &ExportOptions,
    req: &ScrapeRequest,
) -> RunOutcome
where
    F: Fetch + ?Sized,
    P: SavePrompt + ?Sized,
{
    let record = match scrape::run_scrape(fetcher, req) {
        Ok(r) => r,
        Err(e) => {
            match &e {
                ScrapeError::NoData => logd!("Scrape: no elements for tag={}", req.tag),
                other => loge!("Scrape: {}", other),
            }
            return e.into();
        }
    };

    let Some(chosen) = prompt.ask(export) else {
        logd!("Export: save prompt cancelled");
        return RunOutcome::Cancelled;
    };

    let target = ExportTarget::new(&chosen);
    match file::write_export(export, &target, &record) {
        Ok(path) => RunOutcome::Written(path),
        Err(e) => {
            loge!("Export: Error: {}", e);
            RunOutcome::WriteError(e.to_string())
        }
    }
}
