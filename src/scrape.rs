// src/scrape.rs
use crate::{
    core::{html, net::Fetch},
    error::ScrapeError,
};

/// What the form hands over on trigger. Fields are taken verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub url: String,
    pub tag: String,
}

impl ScrapeRequest {
    pub fn new(url: impl Into<String>, tag: impl Into<String>) -> Self {
        Self { url: url.into(), tag: tag.into() }
    }

    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.url.is_empty() || self.tag.is_empty() {
            return Err(ScrapeError::EmptyInput);
        }
        Ok(())
    }
}

/// Text of each matched element, in document order. Never empty when
/// returned from `run_scrape`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractedRecord {
    items: Vec<String>,
}

impl ExtractedRecord {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }
    pub fn items(&self) -> &[String] { &self.items }
    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn into_items(self) -> Vec<String> { self.items }
}

/// Pull the text of every `tag` element out of an already-fetched page.
pub fn extract(body: &str, tag: &str) -> Result<ExtractedRecord, ScrapeError> {
    let doc = html::parse(body);
    let items = html::extract_tag_text(&doc, tag);
    if items.is_empty() {
        return Err(ScrapeError::NoData);
    }
    Ok(ExtractedRecord::new(items))
}

/// Validate, fetch once, extract. No network call on empty input.
pub fn run_scrape<F: Fetch + ?Sized>(
    fetcher: &F,
    req: &ScrapeRequest,
) -> Result<ExtractedRecord, ScrapeError> {
    req.validate()?;

    logf!("Scrape: Begin url={} tag={}", req.url, req.tag);
    let body = fetcher.get(&req.url)?;
    let record = extract(&body, &req.tag)?;
    logf!("Scrape: OK matched={}", record.len());
    Ok(record)
}
