// src/core/net.rs

// One blocking GET per run. No retries, no custom headers.

use reqwest::blocking::Client;

use crate::config::options::FetchOptions;
use crate::error::ScrapeError;

/// Page source. The GUI and CLI use `HttpFetcher`; tests swap in fakes.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String, ScrapeError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self, ScrapeError> {
        let mut builder = Client::builder();
        if let Some(t) = opts.timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, ScrapeError> {
        logd!("Fetch: GET {}", url);
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(ScrapeError::request(format!(
                "HTTP error: {} for url ({})",
                status,
                resp.url()
            )));
        }

        // Whole body into memory; decoding follows the response charset.
        let body = resp.text()?;
        logd!("Fetch: {} → {} bytes", status, body.len());
        Ok(body)
    }
}
