// src/gui/actions/scrape.rs
use crate::{
    core::net::HttpFetcher,
    gui::{app::App, dialog::NativeSavePrompt},
    runner::{self, RunOutcome},
    scrape::ScrapeRequest,
};

/// Button handler. Blocks the UI thread for the whole run.
pub fn scrape(app: &mut App) {
    // Verbatim: no trimming, no normalisation.
    let req = ScrapeRequest::new(app.state.url.clone(), app.state.tag.clone());

    let outcome = match HttpFetcher::new(&app.state.options.fetch) {
        Ok(fetcher) => {
            let mut prompt = NativeSavePrompt;
            runner::run_once(&fetcher, &mut prompt, &app.state.options.export, &req)
        }
        Err(e) => {
            loge!("Fetch: client init failed: {}", e);
            RunOutcome::from(e)
        }
    };

    logf!("Run: {:?}", outcome);
    app.status(outcome.status());
    app.state.notice = outcome.notice();
}
