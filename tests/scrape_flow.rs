// tests/scrape_flow.rs
//
// Fetch → extract → prompt → write, end to end.
mod common;

use std::fs;

use common::{refused_url, serve_once, tmp_dir, CountingFetch, ScriptedPrompt};
use tag_scrape::{
    config::options::{ExportOptions, FetchOptions},
    core::net::HttpFetcher,
    run_once, run_scrape, NoticeKind, RunOutcome, ScrapeError, ScrapeRequest,
};

const FRUIT: &str = "<html><body><ul><li>Apples</li><li>Bananas</li></ul></body></html>";

fn http() -> HttpFetcher {
    HttpFetcher::new(&FetchOptions::default()).unwrap()
}

#[test]
fn empty_url_never_fetches() {
    let fetch = CountingFetch::new(FRUIT);
    let err = run_scrape(&fetch, &ScrapeRequest::new("", "li")).unwrap_err();
    assert!(matches!(err, ScrapeError::EmptyInput));
    assert_eq!(fetch.calls.get(), 0);
}

#[test]
fn empty_tag_never_fetches_or_prompts() {
    let fetch = CountingFetch::new(FRUIT);
    let dir = tmp_dir("empty_tag");
    let mut prompt = ScriptedPrompt::answering(dir.join("never.csv"));
    let out = run_once(&fetch, &mut prompt, &ExportOptions::default(), &ScrapeRequest::new("http://x", ""));
    assert_eq!(out, RunOutcome::InputError);
    assert_eq!(fetch.calls.get(), 0);
    assert_eq!(prompt.asked, 0);
    assert_eq!(out.notice().unwrap().kind, NoticeKind::Warning);
}

#[test]
fn whitespace_only_fields_are_not_empty() {
    let fetch = CountingFetch::new(FRUIT);
    let rec = run_scrape(&fetch, &ScrapeRequest::new(" ", "li")).unwrap();
    // Fields are taken verbatim, so a lone space still reaches the fetcher.
    assert_eq!(fetch.calls.get(), 1);
    assert_eq!(rec.len(), 2);
}

#[test]
fn matches_come_back_in_document_order() {
    let fetch = CountingFetch::new(
        "<div><li>one</li><section><li>two<li>three</section></div><li>four</li>",
    );
    let rec = run_scrape(&fetch, &ScrapeRequest::new("http://x", "li")).unwrap();
    assert_eq!(rec.items(), ["one", "two", "three", "four"]);
    assert_eq!(fetch.calls.get(), 1);
}

#[test]
fn fruit_list_over_http_writes_expected_csv() {
    let url = serve_once("200 OK", FRUIT);
    let dir = tmp_dir("fruit");
    let path = dir.join("fruit.csv");
    let mut prompt = ScriptedPrompt::answering(path.clone());

    let out = run_once(&http(), &mut prompt, &ExportOptions::default(), &ScrapeRequest::new(url, "li"));

    assert_eq!(out, RunOutcome::Written(path.clone()));
    assert_eq!(out.notice().unwrap().title, "Success");
    assert_eq!(fs::read_to_string(&path).unwrap(), "Content\nApples\nBananas\n");
}

#[test]
fn not_found_is_a_request_error_with_no_file() {
    let url = serve_once("404 Not Found", "<p>gone</p>");
    let dir = tmp_dir("404");
    let path = dir.join("never.csv");
    let mut prompt = ScriptedPrompt::answering(path.clone());

    let out = run_once(&http(), &mut prompt, &ExportOptions::default(), &ScrapeRequest::new(url, "p"));

    match &out {
        RunOutcome::RequestError(cause) => assert!(cause.contains("404"), "cause: {cause}"),
        other => panic!("expected RequestError, got {other:?}"),
    }
    let notice = out.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.body.starts_with("Failed to retrieve URL: "));
    assert_eq!(prompt.asked, 0);
    assert!(!path.exists());
}

#[test]
fn server_error_is_a_request_error() {
    let url = serve_once("500 Internal Server Error", "<li>x</li>");
    let err = run_scrape(&http(), &ScrapeRequest::new(url, "li")).unwrap_err();
    assert!(matches!(err, ScrapeError::Request(ref c) if c.contains("500")));
}

#[test]
fn multiple_choices_with_body_is_success() {
    // 3xx without a Location header is not followed; the body is used as-is.
    let url = serve_once("300 Multiple Choices", "<li>pick me</li>");
    let rec = run_scrape(&http(), &ScrapeRequest::new(url, "li")).unwrap();
    assert_eq!(rec.items(), ["pick me"]);
}

#[test]
fn not_modified_is_not_a_request_error() {
    // 304 carries no body, so the run ends as "no data", never as a failure.
    let url = serve_once("304 Not Modified", "");
    let err = run_scrape(&http(), &ScrapeRequest::new(url, "li")).unwrap_err();
    assert!(matches!(err, ScrapeError::NoData), "got {err:?}");
}

#[test]
fn connection_refused_is_a_request_error_with_no_file() {
    let dir = tmp_dir("refused");
    let path = dir.join("never.csv");
    let mut prompt = ScriptedPrompt::answering(path.clone());

    let out = run_once(
        &http(),
        &mut prompt,
        &ExportOptions::default(),
        &ScrapeRequest::new(refused_url(), "li"),
    );

    match &out {
        RunOutcome::RequestError(cause) => {
            assert!(cause.to_lowercase().contains("connect"), "cause: {cause}")
        }
        other => panic!("expected RequestError, got {other:?}"),
    }
    let notice = out.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.body.to_lowercase().contains("connect"));
    assert_eq!(prompt.asked, 0);
    assert!(!path.exists());
}

#[test]
fn missing_tag_is_no_data_with_no_file() {
    let url = serve_once("200 OK", "<html><body><div>no paragraphs</div></body></html>");
    let dir = tmp_dir("nodata");
    let path = dir.join("never.csv");
    let mut prompt = ScriptedPrompt::answering(path.clone());

    let out = run_once(&http(), &mut prompt, &ExportOptions::default(), &ScrapeRequest::new(url, "p"));

    assert_eq!(out, RunOutcome::NoData);
    assert_eq!(out.notice().unwrap().kind, NoticeKind::Info);
    assert_eq!(prompt.asked, 0);
    assert!(!path.exists());
}

#[test]
fn cancelled_save_is_silent() {
    let fetch = CountingFetch::new("<b>X</b>");
    let dir = tmp_dir("cancel");
    let path = dir.join("x.csv");
    let mut prompt = ScriptedPrompt::cancelling(path.clone());

    let out = run_once(&fetch, &mut prompt, &ExportOptions::default(), &ScrapeRequest::new("http://x", "b"));

    assert_eq!(out, RunOutcome::Cancelled);
    assert!(out.notice().is_none());
    assert_eq!(prompt.asked, 1);
    assert!(!path.exists());
    assert!(!dir.join("x.csv.csv").exists());
}

#[test]
fn unwritable_target_is_a_write_error() {
    let fetch = CountingFetch::new("<b>X</b>");
    let dir = tmp_dir("unwritable");
    // Parent directory does not exist; no implicit mkdir.
    let path = dir.join("missing").join("out.csv");
    let mut prompt = ScriptedPrompt::answering(path.clone());

    let out = run_once(&fetch, &mut prompt, &ExportOptions::default(), &ScrapeRequest::new("http://x", "b"));

    assert!(matches!(out, RunOutcome::WriteError(_)));
    assert_eq!(out.notice().unwrap().kind, NoticeKind::Error);
    assert!(!path.exists());
}
