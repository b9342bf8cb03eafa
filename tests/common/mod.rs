// tests/common/mod.rs
//
// Shared helpers: a one-shot HTTP stub, a counting fetcher, a scripted
// save prompt and scratch directories.
#![allow(dead_code)]

use std::cell::Cell;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;

use tag_scrape::{
    config::options::ExportOptions,
    core::net::Fetch,
    ScrapeError, SavePrompt,
};

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("tag_scrape_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Serve exactly one request with the given status line and body.
/// Returns the URL to hit.
pub fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let mut req = Vec::new();
            while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => req.extend_from_slice(&buf[..n]),
                }
            }
            let resp = format!(
                "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(resp.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{addr}/page")
}

/// A URL on a port nothing listens on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

/// Non-blocking listener that never answers. `was_hit` tells whether
/// anything connected to it.
pub struct IdleServer {
    listener: TcpListener,
    pub url: String,
}

impl IdleServer {
    pub fn new() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let url = format!("http://{}/page", listener.local_addr().unwrap());
        Self { listener, url }
    }

    pub fn was_hit(&self) -> bool {
        self.listener.accept().is_ok()
    }
}

/// Fetcher that returns a fixed body and counts calls.
pub struct CountingFetch {
    pub body: &'static str,
    pub calls: Cell<usize>,
}

impl CountingFetch {
    pub fn new(body: &'static str) -> Self {
        Self { body, calls: Cell::new(0) }
    }
}

impl Fetch for CountingFetch {
    fn get(&self, _url: &str) -> Result<String, ScrapeError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.body.to_string())
    }
}

/// Save prompt with a preset path. Hands the path back unless set to cancel.
pub struct ScriptedPrompt {
    pub path: PathBuf,
    pub cancel: bool,
    pub asked: usize,
}

impl ScriptedPrompt {
    pub fn answering(path: PathBuf) -> Self {
        Self { path, cancel: false, asked: 0 }
    }
    pub fn cancelling(path: PathBuf) -> Self {
        Self { path, cancel: true, asked: 0 }
    }
}

impl SavePrompt for ScriptedPrompt {
    fn ask(&mut self, _export: &ExportOptions) -> Option<PathBuf> {
        self.asked += 1;
        (!self.cancel).then(|| self.path.clone())
    }
}
