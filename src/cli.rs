// src/cli.rs
use std::{env, io, path::PathBuf, time::Duration};

use crate::{
    config::options::AppOptions,
    core::net::HttpFetcher,
    csv::write_column,
    error::ScrapeError,
    file::{self, ExportTarget},
    scrape::{self, ScrapeRequest},
};

const USAGE: &str = "\
Usage: cli --url <URL> --tag <TAG> [-o <file.csv>] [--timeout <secs>]

  -u, --url       Page to fetch
  -t, --tag       Element name to extract (e.g. li, p, h2)
  -o, --out       CSV file to write; stdout when omitted
      --timeout   Request timeout in seconds (client default otherwise)
  -h, --help      Show this help";

#[derive(Clone, Debug, Default)]
pub struct Params {
    pub url: String,
    pub tag: String,
    pub out: Option<PathBuf>,
    pub options: AppOptions,
    pub help: bool,
}

pub fn parse_args<I, S>(args: I) -> Result<Params, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(a) = args.next() {
        match a.as_str() {
            "-u" | "--url" => params.url = args.next().ok_or("Missing value for --url")?,
            "-t" | "--tag" => params.tag = args.next().ok_or("Missing value for --tag")?,
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?))
            }
            "--timeout" => {
                let secs: u64 = args.next().ok_or("Missing value for --timeout")?.parse()?;
                if secs == 0 {
                    return Err("timeout must be > 0".into());
                }
                params.options.fetch.timeout = Some(Duration::from_secs(secs));
            }
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(params)
}

pub fn usage() -> &'static str {
    USAGE
}

/// Run once from the command line. NoData is reported but is not a failure.
pub fn run(params: Params) -> Result<(), Box<dyn std::error::Error>> {
    if params.help {
        eprintln!("{USAGE}");
        return Ok(());
    }

    let req = ScrapeRequest::new(params.url, params.tag);
    let fetcher = HttpFetcher::new(&params.options.fetch)?;

    let record = match scrape::run_scrape(&fetcher, &req) {
        Ok(r) => r,
        Err(ScrapeError::NoData) => {
            eprintln!("{}", ScrapeError::NoData);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let export = &params.options.export;
    match params.out {
        Some(out) => {
            let path = file::write_export(export, &ExportTarget::new(&out), &record)?;
            eprintln!("Wrote {} row(s) to {}", record.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            write_column(stdout.lock(), &export.header, record.items(), export.delimiter)?;
        }
    }
    Ok(())
}

/// Arguments from the process environment, program name skipped.
pub fn env_params() -> Result<Params, Box<dyn std::error::Error>> {
    parse_args(env::args().skip(1))
}
