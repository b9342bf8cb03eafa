// src/bin/cli.rs
use color_eyre::eyre::eyre;
use tag_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let params = cli::env_params().map_err(|e| eyre!("{e}\n\n{}", cli::usage()))?;
    cli::run(params).map_err(|e| eyre!("{e}"))
}
