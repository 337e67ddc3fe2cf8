//! `fetch_headers` entry point.
//!
//! Thin wrapper around the library: loads `.env`, parses arguments, sets up
//! logging and the HTTP client, and prints the returned headers. Transport
//! failures end the process with exit code 1.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use ipgeo_tools::headers::render;
use ipgeo_tools::initialization::{init_client, init_logger_with, load_dotenv};
use ipgeo_tools::{fetch_headers, HeaderSettings, HeadersConfig};

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();

    let config = HeadersConfig::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = init_client(config.timeout_seconds).context("Failed to initialize HTTP client")?;
    let settings = HeaderSettings {
        target: config.target.clone(),
        env_probe: config.enable_env_probe,
    };

    match fetch_headers(&config.url, &client, &settings).await {
        Ok(headers) => {
            print!("{}", render(&headers));
            Ok(())
        }
        Err(e) => {
            eprintln!("fetch_headers error: {:#}", anyhow::Error::from(e));
            process::exit(1);
        }
    }
}
