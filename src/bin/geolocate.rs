//! `geolocate` entry point.
//!
//! Thin wrapper around the library: loads `.env`, parses arguments, sets up
//! logging, and prints the resolved record. Invalid input is reported and the
//! process still exits successfully.

use anyhow::{Context, Result};
use clap::Parser;

use ipgeo_tools::geoip::{render, render_error_json, render_json};
use ipgeo_tools::initialization::{init_logger_with, load_dotenv};
use ipgeo_tools::{resolve, DatabasePaths, GeolocateConfig, OutputFormat, ResolveError};

fn main() -> Result<()> {
    load_dotenv();

    let config = GeolocateConfig::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let paths = DatabasePaths {
        city: config.city_db.clone(),
        asn: config.asn_db.clone(),
    };

    if config.format == OutputFormat::Plain {
        println!("\n[*] Checking IP: {}", config.ip_address);
    }

    match resolve(&config.ip_address, &paths) {
        Ok(record) => {
            match config.format {
                OutputFormat::Plain => print!("\n{}", render(&record)),
                OutputFormat::Json => println!(
                    "{}",
                    render_json(&record).context("Failed to serialize record")?
                ),
            }
            Ok(())
        }
        Err(e) => {
            match config.format {
                OutputFormat::Plain => match &e {
                    ResolveError::InvalidInput(ip) => {
                        println!("[!] Invalid IP address format: {}", ip)
                    }
                },
                OutputFormat::Json => println!("{}", render_error_json(&e)),
            }
            Ok(())
        }
    }
}
