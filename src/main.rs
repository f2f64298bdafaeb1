//! Strictly Phone - interactive console
//!
//! Runs the numbered phone menu on stdin/stdout. Logs go to stderr.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::{BufReader, stdin, stdout};
use strictly_phone::{Device, PhoneApp, PhoneConfig, ReaderSource, SeededRandom, WriterSink};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    run(config)
}

/// Reads the config file (if any) and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<PhoneConfig> {
    let mut config = match &cli.config {
        Some(path) => PhoneConfig::from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => PhoneConfig::default(),
    };
    if let Some(path) = &cli.contacts {
        config = config.with_contacts_file(path);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

/// Builds the device and runs the menu until exit.
#[instrument(skip(config))]
fn run(config: PhoneConfig) -> Result<()> {
    let rng = match config.seed() {
        Some(seed) => SeededRandom::from_seed(*seed),
        None => SeededRandom::from_entropy(),
    };
    let mut device = Device::new(Box::new(rng));

    if *config.load_on_start() {
        match device.load_contacts_from_file(config.contacts_file()) {
            Ok(count) => info!(count, "Contacts loaded at startup"),
            Err(e) => warn!(error = %e, "Could not load contacts at startup"),
        }
    }

    let mut input = ReaderSource::new(BufReader::new(stdin()));
    let mut output = WriterSink::new(stdout());
    let mut app = PhoneApp::new(device, config, &mut input, &mut output);
    app.run();

    info!("Strictly Phone exiting");
    Ok(())
}
