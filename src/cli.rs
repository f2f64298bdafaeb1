//! Command-line interface for strictly_phone.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Phone - a simulated mobile phone on the console
#[derive(Parser, Debug)]
#[command(name = "strictly_phone")]
#[command(about = "Contacts, messages, calculators and games on a simulated phone", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Default contacts file for save/load (overrides the config)
    #[arg(long)]
    pub contacts: Option<PathBuf>,

    /// Seed for the random source (overrides the config)
    #[arg(long)]
    pub seed: Option<u64>,
}
