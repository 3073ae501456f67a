//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up aewiki CLI defaults.

use crate::cli::OutputFormat;
use crate::config::Config;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `data_path` - Optional dataset path to set as default
/// * `format` - Optional output format to set as default
/// * `clear` - If true, remove all configured defaults
/// * `show` - If true, show current configuration
pub fn handle(
    data_path: Option<PathBuf>,
    format: Option<OutputFormat>,
    clear: bool,
    show: bool,
) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if clear {
        config = Config::default();
        config.save()?;
        println!("Configuration cleared");
        return Ok(());
    }

    if data_path.is_none() && format.is_none() {
        show_usage();
        return Ok(());
    }

    apply(&mut config, data_path, format)?;
    config.save()?;

    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Apply new defaults to a config
fn apply(config: &mut Config, data_path: Option<PathBuf>, format: Option<OutputFormat>) -> Result<()> {
    if let Some(path) = data_path {
        // Store absolute paths so the default works from any directory
        let path = if path.is_absolute() {
            path
        } else {
            std::env::current_dir()
                .context("Could not determine current directory")?
                .join(path)
        };
        println!("Dataset configured: {}", path.display());
        config.data_path = Some(path);
    }

    if let Some(format) = format {
        println!("Output format configured: {:?}", format);
        config.format = Some(format);
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    match &config.data_path {
        Some(path) => println!("Dataset: {}", path.display()),
        None => println!("Dataset: bundled"),
    }
    println!("Output format: {:?}", config.format.unwrap_or_default());

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: aewiki configure --data-path PATH");
    println!("   or: aewiki configure --format table|csv|json|yaml");
    println!("   or: aewiki configure --show");
    println!("   or: aewiki configure --clear");
    println!();
    println!("Note: Without a configured dataset, aewiki uses the data bundled at build time.");
}
