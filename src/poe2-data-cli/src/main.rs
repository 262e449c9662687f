mod cli;
mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use cli::Cli;
use config::Config;
use poe2_data::{find_install, open_source, SourceError};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;

    let output = cli
        .output
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("extracted_data"));

    if cli.community {
        commands::community::run(&output)?;
        return Ok(());
    }

    let install = cli
        .ggpk
        .clone()
        .or_else(|| config.install_path.clone())
        .or_else(find_install);

    let Some(install) = install else {
        println!("No Path of Exile 2 installation found");
        println!("Falling back to community data...");
        commands::community::run(&output)?;
        return Ok(());
    };

    let source = match open_source(&install) {
        Ok(source) => source,
        Err(err @ SourceError::BackendUnavailable(_)) => {
            println!("{}", err);
            println!("Falling back to community data...");
            commands::community::run(&output)?;
            return Ok(());
        }
        Err(e) => {
            bail!(
                "Failed to open {}: {}\nUse --community to download pre-extracted data instead",
                install.display(),
                e
            );
        }
    };

    let summary = commands::extract::run(&source, &output)?;
    println!(
        "\nExtraction complete: {} tables, {} rows ({} failed)",
        summary.tables_written, summary.rows_written, summary.tables_failed
    );

    if cli.remember {
        config.install_path = Some(install);
        config.output_dir = Some(output);
        config.save()?;
        println!("Saved settings to {}", Config::config_path()?.display());
    }

    Ok(())
}
