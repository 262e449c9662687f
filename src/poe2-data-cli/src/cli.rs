//! Core CLI definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "poe2-data")]
#[command(about = "Path of Exile 2 game data extractor", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to Content.ggpk or an extracted data directory
    /// (auto-detected if not provided)
    #[arg(long, value_name = "PATH")]
    pub ggpk: Option<PathBuf>,

    /// Skip the local installation and download community data instead
    #[arg(long)]
    pub community: bool,

    /// Output directory for extracted JSON files
    /// (default: extracted_data, or the remembered directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Remember the resolved data source and output directory
    #[arg(long)]
    pub remember: bool,
}
