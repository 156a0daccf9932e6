use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Clean, reconcile, and merge plant care datasets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full clean-and-merge pipeline over the dataset registry
    Merge(MergeArgs),
}

#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Destination file (.csv or .parquet)
    #[arg(short, long, default_value = "data/unified_plants.parquet")]
    pub output: PathBuf,
    /// Local root containing one directory per acquired dataset
    #[arg(long = "data-root", default_value = "data/raw")]
    pub data_root: PathBuf,
    /// Optional YAML registry overriding the built-in dataset list
    #[arg(long)]
    pub registry: Option<PathBuf>,
}
