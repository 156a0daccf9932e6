pub mod acquire;
pub mod cli;
pub mod coerce;
pub mod discover;
pub mod error;
pub mod frame;
pub mod io_utils;
pub mod keys;
pub mod loader;
pub mod merge;
pub mod persist;
pub mod pipeline;
pub mod registry;
pub mod standardize;
pub mod summary;

use std::{env, sync::OnceLock};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

use crate::{
    acquire::DirectoryAcquirer,
    cli::{Cli, Commands, MergeArgs},
    registry::Registry,
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("plant_unify", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Merge(args) => handle_merge(&args),
    }
}

fn handle_merge(args: &MergeArgs) -> Result<()> {
    let registry = match &args.registry {
        Some(path) => Registry::load(path)
            .with_context(|| format!("Loading registry from {path:?}"))?,
        None => Registry::default(),
    };
    let acquirer = DirectoryAcquirer::new(&args.data_root);
    let output = pipeline::run_pipeline(&registry, &acquirer, keys::KEY_PRIORITY, &args.output)?;
    info!(
        "Merged {} dataset(s) into {:?}",
        registry.datasets.len(),
        output
    );
    Ok(())
}
