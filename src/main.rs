#![forbid(unsafe_code)]

mod collection;
mod config;
mod constants;
mod encoder;
mod error;
mod gui;
mod persistence;
mod types;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level as TraceLevel, info, warn};
use tracing_subscriber::FmtSubscriber;

use config::StorageTarget;
use encoder::EncoderRegistry;
use persistence::CodeStore;
use types::{CodeType, Variant};

#[derive(Parser, Debug)]
#[command(name = "matrix-code-tool", version, about = "Browse stored QR and Data Matrix codes")]
struct Args {
    /// Borderless, semi-transparent overlay with per-entry code types
    #[arg(long, default_value_t = false)]
    overlay: bool,

    /// Read and write codes from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

fn log_level() -> TraceLevel {
    match std::env::var(constants::logging::LEVEL_ENV)
        .unwrap_or_else(|_| constants::logging::DEFAULT_LEVEL.to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    let variant = if args.overlay {
        Variant::Overlay
    } else {
        Variant::PerUser
    };

    let encoders = EncoderRegistry::detect();
    if !encoders.is_available(CodeType::DataMatrix) {
        warn!("Data Matrix support is not available in this build, only QR codes can be created");
    }

    let target = match args.file {
        Some(path) => StorageTarget::Explicit(path),
        None => StorageTarget::for_variant(variant),
    };
    let store = CodeStore::new(variant, &target);
    info!(?variant, path = %store.path().display(), "Using code storage");

    let collection = store.load(&encoders);
    gui::run_gui(store, encoders, collection)
}
