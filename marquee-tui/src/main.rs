mod app;
mod cli;
mod document;
mod report;
mod scheduler;
mod script;
mod store;
mod ui;

use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;
use marquee_core::{ConfigSource, PageConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::Cli;
use crate::store::Prefs;

fn init_logger(cli: &Cli) -> Result<()> {
    let mut builder = if std::env::var("RUST_LOG").is_ok() {
        Builder::from_default_env()
    } else {
        let mut builder = Builder::new();
        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("marquee_core", LevelFilter::Debug)
            .filter_module("marquee", LevelFilter::Debug);
        builder
    };

    match (&cli.log_file, &cli.script) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("create log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        // stdout carries the summary
        (None, Some(_)) => {
            builder.target(Target::Stderr);
        }
        // the terminal belongs to the UI
        (None, None) => {
            builder.filter_level(LevelFilter::Off);
        }
    }
    builder.try_init().context("initialize logger")?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<PageConfig> {
    let (mut config, source) = match &cli.config {
        Some(path) => (
            PageConfig::load_from_file(path)?,
            ConfigSource::File(path.clone()),
        ),
        None => PageConfig::load_from_env()?,
    };
    log::info!("Configuration loaded from {source:?}");
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logger(&cli)?;
    let config = load_config(&cli)?;

    if let Some(script) = &cli.script {
        let store = Prefs::open(cli.prefs.as_deref(), false)?;
        let width = cli.viewport_width.unwrap_or(script::DEFAULT_VIEWPORT.0);
        let seed = cli.seed.unwrap_or_default();
        let summary = script::run_file(script, &config, store, width, seed)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(summary.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let store = Prefs::open(cli.prefs.as_deref(), true)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?;
    runtime.block_on(app::run(config, store, cli.viewport_width, &mut rng))
}
