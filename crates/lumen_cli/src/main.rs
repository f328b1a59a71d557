//! `lumen` - render the demo scene to an image file.

mod cli;
mod config;
mod scene;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use config::FileConfig;
use lumen_renderer::{render, render_parallel};
use std::time::Instant;

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if let Some(level) = args.log_filter(std::env::var_os("RUST_LOG").is_some()) {
        logger.filter_level(level);
    }
    logger.init();

    log::info!("Starting Lumen");

    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let (render_config, camera_settings) = config::resolve(file, &args)?;
    let camera = camera_settings.build().context("Invalid camera settings")?;

    let start = Instant::now();
    let world = scene::demo_scene().context("Failed to build demo scene")?;
    log::info!("Scene built in {:?}", start.elapsed());

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let start = Instant::now();
    let image = if args.sequential {
        render(&camera, &world, &render_config)?
    } else {
        render_parallel(&camera, &world, &render_config)?
    };
    log::info!("Total render time {:?}", start.elapsed());

    image
        .to_rgb_image()
        .save(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}
