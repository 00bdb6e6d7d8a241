use std::path::PathBuf;

mod controller;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use pulse_core::{config_source, load_settings, AssetResolver, Settings};
use shared::domain::{DragMode, WindowVariant};
use tracing_subscriber::EnvFilter;

use crate::ui::{load_window_icon, viewport_for, PulseApp};

#[derive(Parser, Debug)]
#[command(name = "qyrou-pulse", version, about = "Qyrou-Pulse desktop window")]
struct Args {
    /// Settings file; defaults to ./qyrou-pulse.toml, then the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    /// basic, styled or neumorphic.
    #[arg(long)]
    variant: Option<WindowVariant>,
    /// Directory searched first for icons.
    #[arg(long)]
    asset_dir: Option<PathBuf>,
    /// manual or native.
    #[arg(long)]
    drag_mode: Option<DragMode>,
    /// tracing filter, e.g. `debug` or `pulse_core=trace`.
    #[arg(long = "log")]
    log_filter: Option<String>,
    /// Print the effective settings as JSON and exit.
    #[arg(long)]
    print_config: bool,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        if let Some(variant) = self.variant {
            settings.variant = variant;
        }
        if let Some(dir) = &self.asset_dir {
            settings.assets.dir = Some(dir.clone());
        }
        if let Some(mode) = self.drag_mode {
            settings.drag_mode = mode;
        }
        if let Some(filter) = &self.log_filter {
            settings.log_filter = filter.clone();
        }
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref()).context("failed to load settings")?;
    args.apply(&mut settings);
    settings.validate().context("invalid settings")?;

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    init_tracing(&settings.log_filter);
    match config_source(args.config.as_deref()) {
        Some(path) => tracing::info!(path = %path.display(), "loaded settings"),
        None => tracing::info!("no config file found; using defaults"),
    }

    let palette = settings.palette().context("invalid theme colors")?;
    let resolver = AssetResolver::from_settings(&settings.assets);
    let icon = load_window_icon(&resolver, &settings.assets);
    let options = eframe::NativeOptions {
        viewport: viewport_for(&settings, icon),
        ..Default::default()
    };

    tracing::info!(
        variant = %settings.variant,
        drag_mode = %settings.drag_mode,
        "opening window"
    );
    let app_name = settings.app_name.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| {
            Ok(Box::new(PulseApp::new(
                &cc.egui_ctx,
                settings,
                palette,
                &resolver,
            )))
        }),
    )
    .map_err(|err| anyhow!("window event loop failed: {err}"))
}
