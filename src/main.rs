#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::content::PROFILE;
use portfolio_core::PageConfig;
use tracing_subscriber::EnvFilter;

/// Global page config, set from command line
static PAGE_CONFIG: OnceLock<PageConfig> = OnceLock::new();

/// Get the page config (set at startup or default)
pub fn page_config() -> PageConfig {
    PAGE_CONFIG.get().cloned().unwrap_or_default()
}

/// Portfolio - single-page personal portfolio
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Single-page personal portfolio with scroll-driven animations")]
struct Args {
    /// Page config file (JSON). Defaults to <config dir>/portfolio/page.json if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(short, long, default_value = "info")]
    log: String,

    /// Show the page immediately without the preloader
    #[arg(long)]
    skip_preloader: bool,
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio")
        .join("page.json")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match args.config {
        Some(ref path) => PageConfig::load(path)
            .with_context(|| format!("failed to load page config from {}", path.display()))?,
        None => {
            let path = default_config_path();
            PageConfig::load_or_default(&path)
                .with_context(|| format!("failed to load page config from {}", path.display()))?
        }
    };
    if args.skip_preloader {
        config.preloader_delay_ms = 0;
        config.preloader_exit_ms = 0;
    }

    tracing::info!(
        preloader_delay_ms = config.preloader_delay_ms,
        scroll_threshold = config.scroll_threshold,
        "Starting portfolio"
    );

    // Store page config globally
    let _ = PAGE_CONFIG.set(config);

    let title = format!("{} | Portfolio", PROFILE.name);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
