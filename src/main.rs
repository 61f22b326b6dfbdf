#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use overture_core::IntroConfig;

/// Global intro configuration, set from command line
static INTRO_CONFIG: OnceLock<IntroConfig> = OnceLock::new();

/// Whether to bypass the intro entirely, set from command line
static SKIP_INTRO: OnceLock<bool> = OnceLock::new();

/// Get the intro configuration (from command line or defaults)
pub fn get_intro_config() -> IntroConfig {
    INTRO_CONFIG.get().cloned().unwrap_or_default()
}

/// Whether the intro should be skipped outright
pub fn get_skip_intro() -> bool {
    SKIP_INTRO.get().copied().unwrap_or(false)
}

/// Overture - one-shot introductory animation over the main content
#[derive(Parser, Debug)]
#[command(name = "overture-desktop")]
#[command(about = "Overture - animated intro sequence with staggered content reveal")]
struct Args {
    /// Total intro duration in milliseconds before the auto-advance fires
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Number of decorative particles to spawn during the intro
    #[arg(long)]
    particles: Option<u32>,

    /// Interval between status messages in milliseconds
    #[arg(long)]
    status_interval_ms: Option<u64>,

    /// Skip the intro and land directly on the main content
    #[arg(long)]
    skip_intro: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut config = IntroConfig::default();
    if let Some(ms) = args.duration_ms {
        config.total_duration = Duration::from_millis(ms);
    }
    if let Some(count) = args.particles {
        config.particle_count = count;
    }
    if let Some(ms) = args.status_interval_ms {
        config.status_interval = Duration::from_millis(ms);
    }

    // A bad override must not wedge the app behind a locked scroll; fall
    // back to the shipped timings instead.
    if let Err(e) = config.validate() {
        tracing::warn!("ignoring command-line intro overrides: {}", e);
        config = IntroConfig::default();
    }

    tracing::info!(
        duration_ms = config.total_duration.as_millis() as u64,
        particles = config.particle_count,
        skip = args.skip_intro,
        "Starting Overture"
    );

    let _ = INTRO_CONFIG.set(config);
    let _ = SKIP_INTRO.set(args.skip_intro);

    let window_width = 1100.0;
    let window_height = 800.0;

    let window_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Overture")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window_config)
        .launch(app::App);
}
