#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod host;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use jazz_core::LandingConfig;
use tracing_subscriber::EnvFilter;

use crate::context::PortalContext;

/// Portal services, set up from the command line before launch
static PORTAL: OnceLock<PortalContext> = OnceLock::new();

/// Get the portal context (set from command line or default)
pub fn startup_context() -> PortalContext {
    PORTAL
        .get()
        .cloned()
        .unwrap_or_else(|| PortalContext::new(LandingConfig::default()))
}

/// Jazz Portal - API services self-service
#[derive(Parser, Debug)]
#[command(name = "jazz-portal-desktop")]
#[command(about = "Jazz Portal - create, deploy and manage API services")]
struct Args {
    /// Landing page config file (JSON); defaults to <config dir>/jazz-portal/landing.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with a signed-in session for this user
    #[arg(long)]
    signed_in: Option<String>,

    /// Scroll the landing page to this section id on load
    #[arg(long)]
    scroll_to: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = LandingConfig::load(args.config.as_deref())
        .context("failed to load landing config")?;

    let portal = PortalContext::new(config);
    if let Some(user) = args.signed_in {
        portal.session.sign_in(user);
    }
    if let Some(section) = args.scroll_to {
        portal.cache.request_scroll_to(&section);
    }
    let _ = PORTAL.set(portal);

    tracing::info!("Starting Jazz Portal");

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Jazz Portal")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
