#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use userform_core::logging::DiagnosticLayer;
use userform_core::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_MIN_LOADING_MS};

/// Client configuration, set from command line
static CLIENT_CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Get the client configuration (set from command line or default)
pub fn get_client_config() -> ClientConfig {
    CLIENT_CONFIG.get().cloned().unwrap_or_default()
}

/// Post API Call - submit a user record to a REST endpoint
#[derive(Parser, Debug)]
#[command(name = "userform-app")]
#[command(about = "Collect name, age and email and POST them to a users endpoint")]
struct Args {
    /// Users endpoint the form posts to
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Minimum time the loading indicator stays visible, in milliseconds
    #[arg(long, default_value_t = DEFAULT_MIN_LOADING_MS)]
    min_loading_ms: u64,

    /// Also append diagnostics as JSONL files in this directory
    #[arg(short, long)]
    log_dir: Option<PathBuf>,

    /// Session name used in the diagnostic file name
    #[arg(short, long, default_value = "userform")]
    session: String,
}

fn init_tracing(args: &Args) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let diagnostics = match &args.log_dir {
        Some(dir) => Some(
            DiagnosticLayer::new(dir, args.session.as_str())
                .with_context(|| format!("opening diagnostic log in {}", dir.display()))?,
        ),
        None => None,
    };
    let log_path = diagnostics.as_ref().map(|layer| layer.log_path().to_path_buf());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(diagnostics)
        .init();

    if let Some(path) = log_path {
        tracing::info!("Writing diagnostics to {:?}", path);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    let config = ClientConfig::new(&args.endpoint, args.min_loading_ms)
        .context("invalid --endpoint")?;
    tracing::info!(
        endpoint = %config.endpoint,
        min_loading_ms = args.min_loading_ms,
        "Starting Post API Call"
    );
    let _ = CLIENT_CONFIG.set(config);

    launch();
    Ok(())
}

#[cfg(not(feature = "mobile"))]
fn launch() {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    // Phone-shaped window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Post API Call")
            .with_inner_size(LogicalSize::new(420.0, 820.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(feature = "mobile")]
fn launch() {
    dioxus::LaunchBuilder::mobile().launch(app::App);
}
