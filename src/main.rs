#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::{DiagnosticLayer, DiagnosticLog, DiagnosticWriter, FormMethod, PreferenceStore};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::context::AppConfig;

/// Resolved startup configuration, set once from the command line
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Handle onto the records captured by the diagnostic layer
static DIAGNOSTICS: OnceLock<DiagnosticLog> = OnceLock::new();

/// Preference store opened at startup (absent if the database could not be opened)
static PREFERENCES: OnceLock<Option<PreferenceStore>> = OnceLock::new();

const DEFAULT_LOG_FILTER: &str = "folio=info,folio_core=info";

/// Default contact endpoint
const DEFAULT_CONTACT_ACTION: &str = "http://127.0.0.1:8080/contact";

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

/// Get the startup configuration (defaults if main has not run yet)
pub fn app_config() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_else(|| AppConfig {
        contact_action: DEFAULT_CONTACT_ACTION.to_string(),
        contact_method: FormMethod::Post,
        catalog_latency: folio_core::catalog::DEFAULT_FETCH_LATENCY,
        prefer_light: false,
    })
}

/// Get the shared diagnostic log (an empty, unattached one before main runs)
pub fn diagnostic_log() -> DiagnosticLog {
    DIAGNOSTICS.get().cloned().unwrap_or_default()
}

pub fn preference_store() -> Option<PreferenceStore> {
    PREFERENCES.get().cloned().flatten()
}

/// Folio - personal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - project portfolio with filtering, details and contact form")]
struct Args {
    /// Data directory for the preference store and diagnostic logs
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// URL the contact form is submitted to
    #[arg(long, default_value = DEFAULT_CONTACT_ACTION)]
    contact_action: String,

    /// HTTP method of the contact form (post or get)
    #[arg(long, default_value = "post")]
    contact_method: FormMethod,

    /// Simulated latency of the project catalog fetch, in milliseconds
    #[arg(long, default_value_t = 200)]
    latency_ms: u64,

    /// Start in the light theme when no theme was saved
    #[arg(long)]
    prefer_light: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating data directory {}", data_dir.display()))?;

    // Console output plus captured diagnostics (memory + JSONL file)
    let diagnostics = DiagnosticLog::new();
    let writer = DiagnosticWriter::new(data_dir.join("logs"))
        .context("opening diagnostics log file")?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(DiagnosticLayer::new(diagnostics.clone()).with_writer(writer))
        .init();
    let _ = DIAGNOSTICS.set(diagnostics);

    let store = match PreferenceStore::open(data_dir.join("preferences.redb")) {
        Ok(store) => Some(store),
        Err(e) => {
            tracing::warn!("Preferences unavailable, theme will not persist: {}", e);
            None
        }
    };
    let _ = PREFERENCES.set(store);

    let config = AppConfig {
        contact_action: args.contact_action,
        contact_method: args.contact_method,
        catalog_latency: Duration::from_millis(args.latency_ms),
        prefer_light: args.prefer_light,
    };
    let _ = APP_CONFIG.set(config);

    tracing::info!("Starting Folio with data dir: {:?}", data_dir);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Folio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
