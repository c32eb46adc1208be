#![allow(non_snake_case)]

mod app;
mod components;
mod config;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::Catalog;

use crate::config::{CatalogSource, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

/// Catalog source, set from command line
static CATALOG_SOURCE: OnceLock<CatalogSource> = OnceLock::new();

/// Catalog loaded before launch
static INITIAL_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Get the catalog source (set from command line or default)
pub fn get_catalog_source() -> CatalogSource {
    CATALOG_SOURCE.get().cloned().unwrap_or(CatalogSource::Reference)
}

/// Get the catalog loaded at startup
pub fn get_initial_catalog() -> Catalog {
    INITIAL_CATALOG.get().cloned().unwrap_or_else(Catalog::reference)
}

/// Portfolio - animated project gallery
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Portfolio - project gallery with animated detail view")]
struct Args {
    /// Catalog JSON file (defaults to <config dir>/portfolio/catalog.json, then the built-in catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Validate the catalog and exit without opening a window
    #[arg(long)]
    check: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = DEFAULT_WINDOW_WIDTH)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = DEFAULT_WINDOW_HEIGHT)]
    height: f64,

    /// Log filter directives (overrides RUST_LOG), e.g. "portfolio_core=debug"
    #[arg(long)]
    log: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = portfolio_core::logging::init(args.log.as_deref()) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    let source = CatalogSource::resolve(args.catalog, config::default_catalog_path());
    let catalog = match source.load() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load catalog from {}: {}", source, e);
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.check {
        println!("catalog ok: {} projects ({})", catalog.len(), source);
        return ExitCode::SUCCESS;
    }

    tracing::info!("Starting gallery with {} projects from {}", catalog.len(), source);

    let _ = CATALOG_SOURCE.set(source);
    let _ = INITIAL_CATALOG.set(catalog);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    ExitCode::SUCCESS
}
