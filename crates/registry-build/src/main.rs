//! Component registry offline builder
//!
//! Resolves every manifest item ahead of deployment and writes static JSON
//! output so the registry can be served without the resolver process.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

use clap::{Parser, Subcommand};
use registry_build::build_registry;
use registry_core::config::BuildConfig;
use registry_core::{Config, Manifest, context_error, context_error::Result};
use std::path::PathBuf;
use tracing::info;

/// Command line interface for the registry builder
#[derive(Parser)]
#[command(
    name = "registry-build",
    version = env!("CARGO_PKG_VERSION"),
    about = "Offline builder for the component registry",
    long_about = "Resolves every item in the registry manifest ahead of time and writes one JSON file per component plus an aggregate index."
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Enable structured JSON logging
    #[arg(long)]
    json: bool,

    /// Subcommand
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Build the static registry output
    Build {
        /// Output directory (overrides config)
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Base URL for generated component URLs (overrides config)
        #[arg(long, env = "REGISTRY_BASE_URL", value_name = "URL")]
        base_url: Option<String>,

        /// Project root directory (overrides config)
        #[arg(long, value_name = "DIR")]
        project_root: Option<PathBuf>,
    },

    /// Validate or inspect the configuration and manifest
    Config {
        /// Show resolved configuration
        #[arg(short, long)]
        show: bool,

        /// Validate the manifest document
        #[arg(short, long)]
        validate: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (for development convenience)
    if let Err(e) = dotenvy::dotenv() {
        // It's okay if .env doesn't exist
        eprintln!("Note: .env file not loaded: {e}");
    }

    let cli = Cli::parse();

    init_logging(&cli);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Build {
            out_dir,
            base_url,
            project_root,
        }) => run_build(config, out_dir, base_url, project_root).await,
        Some(Commands::Config { show, validate }) => handle_config_command(&config, show, validate),
        None => run_build(config, None, None, None).await,
    }
}

/// Initialize logging system
fn init_logging(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if cli.json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Load configuration from file or environment
///
/// # Errors
///
/// Returns error if the configuration file cannot be read or parsed
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    if let Some(path) = config_path {
        info!("Loading configuration from: {}", path.display());

        let config_content = std::fs::read_to_string(path).map_err(|e| {
            context_error!("Failed to read config file {}: {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&config_content)
            .map_err(|e| context_error!("Failed to parse config file: {e}"))?;

        Ok(config)
    } else {
        Ok(Config::load().unwrap_or_else(|err| {
            info!("Failed to load config ({}), using defaults", err);
            Config::default()
        }))
    }
}

/// Run the offline build
///
/// # Errors
///
/// Returns error if the manifest cannot be loaded or output cannot be
/// written
async fn run_build(
    config: Config,
    out_dir: Option<PathBuf>,
    base_url: Option<String>,
    project_root: Option<PathBuf>,
) -> Result<()> {
    let mut build: BuildConfig = config.build.clone().unwrap_or_default();
    if let Some(dir) = out_dir {
        build.out_dir = dir;
    }
    if let Some(url) = base_url {
        build.base_url = url;
    }

    let project_root = project_root.unwrap_or_else(|| config.registry.project_root.clone());
    let manifest_path = project_root.join(&config.registry.manifest_file);

    info!(
        manifest = %manifest_path.display(),
        out_dir = %build.out_dir.display(),
        base_url = %build.base_url,
        "Building registry"
    );

    let manifest = Manifest::load(&manifest_path)
        .map_err(|e| context_error!("Manifest load failed: {}", e))?;

    let summary = build_registry(&project_root, &manifest, &build)
        .await
        .map_err(|e| context_error!("Registry build failed: {}", e))?;

    println!(
        "Built {} of {} components ({} failed), index at {}",
        summary.written,
        manifest.items.len(),
        summary.failed,
        summary.index_path.display()
    );

    Ok(())
}

/// Handle configuration commands
///
/// # Errors
///
/// Returns error if configuration cannot be serialized or the manifest is
/// invalid
fn handle_config_command(config: &Config, show: bool, validate: bool) -> Result<()> {
    if validate {
        let manifest_path = config.manifest_path();
        let manifest = Manifest::load(&manifest_path)
            .map_err(|e| context_error!("Manifest validation failed: {}", e))?;
        println!(
            "Manifest OK: {} items in {}",
            manifest.items.len(),
            manifest_path.display()
        );
    }

    if show {
        let config_toml = toml::to_string_pretty(config)
            .map_err(|e| context_error!("Failed to serialize configuration: {e}"))?;
        println!("{config_toml}");
    }

    Ok(())
}
