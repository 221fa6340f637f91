//! SPA route table (v1)
//!
//! Resolves navigation paths to views for a single-page application.
//!
//! # Architecture Overview
//!
//! ```text
//!     routes.toml ──▶ config ──▶ routing::RouteTable (immutable, Arc)
//!                                        │
//!     stdin / args                       ▼
//!     ───────────▶ navigation::Navigator ──▶ resolve ──▶ ViewRenderer ──▶ stdout (JSON)
//!                        ▲
//!                        └── lifecycle (signals, shutdown)
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::json;
use tokio::io::BufReader;

use spa_router::config::{load_config, RouterConfig};
use spa_router::lifecycle::{self, Shutdown};
use spa_router::navigation::{self, JsonRenderer, Navigator};
use spa_router::routing::{normalize_path, RouteTable};

#[derive(Parser)]
#[command(name = "spa-router")]
#[command(about = "Resolve single-page application routes", long_about = None)]
struct Cli {
    /// Route configuration file (TOML). Uses the built-in routes when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table
    Routes,
    /// Validate the configuration and build the route table
    Check,
    /// Resolve one or more paths
    Resolve {
        /// Normalize each path before resolving
        #[arg(short, long)]
        normalize: bool,

        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Read navigation targets from stdin, one per line
    Navigate,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Check => check(config_path)?,
        Commands::Routes => {
            let startup = lifecycle::start(config_path)?;
            print_routes(&startup.table)?;
        }
        Commands::Resolve { normalize, paths } => {
            let table = lifecycle::start(config_path)?.table;
            for raw in paths {
                let path = if normalize { normalize_path(&raw) } else { raw.clone() };
                let resolution = table.resolve_route(&path);
                println!(
                    "{}",
                    serde_json::to_string(&json!({ "input": raw, "resolution": resolution }))?
                );
            }
        }
        Commands::Navigate => {
            let table = lifecycle::start(config_path)?.table;
            navigate(table).await?;
        }
    }

    Ok(())
}

/// Feed stdin lines to a navigator until EOF or a termination signal.
async fn navigate(table: Arc<RouteTable>) -> Result<(), Box<dyn std::error::Error>> {
    let shutdown = Shutdown::new();
    let (tx, rx) = navigation::channel();

    let mut navigator = tokio::spawn(
        Navigator::new(table, JsonRenderer::new(std::io::stdout())).run(rx, shutdown.subscribe()),
    );

    let reader = tokio::spawn(navigation::forward_lines(
        BufReader::new(tokio::io::stdin()),
        tx,
    ));

    let (navigator, interrupted) = tokio::select! {
        res = &mut navigator => (res?, false),
        _ = lifecycle::wait_for_signal() => {
            shutdown.trigger();
            (navigator.await?, true)
        }
    };

    if interrupted {
        reader.abort();
    } else {
        let sent = reader.await??;
        tracing::debug!(lines = sent, "Input exhausted");
    }

    tracing::info!(
        navigations = navigator.session().completed(),
        "Session ended"
    );
    Ok(())
}

/// Validate and build the table without starting logging.
fn check(path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    let table = RouteTable::from_config(&config)?;

    println!(
        "OK: {} routes, fallback {}",
        table.len(),
        table.redirect_target().unwrap_or("<view>")
    );
    Ok(())
}

fn print_routes(table: &RouteTable) -> Result<(), serde_json::Error> {
    let routes: Vec<_> = table
        .entries()
        .iter()
        .map(|e| json!({ "pattern": e.pattern(), "view": e.view() }))
        .collect();

    let out = json!({
        "routes": routes,
        "fallback": {
            "redirect_to": table.redirect_target(),
            "view": table.default_view(),
        },
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
