//! Job board router (v1)
//!
//! Command-line host for the route resolver: loads a route table, then
//! answers navigation queries against it.
//!
//! # Architecture Overview
//!
//! ```text
//!     routes.toml ──▶ config ──▶ RouteTable ──▶ Resolver
//!     (or built-in                (immutable)      │
//!      job board table)                            ▼
//!     path ──▶ normalize_path ──────────▶ resolve ──▶ Matched { view, params }
//!                                                   └▶ NotFound { requested_path }
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use jobboard_router::config::{load_config, RouterConfig};
use jobboard_router::observability::logging;
use jobboard_router::routing::{normalize_path, Params, Resolver, RouteTable};

#[derive(Parser)]
#[command(name = "jobboard-router")]
#[command(about = "Resolve job board paths to views", long_about = None)]
struct Cli {
    /// Route table file (TOML). Defaults to the built-in job board routes.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path to a view
    Resolve {
        path: String,

        /// Skip query/fragment stripping and trailing-slash normalization
        #[arg(long)]
        raw: bool,
    },
    /// List the route table in match order
    Routes,
    /// Build the path of a named route
    Href {
        name: String,

        /// Path parameter as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
}

/// Exit status for `resolve` when no route matches.
const EXIT_NOT_FOUND: u8 = 2;

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("missing parameter name in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Run one subcommand, writing its output to `out`. Returns the exit status.
fn run(
    command: Commands,
    resolver: &Resolver,
    out: &mut impl Write,
) -> Result<u8, Box<dyn std::error::Error>> {
    match command {
        Commands::Resolve { path, raw } => {
            let path = if raw { path } else { normalize_path(&path) };
            let resolution = resolver.resolve(&path);
            writeln!(out, "{}", serde_json::to_string_pretty(&resolution)?)?;
            if resolution.is_not_found() {
                return Ok(EXIT_NOT_FOUND);
            }
        }
        Commands::Routes => {
            let routes: Vec<_> = resolver
                .table()
                .routes()
                .iter()
                .enumerate()
                .map(|(index, route)| {
                    json!({
                        "index": index,
                        "path": route.pattern.to_string(),
                        "view": route.view,
                        "name": route.name,
                        "props": route.props,
                    })
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&routes)?)?;
        }
        Commands::Href { name, params } => {
            let params: Params = params.into_iter().collect();
            writeln!(out, "{}", resolver.href(&name, &params)?)?;
        }
    }

    Ok(0)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    logging::init(&config.observability)?;

    let table = RouteTable::from_config(&config.routes)?;
    let resolver = Resolver::new(table);

    tracing::debug!(
        source = %cli.config.as_ref().map_or("built-in".into(), |p| p.display().to_string()),
        routes = resolver.table().len(),
        fallback = resolver.table().has_fallback(),
        "Resolver ready"
    );

    let status = run(cli.command, &resolver, &mut io::stdout().lock())?;
    Ok(ExitCode::from(status))
}
