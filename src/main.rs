//! Vitrine CLI
//!
//! Developer tooling for the site helper:
//! - Print a default configuration file
//! - Check contact form values against the validation rules
//! - Replay a scripted browsing session against an in-memory page

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrine::config::generate_default_config;
use vitrine::{ContactSubmission, FormValidator, LoggingConfig, Simulation, SimulationStep, SiteConfig};

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Single-page site helper: routing, contact form and scroll effects")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a default config file
    Config,

    /// Validate contact form values
    Validate {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
    },

    /// Replay a JSON script of user actions and print the final page state
    Simulate {
        /// Path to a JSON array of steps, e.g. [{"action": "click", "route": "about"}]
        script: PathBuf,
        /// Reveal-on-scroll items as TOP:HEIGHT in page pixels
        #[arg(long = "reveal", value_parser = parse_item)]
        reveal_items: Vec<(f64, f64)>,
    },
}

fn parse_item(s: &str) -> Result<(f64, f64), String> {
    let (top, height) = s
        .split_once(':')
        .ok_or_else(|| format!("expected TOP:HEIGHT, got {s:?}"))?;
    let top = top.trim().parse::<f64>().map_err(|e| format!("bad top {top:?}: {e}"))?;
    let height = height
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad height {height:?}: {e}"))?;
    Ok((top, height))
}

fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("vitrine={}", config.level)));

    // stdout carries command output, logs go to stderr or the configured file
    let writer = match &config.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {path}"))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(writer))
            .init();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SiteConfig::load_with_env(path)?,
        None => SiteConfig::load_default(),
    };
    init_logging(&config.logging)?;

    match cli.command {
        Commands::Config => {
            print!("{}", generate_default_config());
        }

        Commands::Validate {
            name,
            email,
            message,
        } => {
            let submission = ContactSubmission::new(name, email, message);
            match FormValidator::new().validate(&submission) {
                Ok(()) => println!("OK"),
                Err(errors) => {
                    for message in errors.messages(&config.copy) {
                        println!("{message}");
                    }
                    bail!("{} field(s) failed validation", errors.len());
                }
            }
        }

        Commands::Simulate {
            script,
            reveal_items,
        } => {
            let content = std::fs::read_to_string(&script)
                .with_context(|| format!("reading script {}", script.display()))?;
            let steps: Vec<SimulationStep> = serde_json::from_str(&content)
                .with_context(|| format!("parsing script {}", script.display()))?;

            tracing::info!(steps = steps.len(), "Running simulation");

            let mut simulation = Simulation::with_default_page(config, &reveal_items);
            simulation.run(steps);

            println!("{}", serde_json::to_string_pretty(&simulation.snapshot())?);
        }
    }

    Ok(())
}
