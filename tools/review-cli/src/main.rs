//! Review CLI - Command line tool for casino review pages.
//!
//! Commands:
//! - `review render` - Render one review record to HTML or JSON
//! - `review build` - Render a directory of records to static pages
//! - `review inspect` - Show the derived reputation, bonuses and facets
//! - `review config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BuildArgs, ConfigArgs, InspectArgs, RenderArgs};

/// Review CLI - Render and inspect casino review pages
#[derive(Parser)]
#[command(name = "review")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single review record
    Render(RenderArgs),

    /// Render every record in a directory to static pages
    Build(BuildArgs),

    /// Show what the page would be built from
    Inspect(InspectArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    logging::init(&ctx.config.logging, cli.verbose);

    // Execute command
    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Build(args) => commands::build::run(args, &ctx),
        Commands::Inspect(args) => commands::inspect::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
