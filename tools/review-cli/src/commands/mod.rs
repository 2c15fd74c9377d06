//! CLI command implementations.

pub mod build;
pub mod config;
pub mod inspect;
pub mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand, ValueEnum};
use review_core::{RatingSettings, ReviewRecord};

use crate::context::Context;

/// Output format of a rendered review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Complete HTML document.
    #[default]
    Html,
    /// The composed page as JSON.
    Json,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Review record JSON (bare review or full query response).
    pub record: String,

    /// Rating settings JSON.
    #[arg(short, long)]
    pub settings: Option<String>,

    /// Write to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = RenderFormat::Html)]
    pub format: RenderFormat,
}

/// Arguments for the build command.
#[derive(Args)]
pub struct BuildArgs {
    /// Directory of review records (default: build.input_dir).
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output directory (default: build.output_dir).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Rating settings JSON (default: build.settings).
    #[arg(short, long)]
    pub settings: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// Review record JSON.
    pub record: String,

    /// Rating settings JSON.
    #[arg(short, long)]
    pub settings: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Settings file from the command line (cwd-relative) or config (file-relative).
pub(crate) fn settings_path(arg: Option<&str>, ctx: &Context) -> Option<PathBuf> {
    match (arg, ctx.config.build.settings.as_deref()) {
        (Some(path), _) => Some(ctx.resolve_path(path)),
        (None, Some(path)) => Some(ctx.resolve_config_path(path)),
        (None, None) => None,
    }
}

/// Read and parse a review record file.
pub(crate) fn load_record(path: &Path) -> Result<ReviewRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read review record: {}", path.display()))?;

    ReviewRecord::from_json(&content)
        .with_context(|| format!("Failed to parse review record: {}", path.display()))
}

/// Read the rating settings named on the command line, else in config.
///
/// No settings at all is not an error: pages render without tier icons.
pub(crate) fn load_settings(arg: Option<&str>, ctx: &Context) -> Result<Option<RatingSettings>> {
    let Some(path) = settings_path(arg, ctx) else {
        ctx.output.debug("No rating settings given, tier icons omitted");
        return Ok(None);
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read rating settings: {}", path.display()))?;
    let settings = RatingSettings::from_json(&content)
        .with_context(|| format!("Failed to parse rating settings: {}", path.display()))?;

    ctx.output
        .debug(&format!("Loaded {} rating icon(s) from {}", settings.len(), path.display()));
    Ok(Some(settings))
}
