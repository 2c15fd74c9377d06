//! Configuration management commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let site = &ctx.config.site;
    ctx.output.info("[site]");
    ctx.output.kv("name", &site.name);
    ctx.output.kv("lang", &site.lang);
    ctx.output.kv("inline_styles", &site.inline_styles.to_string());
    for href in &site.stylesheets {
        ctx.output.list_item(href);
    }

    ctx.output.info("[logging]");
    ctx.output.kv("format", ctx.config.logging.format.as_str());
    ctx.output.kv("level", &ctx.config.logging.level);

    ctx.output.info("[build]");
    ctx.output.kv("input_dir", &ctx.config.build.input_dir);
    ctx.output.kv("output_dir", &ctx.config.build.output_dir);
    if let Some(ref settings) = ctx.config.build.settings {
        ctx.output.kv("settings", settings);
    }

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(ref config_path) = ctx.config_path else {
        bail!("No config file found. Run `review config init` to create one.");
    };
    let config_path = config_path.to_string_lossy();

    let mut config = CliConfig::load(&config_path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config(&site_name(&ctx.cwd)))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_config(&ctx.config, |path| ctx.resolve_config_path(path));

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Collect errors and warnings for a config.
fn check_config(
    config: &CliConfig,
    resolve: impl Fn(&str) -> PathBuf,
) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if config.site.name.trim().is_empty() {
        errors.push("site.name is required".to_string());
    }

    if config.site.lang.trim().is_empty() {
        errors.push("site.lang must not be empty".to_string());
    }

    if !config.site.inline_styles && config.site.stylesheets.is_empty() {
        warnings.push("site has no inline styles and no stylesheets".to_string());
    }

    if tracing_subscriber::EnvFilter::try_new(&config.logging.level).is_err() {
        errors.push(format!("logging.level '{}' is not a valid filter", config.logging.level));
    }

    if config.build.input_dir == config.build.output_dir {
        errors.push("build.input_dir and build.output_dir must differ".to_string());
    }

    if !resolve(&config.build.input_dir).is_dir() {
        warnings.push(format!("build.input_dir '{}' does not exist", config.build.input_dir));
    }

    if let Some(ref settings) = config.build.settings {
        if !resolve(settings).is_file() {
            errors.push(format!("build.settings '{}' does not exist", settings));
        }
    }

    (errors, warnings)
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["site", "name"] => Ok(format!("\"{}\"", config.site.name)),
        ["site", "lang"] => Ok(format!("\"{}\"", config.site.lang)),
        ["site", "inline_styles"] => Ok(config.site.inline_styles.to_string()),
        ["site", "stylesheets"] => Ok(serde_json::to_string(&config.site.stylesheets)?),
        ["logging", "format"] => Ok(format!("\"{}\"", config.logging.format.as_str())),
        ["logging", "level"] => Ok(format!("\"{}\"", config.logging.level)),
        ["build", "input_dir"] => Ok(format!("\"{}\"", config.build.input_dir)),
        ["build", "output_dir"] => Ok(format!("\"{}\"", config.build.output_dir)),
        ["build", "settings"] => Ok(config
            .build
            .settings
            .as_ref()
            .map(|s| format!("\"{}\"", s))
            .unwrap_or_else(|| "null".to_string())),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["site", "name"] => config.site.name = value.to_string(),
        ["site", "lang"] => config.site.lang = value.to_string(),
        ["site", "inline_styles"] => config.site.inline_styles = value.parse()?,
        ["site", "stylesheets"] => {
            config.site.stylesheets = value
                .split(',')
                .map(str::trim)
                .filter(|href| !href.is_empty())
                .map(str::to_string)
                .collect()
        }
        ["logging", "format"] => config.logging.format = value.parse()?,
        ["logging", "level"] => config.logging.level = value.to_string(),
        ["build", "input_dir"] => config.build.input_dir = value.to_string(),
        ["build", "output_dir"] => config.build.output_dir = value.to_string(),
        ["build", "settings"] => config.build.settings = Some(value.to_string()),
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}

/// Site name for a fresh config, from the directory name.
fn site_name(cwd: &std::path::Path) -> String {
    cwd.file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("Casino Reviews")
        .to_string()
}
