//! CLI configuration.

use anyhow::{Context, Result};
use review_single::PageConfig;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, when no `--config` is given.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["review.toml", ".review.toml", "review.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Site chrome applied to every rendered page.
    #[serde(default)]
    pub site: PageConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Batch build configuration.
    #[serde(default)]
    pub build: BuildConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config content, choosing the format from the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Serialize config in the format implied by the file extension.
    pub fn render(&self, path: &str) -> Result<String> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };
        Ok(content)
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = self.render(path)?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for terminals).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Human => "human",
            LogFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "human" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("Unknown log format '{}' (expected human or json)", other),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,

    /// Default filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: default_level(),
        }
    }
}

/// Batch build configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Directory of review record JSON files.
    #[serde(default = "default_input_dir")]
    pub input_dir: String,

    /// Directory the pages are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Rating settings JSON shared by every page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<String>,
}

fn default_input_dir() -> String {
    "reviews".to_string()
}

fn default_output_dir() -> String {
    "dist".to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            settings: None,
        }
    }
}

/// Generate a default review.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Review site configuration

[site]
name = "{name}"
lang = "en"
stylesheets = []
inline_styles = true

[logging]
format = "human"
level = "warn"

[build]
input_dir = "reviews"
output_dir = "dist"
# settings = "review-settings.json"
"#,
        name = name
    )
}
