//! Info command implementation

use clap::Args;
use lexiscore_core::config::{Config, ConfigSources};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    word_list: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_score: Option<f64>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            mode: config.mode.unwrap_or_default().to_string(),
            word_list: config.word_list.as_ref().map(|p| p.to_string()),
            min_score: config.min_score,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json = global_json, "executing info command");

    let package = PackageInfo::new();
    let config_info = ConfigInfo::from_config(config, sources);

    if global_json {
        let info = FullInfo {
            package,
            config: config_info,
        };
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{} {}", package.name.bold(), package.version);
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.repository.is_empty() {
        println!("repository: {}", package.repository);
    }
    println!();
    match &config_info.config_file {
        Some(file) => println!("config: {file}"),
        None => println!("config: none found (defaults in effect)"),
    }
    println!("log level: {}", config_info.log_level);
    println!("mode: {}", config_info.mode);
    if let Some(ref word_list) = config_info.word_list {
        println!("word list: {word_list}");
    }
    if let Some(min_score) = config_info.min_score {
        println!("min score: {min_score}");
    }

    Ok(())
}
