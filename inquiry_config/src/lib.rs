use std::{env, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

/// The bundled configuration. Files from `INQUIRY_CONFIG` are layered on top.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

pub const CONFIG_PATHS_ENV: &str = "INQUIRY_CONFIG";

/// Loads the bundled defaults followed by the colon separated list of files in
/// the `INQUIRY_CONFIG` environment variable.
pub fn load() -> anyhow::Result<Config> {
    let paths = env::var(CONFIG_PATHS_ENV).unwrap_or_default();
    let paths = paths
        .split(':')
        .filter(|path| !path.is_empty())
        .collect::<Vec<_>>();
    load_with_override(&paths, &[])
}

/// Loads the bundled defaults, then every file in `paths` and finally every
/// TOML snippet in `overrides`. Later sources take precedence.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = config::Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    let builder = paths.iter().try_fold(builder, |builder, path| {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let source = File::from_str(&content, FileFormat::Toml);
        anyhow::Ok(builder.add_source(source))
    })?;

    overrides
        .iter()
        .fold(builder, |builder, &snippet| {
            builder.add_source(File::from_str(snippet, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub form: FormConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Inquiries are posted to this URL.
    pub endpoint: Url,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    /// Heading displayed above the status message.
    pub title: String,
}
