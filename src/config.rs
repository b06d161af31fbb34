//! Configuration file support for bazel-sbom.
//!
//! Provides YAML-based configuration through `bazel-sbom.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use bazel_sbom::adapters::outbound::network::{RetryPolicy, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
use bazel_sbom::sbom_generation::domain::SpecVersion;
use bazel_sbom::shared::Result;

pub const CONFIG_FILENAME: &str = "bazel-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub spec_version: Option<String>,
    pub api: Option<ApiConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Settings for the Snyk REST API client.
#[derive(Debug, Deserialize, Default)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub version: Option<String>,
    pub max_retries: Option<u32>,
    pub retry_delay_secs: Option<u64>,
    pub rate_limit_pause_secs: Option<u64>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Schema version from the file, if one is set.
    ///
    /// Only meaningful after validation, which rejects unknown versions.
    pub fn spec_version(&self) -> Option<SpecVersion> {
        self.spec_version.as_deref().and_then(|v| v.parse().ok())
    }

    pub fn base_url(&self) -> &str {
        self.api
            .as_ref()
            .and_then(|api| api.base_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn api_version(&self) -> &str {
        self.api
            .as_ref()
            .and_then(|api| api.version.as_deref())
            .unwrap_or(DEFAULT_API_VERSION)
    }

    /// Retry policy with file overrides applied on top of the defaults.
    pub fn retry_policy(&self) -> RetryPolicy {
        let defaults = RetryPolicy::default();
        let Some(api) = self.api.as_ref() else {
            return defaults;
        };
        RetryPolicy::new(
            api.max_retries.unwrap_or(defaults.max_attempts),
            api.retry_delay_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.retry_delay),
            api.rate_limit_pause_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.rate_limit_pause),
        )
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to unit, not to an empty mapping.
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref version) = config.spec_version {
        if let Err(e) = version.parse::<SpecVersion>() {
            bail!(
                "Invalid config: {}\n\n💡 Hint: spec_version must be one of \"1.4\", \"1.5\" or \"1.6\".",
                e
            );
        }
    }

    if let Some(ref api) = config.api {
        if api.max_retries == Some(0) {
            bail!(
                "Invalid config: api.max_retries must be at least 1.\n\n\
                 💡 Hint: The value counts the first attempt too."
            );
        }
        if let Some(ref base_url) = api.base_url {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                bail!(
                    "Invalid config: api.base_url '{}' must start with http:// or https://",
                    base_url
                );
            }
        }
        if matches!(api.version.as_deref(), Some(v) if v.trim().is_empty()) {
            bail!("Invalid config: api.version must not be empty.");
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
    if let Some(ref api) = config.api {
        for key in api.unknown_fields.keys() {
            eprintln!(
                "⚠️  Warning: Unknown config field 'api.{}' will be ignored.",
                key
            );
        }
    }
}
