use crate::error::UsageError;
use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const BASE_URL_ENV: &str = "OPENROUTER_BASE_URL";

const CONFIG_DIR_NAME: &str = ".openrouter-usage";
const CONFIG_FILE_NAME: &str = "config.json";

/// Contents of `~/.openrouter-usage/config.json`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

/// Settings after merging the config file with the environment.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

/// Returns the config directory (`~/.openrouter-usage`).
///
/// # Errors
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf> {
    Ok(dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
        .join(CONFIG_DIR_NAME))
}

/// Loads the config file from `config_dir`, falling back to defaults when it
/// is missing or cannot be parsed.
#[must_use]
pub fn load_config(config_dir: &Path) -> AppConfig {
    let config_path = config_dir.join(CONFIG_FILE_NAME);
    fs::read_to_string(&config_path)
        .ok()
        .and_then(|content| {
            serde_json::from_str(&content)
                .inspect_err(|e| {
                    tracing::warn!(
                        path = %config_path.display(),
                        "Failed to parse config file, using defaults: {e}"
                    );
                })
                .ok()
        })
        .unwrap_or_default()
}

/// Merges the file config with environment overrides.
///
/// Environment values win over file values; empty strings count as unset.
///
/// # Errors
/// Returns [`UsageError::Config`] when no API key is available.
pub fn resolve(
    file: AppConfig,
    env_api_key: Option<String>,
    env_base_url: Option<String>,
) -> Result<ResolvedConfig, UsageError> {
    let api_key = non_empty(env_api_key)
        .or_else(|| non_empty(file.api_key))
        .ok_or_else(|| {
            UsageError::Config(format!(
                "No API key found. Set {API_KEY_ENV} or add \"apiKey\" to ~/{CONFIG_DIR_NAME}/{CONFIG_FILE_NAME}"
            ))
        })?;

    let base_url = non_empty(env_base_url)
        .or_else(|| non_empty(file.base_url))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    Ok(ResolvedConfig {
        api_key,
        base_url: base_url.trim_end_matches('/').to_string(),
        // 0 means no timeout.
        timeout: file
            .request_timeout_secs
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs),
    })
}

/// Loads `~/.openrouter-usage/config.json` and applies the process environment.
///
/// # Errors
/// Returns an error if the home directory is unknown or no API key is configured.
pub fn load_from_env() -> Result<ResolvedConfig> {
    let file = load_config(&config_dir()?);
    let resolved = resolve(
        file,
        std::env::var(API_KEY_ENV).ok(),
        std::env::var(BASE_URL_ENV).ok(),
    )?;
    Ok(resolved)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
