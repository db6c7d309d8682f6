use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Environment variable consulted for the OpenWeather API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

fn default_debounce_ms() -> u64 {
    500
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// debounce_ms = 500
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OpenWeather API key, if one has been configured.
    pub api_key: Option<String>,

    /// Quiet period (milliseconds) the input must hold before a fetch.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self { api_key: None, debounce_ms: default_debounce_ms() }
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Resolve the API key with precedence: CLI flag, then the
/// `OPENWEATHER_API_KEY` environment variable, then the config file.
///
/// The environment value is passed in (rather than read here) so the
/// precedence stays a pure, testable function.
pub fn resolve_api_key(
    flag: Option<String>,
    env: Option<String>,
    config: &Config,
) -> Result<String> {
    flag.or(env).or_else(|| config.api_key.clone()).ok_or_else(|| {
        anyhow!(
            "No API key configured.\n\
             Hint: run `skycast configure`, or set {API_KEY_ENV}, or pass --api-key."
        )
    })
}
