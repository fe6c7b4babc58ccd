//! Layered configuration: defaults < JSON config file < environment/CLI.
//!
//! Environment variables are read by clap (`env = ...`) in `main.rs`, so by the
//! time [`ConfigOverrides`] reaches [`AppConfig::resolve`] they are already
//! folded into the CLI layer.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";
pub const DEFAULT_MIN_QUERY_LEN: usize = 3;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_MAX_RATING: u8 = 10;
pub const APP_DIR_NAME: &str = "popcorn";

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
}

/// Tunables for the search box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchSettings {
    /// Queries shorter than this (after trimming) never hit the network.
    pub min_query_len: usize,
    /// Delay between the last keystroke and the request. 0 searches immediately.
    pub debounce_ms: u64,
    pub max_rating: u8,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_rating: DEFAULT_MAX_RATING,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub storage_path: PathBuf,
    pub log_file: Option<PathBuf>,
    pub search: SearchSettings,
}

/// Shape of `config.json`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub api_key: Option<String>,
    #[serde(alias = "omdb_base_url")]
    pub base_url: Option<String>,
    pub storage_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub min_query_len: Option<usize>,
    pub debounce_ms: Option<u64>,
    pub max_rating: Option<u8>,
}

/// Values supplied on the command line (or via the environment through clap).
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub storage_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    fn for_overrides(overrides: &ConfigOverrides) -> Result<Self> {
        match &overrides.config_path {
            Some(path) => Self::load(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Loads the default config file if present. A broken file is logged and ignored.
    fn load_default() -> Self {
        let Some(path) = default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            info!("No config file at {}; using defaults", path.display());
            return Self::default();
        }
        match Self::load(&path) {
            Ok(file) => {
                info!("Loaded config from {}", path.display());
                file
            }
            Err(e) => {
                warn!("{e:#}. Using defaults.");
                Self::default()
            }
        }
    }
}

impl AppConfig {
    /// Builds the effective configuration. An explicit `--config` path must
    /// exist and parse; the default location is optional.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let file = ConfigFile::for_overrides(&overrides)?;
        Self::merge(file, overrides)
    }

    /// Storage location from the same layers as [`Self::resolve`], without
    /// requiring an API key.
    pub fn resolve_storage_path(overrides: &ConfigOverrides) -> Result<PathBuf> {
        let file = ConfigFile::for_overrides(overrides)?;
        Self::pick_storage_path(overrides.storage_path.clone(), file.storage_path)
    }

    fn pick_storage_path(cli: Option<PathBuf>, file: Option<PathBuf>) -> Result<PathBuf> {
        match cli.or(file) {
            Some(path) => Ok(path),
            None => default_storage_path(),
        }
    }

    pub fn merge(file: ConfigFile, overrides: ConfigOverrides) -> Result<Self> {
        let api_key = overrides
            .api_key
            .or(file.api_key)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        let Some(api_key) = api_key else {
            bail!(
                "No OMDb API key configured. Pass --api-key, set OMDB_API_KEY, or add \"api_key\" to config.json"
            );
        };

        let base_url = overrides
            .base_url
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let storage_path = Self::pick_storage_path(overrides.storage_path, file.storage_path)?;

        let defaults = SearchSettings::default();
        let max_rating = file.max_rating.unwrap_or(defaults.max_rating);
        if max_rating == 0 {
            bail!("max_rating must be at least 1");
        }

        Ok(Self {
            api: ApiConfig { base_url, api_key },
            storage_path,
            log_file: overrides.log_file.or(file.log_file),
            search: SearchSettings {
                min_query_len: file.min_query_len.unwrap_or(defaults.min_query_len),
                debounce_ms: file.debounce_ms.unwrap_or(defaults.debounce_ms),
                max_rating,
            },
        })
    }

    /// Log file for the interactive session.
    pub fn interactive_log_file(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(default_log_path)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.json"))
}

pub fn default_storage_path() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .or_else(dirs::home_dir)
        .context("Could not determine a data directory for the watched list")?;
    Ok(dir.join(APP_DIR_NAME).join("storage.json"))
}

pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR_NAME).join("popcorn.log"))
}
