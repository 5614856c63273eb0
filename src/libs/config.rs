//! Application configuration management.
//!
//! Configuration lives as pretty-printed JSON in the platform-specific data
//! directory resolved by [`DataStorage`]. Everything has a built-in default
//! taken from the package metadata baked in at compile time, so the tool is
//! usable without ever running `upkeep init`; the config file only exists to
//! override those defaults (another repository, another asset name, a
//! different timeout).
//!
//! ## Configuration Sources
//!
//! 1. Compile-time defaults from `[package.metadata]` in Cargo.toml
//! 2. The `config.json` file written by `upkeep init`

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default network timeout in seconds.
///
/// The upstream design imposed no timeout at all; a bounded one is a
/// deliberate deviation so a stalled connection cannot hang a check forever.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings describing the managed application and its release channel.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UpdateConfig {
    /// Repository owner on GitHub.
    pub owner: String,
    /// Repository name on GitHub.
    pub repo: String,
    /// Fixed release asset filename to download.
    pub asset: String,
    /// Path to the managed binary, relative to the working directory.
    pub target_bin: String,
    /// Timeout applied to every network request, in seconds.
    pub timeout_secs: u64,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            owner: APP_METADATA_OWNER.to_owned(),
            repo: APP_METADATA_REPO.to_owned(),
            asset: APP_METADATA_ASSET.to_owned(),
            target_bin: APP_METADATA_TARGET_BIN.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl UpdateConfig {
    /// URL of the latest-release metadata endpoint for the configured repository.
    pub fn releases_api_url(&self) -> String {
        format!("https://api.github.com/repos/{}/{}/releases/latest", self.owner, self.repo)
    }

    /// URL of the release asset for a given tag.
    ///
    /// The asset location is derived from the tag and the fixed asset
    /// filename rather than read back from the release metadata.
    pub fn download_url(&self, tag: &str) -> String {
        format!("https://github.com/{}/{}/releases/download/{}/{}", self.owner, self.repo, tag, self.asset)
    }

    /// Value for the `User-Agent` header. GitHub rejects anonymous requests.
    pub fn user_agent(&self) -> String {
        format!("{}/{}", APP_METADATA_NAME, APP_METADATA_VERSION)
    }

    /// Filesystem path of the managed binary.
    pub fn target_path(&self) -> PathBuf {
        PathBuf::from(&self.target_bin)
    }

    /// Directory the release archive is extracted into.
    ///
    /// This is the directory containing the managed binary; a bare filename
    /// resolves to the current working directory.
    pub fn install_dir(&self) -> PathBuf {
        let target = self.target_path();
        match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Interactive setup for the update section, seeded with current values.
    pub fn init(current: &Option<UpdateConfig>) -> Result<Self> {
        let defaults = current.clone().unwrap_or_default();
        Ok(Self {
            owner: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Repository owner")
                .default(defaults.owner)
                .interact_text()?,
            repo: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Repository name")
                .default(defaults.repo)
                .interact_text()?,
            asset: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Release asset filename")
                .default(defaults.asset)
                .interact_text()?,
            target_bin: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Managed binary path")
                .default(defaults.target_bin)
                .interact_text()?,
            timeout_secs: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Network timeout (seconds)")
                .default(defaults.timeout_secs)
                .interact_text()?,
        })
    }
}

/// Top-level application configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Overrides for the managed application's release channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<UpdateConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when absent.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if it exists.
    pub fn remove() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Effective update settings: the configured section or the defaults.
    pub fn update(&self) -> UpdateConfig {
        self.update.clone().unwrap_or_default()
    }
}
