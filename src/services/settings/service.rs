use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

/// Loads and stores `Settings` as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file in the platform config directory.
    pub fn from_default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "EventAdmin", "EventFormSync")
            .context("Failed to determine config directory")?;
        Ok(Self::new(dirs.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings. A missing file gives the defaults.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!("No settings at {:?}, using defaults", self.path);
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file {:?}", self.path))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file {:?}", self.path))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {:?}: {}", self.path, e))?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
            }
        }

        let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write settings file {:?}", self.path))?;

        Ok(())
    }
}
