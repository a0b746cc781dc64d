use crate::models::settings::PickerOptions;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const OPTIONS_FILE: &str = "options.toml";

/// Loads and saves picker options as TOML
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to `options.toml` in the platform config directory
    pub fn with_default_path() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "Ken24T", "DateRangePicker")
            .context("Failed to resolve the configuration directory")?;
        Ok(dirs.config_dir().join(OPTIONS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load options, falling back to defaults when the file does not exist.
    ///
    /// Inverted bounds are accepted with a warning.
    pub fn load(&self) -> Result<PickerOptions> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::warn!("No options file at {:?}, using defaults", self.path);
                return Ok(PickerOptions::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read options file {:?}", self.path))
            }
        };
        let options = Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse options file {:?}", self.path))?;

        if let Err(e) = options.validate() {
            log::warn!("Options file {:?}: {}", self.path, e);
        }
        log::info!("Loaded picker options from {:?}", self.path);
        Ok(options)
    }

    /// Write options, creating the parent directory if needed
    pub fn save(&self, options: &PickerOptions) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {:?}", parent))?;
            }
        }

        let contents = Self::to_toml(options)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write options file {:?}", self.path))?;
        log::info!("Saved picker options to {:?}", self.path);
        Ok(())
    }

    pub fn from_toml(contents: &str) -> Result<PickerOptions> {
        toml::from_str(contents).context("Invalid options TOML")
    }

    pub fn to_toml(options: &PickerOptions) -> Result<String> {
        toml::to_string_pretty(options).context("Failed to serialize options")
    }

    /// Options as JSON, for hosts that configure the picker over a JSON boundary
    pub fn to_json(options: &PickerOptions) -> Result<String> {
        serde_json::to_string_pretty(options).context("Failed to serialize options as JSON")
    }

    pub fn from_json(contents: &str) -> Result<PickerOptions> {
        serde_json::from_str(contents).context("Invalid options JSON")
    }
}
