use crate::error::SettingsError;
use crate::fetch::DEFAULT_ENDPOINT;
use crate::theme::ThemeVariant;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

pub const CONFIG_FILE: &str = "config.toml";
pub const ENV_PREFIX: &str = "MEMEGRID_";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    pub endpoint: String,
    pub theme: ThemeVariant,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            theme: ThemeVariant::default(),
        }
    }
}

impl Settings {
    /// Load from `config.toml`, falling back to defaults if it can't be read.
    pub fn new() -> Self {
        match Self::load(CONFIG_FILE) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(error = %err, "using default settings");
                Self::default()
            }
        }
    }

    /// Defaults, then the TOML file at `path` (if present), then `MEMEGRID_*` env vars.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        Self::file_layer(path.as_ref())
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| SettingsError::Extract(Box::new(e)))
    }

    fn file_layer(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Settings::default())).merge(Toml::file(path))
    }

    /// Persist the current theme to `config.toml`.
    pub fn save_theme(&self) -> Result<(), SettingsError> {
        self.save_theme_to(CONFIG_FILE)
    }

    /// Rewrite the file at `path` with only the theme changed.
    ///
    /// Env overrides live in `self` but must not leak into the file.
    pub fn save_theme_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let mut on_disk: Settings = Self::file_layer(path)
            .extract()
            .map_err(|e| SettingsError::Extract(Box::new(e)))?;
        on_disk.theme = self.theme;
        on_disk.save_to(path)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }
}
