use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_CATALOG_URL;
use crate::error::{JfError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Resolve configuration: defaults, then a config file (the explicit
    /// path, `JAPFLIX_CONFIG`, or the global one), then environment.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("JAPFLIX_CONFIG").ok().map(PathBuf::from));

        let patch = match explicit {
            Some(path) => Self::load_patch(&path)?,
            None => Self::load_global()?,
        };
        if let Some(patch) = patch {
            config.merge_patch(patch);
        }

        config.apply_env_overrides(|key| std::env::var(key).ok())?;

        Ok(config)
    }

    /// Global config at `<config dir>/japflix/config.toml`.
    #[must_use]
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("japflix/config.toml"))
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match Self::global_path() {
            Some(path) => Self::load_patch(&path),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| JfError::Config(format!("read config {}: {err}", path.display())))?;
        Self::parse_patch(&raw)
            .map(Some)
            .map_err(|err| JfError::Config(format!("parse config {}: {err}", path.display())))
    }

    fn parse_patch(raw: &str) -> std::result::Result<ConfigPatch, toml::de::Error> {
        toml::from_str(raw)
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.catalog {
            self.catalog.merge(patch);
        }
        if let Some(patch) = patch.display {
            self.display.merge(patch);
        }
    }

    /// Apply `JAPFLIX_*` overrides read through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("JAPFLIX_CATALOG_URL") {
            self.catalog.url = value;
            // A URL from the environment beats a file from a config file.
            self.catalog.file = None;
        }
        if let Some(value) = lookup("JAPFLIX_CATALOG_FILE") {
            self.catalog.file = Some(PathBuf::from(value));
        }
        if let Some(value) = lookup("JAPFLIX_ASCII_STARS") {
            self.display.ascii_stars = parse_bool("JAPFLIX_ASCII_STARS", &value)?;
        }

        Ok(())
    }

    /// Command-line flags win over files and environment.
    pub fn apply_cli_overrides(&mut self, url: Option<&str>, file: Option<&Path>) {
        if let Some(url) = url {
            self.catalog.url = url.to_string();
            // An explicit URL on the command line beats a configured file.
            self.catalog.file = None;
        }
        if let Some(file) = file {
            self.catalog.file = Some(file.to_path_buf());
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Where to GET the catalog JSON from.
    #[serde(default = "default_catalog_url")]
    pub url: String,
    /// Read the catalog from this file instead of the network.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            file: None,
        }
    }
}

impl CatalogConfig {
    fn merge(&mut self, patch: CatalogPatch) {
        if let Some(value) = patch.url {
            self.url = value;
        }
        if let Some(value) = patch.file {
            self.file = Some(value);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Draw ratings with `*+.` instead of star glyphs.
    #[serde(default)]
    pub ascii_stars: bool,
}

impl DisplayConfig {
    fn merge(&mut self, patch: DisplayPatch) {
        if let Some(value) = patch.ascii_stars {
            self.ascii_stars = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigPatch {
    pub catalog: Option<CatalogPatch>,
    pub display: Option<DisplayPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogPatch {
    pub url: Option<String>,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DisplayPatch {
    pub ascii_stars: Option<bool>,
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(JfError::Config(format!("invalid {key} value {other}"))),
    }
}
