//! Configuration for the `oryza` binary.
//!
//! Resolution order for the config file: `--config` / `ORYZA_CONFIG`, then
//! `<config_dir>/oryza/config.toml`. A missing default file means built-in
//! defaults; a missing explicit file is an error.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use oryza_app::AppOptions;
use oryza_app::options::DEFAULT_DATE_FORMAT;
use oryza_core::ContactInfo;
use oryza_core::types::{DEFAULT_ADDRESS, DEFAULT_PHONE};

use crate::{Error, Result};

/// Name used for config and data directories.
pub const PROJECT_NAME: &str = "oryza";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OryzaConfig {
    /// Store location and key naming
    pub store: StoreConfig,
    /// Order settings
    pub orders: OrdersConfig,
    /// Placeholder contact details
    pub contact: ContactConfig,
}

/// `[store]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store file; defaults to `<data_dir>/oryza/store.json`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Prefix prepended to every store key
    pub key_prefix: String,
}

/// `[orders]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrdersConfig {
    /// chrono format string for order dates
    pub date_format: String,
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// `[contact]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Phone shown until one is saved
    pub default_phone: String,
    /// Address shown until one is saved
    pub default_address: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            default_phone: DEFAULT_PHONE.to_string(),
            default_address: DEFAULT_ADDRESS.to_string(),
        }
    }
}

impl OryzaConfig {
    /// Platform default config file location.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(PROJECT_NAME).join("config.toml"))
    }

    /// The config file that would be read for `explicit`.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Loads configuration, falling back to defaults when no file exists at
    /// the default location.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit) else {
            tracing::debug!("No config directory on this platform, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            if explicit.is_some() {
                return Err(Error::config(format!(
                    "Config file not found at {}",
                    path.display()
                )));
            }
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    /// Parses a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        config.app_options().validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Serializes to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Writes this configuration to `path`, creating parent directories.
    ///
    /// An existing file is only replaced when `overwrite` is set.
    pub fn write_to(&self, path: &Path, overwrite: bool) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
        }

        let body = format!("# {PROJECT_NAME} configuration\n\n{}", self.to_toml_string()?);
        let mut options = OpenOptions::new();
        options.write(true);
        if overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let mut file = options.open(path).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => Error::config(format!(
                "{} already exists; pass --force to replace it",
                path.display()
            )),
            _ => Error::io_with_path(e, path),
        })?;
        file.write_all(body.as_bytes())
            .map_err(|e| Error::io_with_path(e, path))?;

        tracing::debug!(path = %path.display(), overwrite, "Wrote config");
        Ok(())
    }

    /// The store file to open.
    pub fn store_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.store.path {
            return Ok(path.clone());
        }
        dirs::data_dir()
            .map(|d| d.join(PROJECT_NAME).join("store.json"))
            .ok_or_else(|| Error::config("Could not determine data directory; set store.path"))
    }

    /// Controller options derived from this configuration.
    pub fn app_options(&self) -> AppOptions {
        AppOptions::default()
            .with_date_format(self.orders.date_format.clone())
            .with_default_contact(ContactInfo::new(
                self.contact.default_phone.clone(),
                self.contact.default_address.clone(),
            ))
    }
}
