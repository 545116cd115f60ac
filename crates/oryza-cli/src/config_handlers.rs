//! Handlers for `oryza config` subcommands.
//!
//! Output goes to the writer passed in so the handlers can be exercised
//! without a terminal.

use std::io::Write;
use std::path::PathBuf;

use crate::cli::ConfigAction;
use crate::config::OryzaConfig;
use crate::{Error, Result};

/// Runs one config subcommand.
pub fn handle_config_command<W: Write>(
    config_path: Option<&str>,
    action: &ConfigAction,
    out: &mut W,
) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path, out),
        ConfigAction::Show => cmd_config_show(config_path, out),
        ConfigAction::Get { key } => cmd_config_get(config_path, key, out),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), *force, out),
    }
}

/// Prints the config file that would be read.
pub fn cmd_config_path<W: Write>(config_path: Option<&str>, out: &mut W) -> Result<()> {
    let path = OryzaConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;
    writeln!(out, "{}", path.display())?;
    if !path.exists() {
        tracing::info!(
            path = %path.display(),
            "Config file does not exist; run `oryza config init` to create it"
        );
    }
    Ok(())
}

/// Prints the effective configuration, defaults included.
pub fn cmd_config_show<W: Write>(config_path: Option<&str>, out: &mut W) -> Result<()> {
    let config = OryzaConfig::load(config_path)?;
    write!(out, "{}", config.to_toml_string()?)?;
    Ok(())
}

/// Prints one value by dotted key.
pub fn cmd_config_get<W: Write>(config_path: Option<&str>, key: &str, out: &mut W) -> Result<()> {
    let config = OryzaConfig::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    let found = get_nested_value(&value, key)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))?;
    writeln!(out, "{}", format_toml_value(found))?;
    Ok(())
}

/// Writes the default configuration, refusing to replace a file unless
/// `force`.
pub fn cmd_config_init<W: Write>(file: Option<&str>, force: bool, out: &mut W) -> Result<()> {
    let target = file
        .map(PathBuf::from)
        .or_else(OryzaConfig::default_config_path)
        .ok_or_else(|| Error::config("Could not determine config directory; pass a file"))?;

    OryzaConfig::default().write_to(&target, force)?;
    writeln!(out, "Wrote {}", target.display())?;
    Ok(())
}

/// Walks a dotted key through nested tables.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Renders a TOML value for the terminal: strings without quotes, tables
/// as a TOML document, anything else inline.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Table(table) => {
            toml::to_string_pretty(table).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}
