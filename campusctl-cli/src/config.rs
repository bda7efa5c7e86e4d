use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use campusctl_core::Catalog;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::render::CliFormat;

static DEFAULT_CONFIG_PATH: Lazy<PathBuf> = Lazy::new(|| {
    dirs::home_dir()
        .map(|home| home.join(".campusctl").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("campusctl.toml"))
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Md,
    Json,
}

impl OutputFormat {
    pub fn from_cli(value: CliFormat) -> Self {
        match value {
            CliFormat::Md => Self::Md,
            CliFormat::Json => Self::Json,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub format: OutputFormat,
    pub pretty_json_indent: usize,
    #[allow(dead_code)]
    pub config_path: PathBuf,
}

impl Config {
    pub fn load(provided: Option<&Path>) -> Result<Self> {
        let defaults = RawConfig::default();
        let mut resolved_path = DEFAULT_CONFIG_PATH.clone();
        let loaded = if let Some(explicit) = provided {
            resolved_path = explicit.to_path_buf();
            if explicit.exists() {
                Some(load_raw_config(explicit)?)
            } else {
                bail!("config file {} does not exist", explicit.display());
            }
        } else if DEFAULT_CONFIG_PATH.exists() {
            Some(load_raw_config(&DEFAULT_CONFIG_PATH)?)
        } else {
            None
        };

        let merged = defaults.merge(loaded.unwrap_or_default());

        let format = merged.resolve_format()?;
        let data_dir = merged.data_dir.map(PathBuf::from);
        let pretty_json_indent = merged.pretty_json_indent.unwrap_or(2usize);

        Ok(Self {
            data_dir,
            format,
            pretty_json_indent,
            config_path: resolved_path,
        })
    }

    /// CLI flags override whatever the file provided.
    pub fn apply_cli(&mut self, data_dir: Option<&Path>) {
        if let Some(dir) = data_dir {
            self.data_dir = Some(dir.to_path_buf());
        }
    }

    /// Per-command format flag wins over the configured default.
    pub fn format_for(&self, flag: Option<CliFormat>) -> OutputFormat {
        flag.map(OutputFormat::from_cli).unwrap_or(self.format)
    }

    /// The record collections: file-backed when a data dir is set, builtin otherwise.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.data_dir {
            Some(dir) => Catalog::load(dir)
                .with_context(|| format!("failed to load records from {}", dir.display())),
            None => Ok(Catalog::builtin()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    data_dir: Option<String>,
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    pretty_json_indent: Option<usize>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            format: Some("md".to_string()),
            pretty_json_indent: Some(2),
        }
    }
}

impl RawConfig {
    fn merge(mut self, mut other: RawConfig) -> RawConfig {
        if other.data_dir.is_some() {
            self.data_dir = other.data_dir.take();
        }
        if other.format.is_some() {
            self.format = other.format.take();
        }
        if other.pretty_json_indent.is_some() {
            self.pretty_json_indent = other.pretty_json_indent.take();
        }
        self
    }

    fn resolve_format(&self) -> Result<OutputFormat> {
        let Some(raw) = self.format.as_deref() else {
            return Ok(OutputFormat::Md);
        };
        match raw.trim().to_lowercase().as_str() {
            "md" | "markdown" => Ok(OutputFormat::Md),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unsupported format '{other}'"),
        }
    }
}

fn load_raw_config(path: &Path) -> Result<RawConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = toml::from_str::<RawConfig>(&data)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_to_markdown() {
        let merged = RawConfig::default().merge(RawConfig {
            data_dir: None,
            format: None,
            pretty_json_indent: None,
        });
        assert_eq!(merged.resolve_format().unwrap(), OutputFormat::Md);
    }

    #[test]
    fn file_values_override_defaults() {
        let file: RawConfig = toml::from_str(
            r#"
            data_dir = "/srv/portal"
            format = "json"
            pretty_json_indent = 4
            "#,
        )
        .unwrap();
        let merged = RawConfig::default().merge(file);
        assert_eq!(merged.data_dir.as_deref(), Some("/srv/portal"));
        assert_eq!(merged.resolve_format().unwrap(), OutputFormat::Json);
        assert_eq!(merged.pretty_json_indent, Some(4));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let raw = RawConfig {
            data_dir: None,
            format: Some("yaml".to_string()),
            pretty_json_indent: None,
        };
        assert!(raw.resolve_format().is_err());
    }
}
