use crate::errors::{ConfigError, Result};
use std::path::{Path, PathBuf};

/// Indentation used by `nodegen indent` when neither the flag nor the config sets one
pub const DEFAULT_INDENT: usize = 4;

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV_VAR: &str = "NODEGEN_CONFIG";

/// Read-only view of the nodegen INI configuration
#[derive(Debug, Clone)]
pub struct Config {
    config_path: PathBuf,
    data: ini::Ini,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. The default `~/.nodegen/config.ini` is
    /// optional and falls back to built-in defaults when absent.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let (config_path, required) = match explicit_path {
            Some(path) => (path.to_path_buf(), true),
            None => (default_config_path()?, false),
        };

        let data = if config_path.exists() {
            log::debug!("loading config from {}", config_path.display());
            ini::Ini::load_from_file(&config_path)
                .map_err(|e| ConfigError::IniError(e.to_string()))?
        } else if required {
            return Err(ConfigError::NotFound(config_path.display().to_string()).into());
        } else {
            ini::Ini::new()
        };

        Ok(Config { config_path, data })
    }

    /// Build a config from INI text, attributed to `config_path`
    pub fn from_ini_str(content: &str, config_path: impl Into<PathBuf>) -> Result<Self> {
        let data =
            ini::Ini::load_from_str(content).map_err(|e| ConfigError::IniError(e.to_string()))?;
        Ok(Config {
            config_path: config_path.into(),
            data,
        })
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get a configuration value
    pub fn get_value(&self, section: &str, key: &str) -> Option<&str> {
        self.data.get_from(Some(section), key)
    }

    /// Spaces used by the indent command, `[render] indent`
    pub fn indent(&self) -> Result<usize> {
        match self.get_value("render", "indent") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ConfigError::InvalidValue {
                    field: "render.indent".to_string(),
                    value: raw.to_string(),
                }
                .into()
            }),
            None => Ok(DEFAULT_INDENT),
        }
    }

    /// Log filter directive, `[log] level`
    pub fn log_level(&self) -> Option<&str> {
        self.get_value("log", "level")
            .map(str::trim)
            .filter(|level| !level.is_empty())
    }

    /// All `section.key = value` entries in file order
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries = Vec::new();
        for (section, properties) in self.data.iter() {
            for (key, value) in properties.iter() {
                let name = match section {
                    Some(section) => format!("{}.{}", section, key),
                    None => key.to_string(),
                };
                entries.push((name, value.to_string()));
            }
        }
        entries
    }
}

/// Get configuration file path
pub fn default_config_path() -> Result<PathBuf> {
    let home_dir = home::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(home_dir.join(".nodegen").join("config.ini"))
}
