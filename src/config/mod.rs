use crate::core::audit::DEFAULT_AUDIT_CAPACITY;
use crate::core::state::SeedEmployee;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_audit_capacity")]
    pub audit_log_capacity: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_seed_roster")]
    pub seed_roster: Vec<SeedEmployee>,
}

fn default_audit_capacity() -> usize {
    DEFAULT_AUDIT_CAPACITY
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_seed_roster() -> Vec<SeedEmployee> {
    [
        ("emp_001", "John Doe"),
        ("emp_002", "Jane Smith"),
        ("emp_003", "Michael Lee"),
    ]
    .into_iter()
    .map(|(id, name)| SeedEmployee {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            audit_log_capacity: default_audit_capacity(),
            log_level: default_log_level(),
            seed_roster: default_seed_roster(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("scpayroll")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".scpayroll")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("scpayroll.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("scpayroll.sqlite")
    }

    /// Load configuration from file, or return defaults if missing or unreadable
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Config::default();
        }

        match fs::read_to_string(&path)
            .map_err(AppError::from)
            .and_then(|content| {
                serde_yaml::from_str::<Config>(&content).map_err(|e| AppError::Config(e.to_string()))
            }) {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!(
                    "Ignoring configuration file {}: {e}",
                    path.display()
                ));
                Config::default()
            }
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Create the config directory and write the config file (skipped in test mode).
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        let mut config = Config::default();
        if let Some(name) = custom_db {
            config.database = crate::utils::path::expand_tilde(&name)
                .to_string_lossy()
                .to_string();
        }

        if !is_test {
            fs::create_dir_all(&dir)?;
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        if let Some(parent) = PathBuf::from(&config.database).parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
