use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the config file, or the effective defaults when none was written.
    pub fn print(cfg: &Config) -> AppResult<()> {
        let path = Config::config_file();
        let content = if path.exists() {
            fs::read_to_string(&path)?
        } else {
            cfg.to_yaml()?
        };
        println!("{}", content);
        Ok(())
    }

    pub fn edit(editor: &Option<String>) -> AppResult<()> {
        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| "nano".into());

        Command::new(ed)
            .arg(Config::config_file())
            .status()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(())
    }
}
