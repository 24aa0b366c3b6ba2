//! Application configuration.
//!
//! Settings are stored as JSON in the platform data directory. The only
//! setting today is an optional database file override; the
//! `DATABASE_PATH` environment variable (including via `.env`) takes
//! precedence over it, and the platform default location is used when
//! neither is set.

use crate::db::db::DB_FILE_NAME;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Absolute path of the SQLite database file, when overridden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,
}

impl Config {
    /// Loads the saved configuration, falling back to defaults when no
    /// configuration file exists yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Interactive setup: prompts for the database location and saves
    /// the result.
    pub fn init() -> Result<Self> {
        let current = Self::read()?;
        let default_path = match &current.db_path {
            Some(path) => path.display().to_string(),
            None => DataStorage::new().get_path(DB_FILE_NAME)?.display().to_string(),
        };

        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDbPath.to_string())
            .default(default_path)
            .interact_text()?;

        let config = Config {
            db_path: Some(PathBuf::from(input)),
        };
        config.save()?;
        msg_success!(Message::ConfigSaved);

        Ok(config)
    }
}
