//! Configuration management for the taskpad application.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory. Every field is optional so older config files keep working
//! when new settings are introduced; accessors supply the defaults.

use super::data_storage::DataStorage;
use super::task::SortKey;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    /// Sort order used by `list` when no `--sort` flag is given.
    pub default_sort: Option<SortKey>,
    /// Whether `clear` asks for confirmation before deleting everything.
    pub confirm_clear: Option<bool>,
}

impl Config {
    /// Loads the configuration file, falling back to defaults when absent.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let file = File::open(path)?;
        serde_json::from_reader(file).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|_| msg_error_anyhow!(Message::ConfigSaveError))
    }

    /// Interactive configuration wizard, seeded with the current settings.
    pub fn init() -> Result<Self> {
        let current = match Config::read() {
            Ok(config) => config,
            Err(_) => {
                // An unreadable config file should not block reconfiguration.
                msg_warning!(Message::ConfigParseError);
                Config::default()
            }
        };
        let keys = [SortKey::Created, SortKey::Priority, SortKey::Name];

        let default_index = keys.iter().position(|k| *k == current.sort_key()).unwrap_or(0);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultSort.to_string())
            .items(&["created", "priority", "name"])
            .default(default_index)
            .interact()?;

        let confirm_clear = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptConfirmClear.to_string())
            .default(current.confirm_before_clear())
            .interact()?;

        Ok(Config {
            default_sort: Some(keys[selection]),
            confirm_clear: Some(confirm_clear),
        })
    }

    pub fn sort_key(&self) -> SortKey {
        self.default_sort.unwrap_or_default()
    }

    pub fn confirm_before_clear(&self) -> bool {
        self.confirm_clear.unwrap_or(true)
    }
}
