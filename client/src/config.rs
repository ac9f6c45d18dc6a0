use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use common::config::{Validate, load_yaml_config, save_yaml_config};
use common::engine::tictactoe::Difficulty;

use crate::theme::Theme;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";
const MAX_BOT_DELAY_MS: u64 = 10_000;

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub theme: Theme,
    pub difficulty: Difficulty,
    pub bot_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            difficulty: Difficulty::Unbeatable,
            bot_delay_ms: 500,
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!("bot_delay_ms must not exceed {}", MAX_BOT_DELAY_MS));
        }
        Ok(())
    }
}

impl ClientConfig {
    pub fn load(path: &Path) -> Result<Self, String> {
        load_yaml_config(path)
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        save_yaml_config(path, self)
    }
}
