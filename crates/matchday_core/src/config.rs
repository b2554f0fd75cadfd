use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration, loadable from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Player roster CSV.
    pub roster_path: String,
    /// SQLite results database.
    pub database_path: String,
    /// Players dealt to each side.
    pub team_size: usize,
    /// Pause between simulated rounds, in milliseconds.
    pub round_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            roster_path: "data/players.csv".to_string(),
            database_path: "data/results.db".to_string(),
            team_size: 10,
            round_delay_ms: 500,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SimError::Config(format!("failed to read config file {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| SimError::Config(format!("failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SimError::Config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
