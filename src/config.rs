use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

pub const DEFAULT_DICTIONARY_URL: &str = "http://api.pearson.com/v2/dictionaries/entries";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Length of a game in seconds
    pub duration_secs: u32,
    pub dictionary_url: String,
    /// When set, words are checked against this word list instead of `dictionary_url`
    pub dictionary_path: Option<String>,
    pub lookup_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the config from any source of variables, e.g. a map in tests
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server = ServerConfig {
            host: var("HOST")
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            frontend_dir: var("FRONTEND_DIR")
                .unwrap_or_else(|| "./frontend".to_string()),
        };

        let game = GameConfig {
            duration_secs: var("GAME_DURATION")
                .unwrap_or_else(|| "60".to_string())
                .parse()
                .context("GAME_DURATION must be a number of seconds")?,
            dictionary_url: var("DICTIONARY_URL")
                .unwrap_or_else(|| DEFAULT_DICTIONARY_URL.to_string()),
            dictionary_path: var("DICTIONARY_PATH")
                .filter(|path| !path.trim().is_empty()),
            lookup_timeout_secs: var("LOOKUP_TIMEOUT_SECS")
                .unwrap_or_else(|| "10".to_string())
                .parse()
                .context("LOOKUP_TIMEOUT_SECS must be a number")?,
        };

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            duration_secs: 60,
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
            dictionary_path: None,
            lookup_timeout_secs: 10,
        }
    }
}
