use std::env;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MATCH_ROUNDS: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),

    #[error("MATCH_ROUNDS must be a positive integer, got {0:?}")]
    InvalidRounds(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Rounds in every new match
    pub total_rounds: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("PORT").ok().as_deref(),
            env::var("MATCH_ROUNDS").ok().as_deref(),
        )
    }

    fn from_vars(port: Option<&str>, rounds: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?,
            None => DEFAULT_PORT,
        };

        let total_rounds = match rounds {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(rounds) if rounds > 0 => rounds,
                _ => return Err(ConfigError::InvalidRounds(raw.to_string())),
            },
            None => DEFAULT_MATCH_ROUNDS,
        };

        Ok(Self { port, total_rounds })
    }

    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
