use thiserror::Error;

/// Configuration errors raised while reading the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `DB_PORT` was set but did not parse as a port number.
    #[error("Invalid DB_PORT value: {0:?}")]
    InvalidPort(String),
}
