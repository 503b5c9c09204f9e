use crate::server::error::config::ConfigError;

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_PASSWORD: &str = "postgres";
const DEFAULT_DB_NAME: &str = "interstellar_db";

pub struct Config {
    pub database_url: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `DATABASE_URL` wins when set; otherwise the URL is composed from the
    /// discrete `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`
    /// variables with local-development defaults. Hosted Postgres providers
    /// require TLS, so `sslmode=require` is appended unless
    /// `DATABASE_SSL=disable` opts out.
    pub fn from_env() -> Result<Self, ConfigError> {
        let ssl_disabled = std::env::var("DATABASE_SSL")
            .map(|v| v.eq_ignore_ascii_case("disable"))
            .unwrap_or(false);

        if let Ok(url) = std::env::var("DATABASE_URL") {
            let database_url = if ssl_disabled {
                url
            } else if url.contains('?') {
                format!("{url}&sslmode=require")
            } else {
                format!("{url}?sslmode=require")
            };

            return Ok(Self { database_url });
        }

        let database_url = {
            let host = std::env::var("DB_HOST").unwrap_or_else(|_| DEFAULT_DB_HOST.into());
            let port = match std::env::var("DB_PORT") {
                Ok(raw) => raw
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidPort(raw))?,
                Err(_) => DEFAULT_DB_PORT,
            };
            let user = std::env::var("DB_USER").unwrap_or_else(|_| DEFAULT_DB_USER.into());
            let password =
                std::env::var("DB_PASSWORD").unwrap_or_else(|_| DEFAULT_DB_PASSWORD.into());
            let name = std::env::var("DB_NAME").unwrap_or_else(|_| DEFAULT_DB_NAME.into());

            format!("postgres://{user}:{password}@{host}:{port}/{name}")
        };

        Ok(Self { database_url })
    }
}
