use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

pub struct Config {
    /// Connection string of the document store. The server still starts without one.
    pub database_url: Option<String>,
    /// Name of the database, only reported by the diagnostic endpoint.
    pub database_name: Option<String>,

    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: non_empty_var("DATABASE_URL"),
            database_name: non_empty_var("DATABASE_NAME"),
            host: non_empty_var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
