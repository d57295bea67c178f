use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but its value cannot be used.
    ///
    /// Raised at startup, for example when `PORT` is not a valid port number.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the environment variable.
        name: String,
        /// The rejected value.
        value: String,
    },
}
