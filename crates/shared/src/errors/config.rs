use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no such variable in env: {0}")]
    MissingVariable(String),

    #[error("{name} has an invalid value '{value}'")]
    InvalidValue { name: String, value: String },
}
