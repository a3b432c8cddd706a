use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Malformed dice formula: {0}")]
    MalformedFormula(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
