use thiserror::Error;

#[derive(Error, Debug)]
pub enum CondensateError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CondensateError>;
