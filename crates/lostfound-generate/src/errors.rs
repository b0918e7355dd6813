use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("schema error: {0}")]
    Schema(#[from] lostfound_core::Error),
    #[error("missing parent rows: {0}")]
    MissingParent(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config file error: {0}")]
    Config(#[from] toml::de::Error),
}
