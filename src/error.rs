use thiserror::Error;

#[derive(Error, Debug)]
pub enum GutscoreError {
    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("unsupported input format: {0} (expected .toml or .json)")]
    UnsupportedInputFormat(String),

    #[error("input parse error: {0}")]
    InputParse(String),

    #[error("unknown factor: {0}")]
    UnknownFactor(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GutscoreError>;
