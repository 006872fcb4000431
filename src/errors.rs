use thiserror::Error;

#[derive(Error, Debug)]
pub enum NodegenError {
    #[error(transparent)]
    Core(#[from] nodegen_core::DataModelError),

    #[error(transparent)]
    Utils(#[from] nodegen_utils::UtilsError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Could not find home directory")]
    NoHomeDirectory,

    #[error("INI parsing error: {0}")]
    IniError(String),
}

pub type Result<T> = std::result::Result<T, NodegenError>;
