use thiserror::Error;

/// Errors for nodegen-utils
#[derive(Error, Debug)]
pub enum UtilsError {
    #[error(transparent)]
    Url(#[from] UrlFormatError),
}

/// Artifact URLs whose shape does not identify a component
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlFormatError {
    #[error("download file image URL is not in the expected format: {0}")]
    DownloadFile(String),

    #[error("container image component URL is not in the expected format: {0}")]
    ContainerImage(String),
}

pub type Result<T> = std::result::Result<T, UtilsError>;
