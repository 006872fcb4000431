use thiserror::Error;

/// Core domain errors - no I/O dependencies
#[derive(Error, Debug)]
pub enum DataModelError {
    #[error("DNSPrefix '{prefix}' is invalid. The DNSPrefix must contain between 3 and 45 characters and can contain only letters, numbers, and hyphens.  It must start with a letter and must end with a letter or a number. (length was {length})")]
    InvalidDnsPrefix { prefix: String, length: usize },

    #[error("Invalid sizeName: {0}")]
    InvalidVmSize(String),

    #[error("Invalid agent pool '{pool}': {reason}")]
    InvalidAgentPool { pool: String, reason: String },

    #[error("Domain rule violation: {0}")]
    DomainRuleViolation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DataModelError>;
