pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod errors;
pub mod logging;

// Re-export main public types
pub use config::Config;
pub use errors::{ConfigError, NodegenError, Result};
