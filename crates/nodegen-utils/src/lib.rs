//! # Nodegen Utils
//!
//! String shaping and artifact URL parsing used when rendering node
//! configuration templates.

pub mod errors;
pub mod formatters;
pub mod parsers;

// Re-export common types for convenience
pub use errors::*;
pub use formatters::*;
pub use parsers::*;
