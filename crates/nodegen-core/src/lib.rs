//! # Nodegen Core
//!
//! Core domain rules for cluster node configuration generation.
//!
//! This crate contains pure business logic with no I/O dependencies:
//! - DNS prefix validation
//! - VM SKU classification (SGX capability)
//! - VM size to managed disk tier resolution
//! - Cluster profile model and validation
//!
//! Every function is a deterministic mapping from input to output or a
//! typed [`DataModelError`], safe to call from any thread.

pub mod dns;
pub mod errors;
pub mod models;
pub mod sku;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use dns::{validate_dns_prefix, MAX_DNS_PREFIX_LENGTH, MIN_DNS_PREFIX_LENGTH};
pub use errors::{DataModelError, Result};
pub use models::{AgentPoolProfile, ClusterProfile, PoolStorageSummary};
pub use sku::{is_sgx_enabled_sku, DefaultSkuClassifier, SkuClassifier};
pub use storage::{
    get_storage_account_type, DefaultStorageTierResolver, StorageTier, StorageTierResolver,
};
pub use utils::is_non_empty;
