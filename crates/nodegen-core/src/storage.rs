use crate::errors::{DataModelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability letters in a VM size that indicate premium storage support,
/// matched case-insensitively against the capability segment.
const PREMIUM_CAPABILITY_MARKERS: &[char] = &['s'];

/// Managed disk performance tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageTier {
    #[serde(rename = "Premium_LRS")]
    PremiumLrs,
    #[serde(rename = "Standard_LRS")]
    StandardLrs,
}

impl StorageTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageTier::PremiumLrs => "Premium_LRS",
            StorageTier::StandardLrs => "Standard_LRS",
        }
    }

    pub fn is_premium(&self) -> bool {
        matches!(self, StorageTier::PremiumLrs)
    }
}

impl fmt::Display for StorageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for mapping VM sizes to storage tiers
pub trait StorageTierResolver {
    fn resolve_tier(&self, vm_size: &str) -> Result<StorageTier>;
}

/// Resolves tiers from the capability segment of `<Tier>_<Capability>[_<Version>]` sizes
pub struct DefaultStorageTierResolver;

impl StorageTierResolver for DefaultStorageTierResolver {
    fn resolve_tier(&self, vm_size: &str) -> Result<StorageTier> {
        let capability = match vm_size.split('_').nth(1) {
            Some(segment) if !segment.is_empty() => segment,
            _ => {
                log::debug!("VM size {:?} has no capability segment", vm_size);
                return Err(DataModelError::InvalidVmSize(vm_size.to_string()));
            }
        };

        let premium = capability
            .to_lowercase()
            .contains(PREMIUM_CAPABILITY_MARKERS);

        Ok(if premium {
            StorageTier::PremiumLrs
        } else {
            StorageTier::StandardLrs
        })
    }
}

pub fn get_storage_account_type(vm_size: &str) -> Result<StorageTier> {
    DefaultStorageTierResolver.resolve_tier(vm_size)
}
