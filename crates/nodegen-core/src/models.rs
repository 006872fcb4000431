use crate::dns::validate_dns_prefix;
use crate::errors::{DataModelError, Result};
use crate::sku::is_sgx_enabled_sku;
use crate::storage::{get_storage_account_type, StorageTier};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AgentPoolProfile {
    pub name: String,
    #[serde(rename = "vmSize")]
    pub vm_size: String,
    #[serde(default = "default_pool_count")]
    pub count: u32,
}

fn default_pool_count() -> u32 {
    1
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ClusterProfile {
    #[serde(rename = "dnsPrefix")]
    pub dns_prefix: String,
    #[serde(rename = "agentPools", default)]
    pub agent_pools: Vec<AgentPoolProfile>,
}

/// Storage and enclave capabilities derived for one agent pool
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PoolStorageSummary {
    pub name: String,
    pub vm_size: String,
    pub storage_tier: StorageTier,
    pub sgx_enabled: bool,
}

impl ClusterProfile {
    /// Parse a profile from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the profile against the cluster rules.
    ///
    /// Stops at the first violation: the DNS prefix first, then the pools in
    /// declaration order.
    pub fn validate(&self) -> Result<()> {
        validate_dns_prefix(&self.dns_prefix)?;

        if self.agent_pools.is_empty() {
            return Err(DataModelError::DomainRuleViolation(
                "at least one agent pool is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for pool in &self.agent_pools {
            pool.validate()?;
            if !seen.insert(pool.name.as_str()) {
                return Err(DataModelError::InvalidAgentPool {
                    pool: pool.name.clone(),
                    reason: "duplicate pool name".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn storage_summary(&self) -> Result<Vec<PoolStorageSummary>> {
        self.agent_pools.iter().map(AgentPoolProfile::summary).collect()
    }
}

impl AgentPoolProfile {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DataModelError::InvalidAgentPool {
                pool: self.name.clone(),
                reason: "name cannot be empty".to_string(),
            });
        }

        if self.count == 0 {
            return Err(DataModelError::InvalidAgentPool {
                pool: self.name.clone(),
                reason: "count must be at least 1".to_string(),
            });
        }

        get_storage_account_type(&self.vm_size)?;
        Ok(())
    }

    pub fn storage_tier(&self) -> Result<StorageTier> {
        get_storage_account_type(&self.vm_size)
    }

    pub fn is_sgx_enabled(&self) -> bool {
        is_sgx_enabled_sku(&self.vm_size)
    }

    fn summary(&self) -> Result<PoolStorageSummary> {
        Ok(PoolStorageSummary {
            name: self.name.clone(),
            vm_size: self.vm_size.clone(),
            storage_tier: self.storage_tier()?,
            sgx_enabled: self.is_sgx_enabled(),
        })
    }
}
