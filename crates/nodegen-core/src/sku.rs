use regex::Regex;
use std::sync::OnceLock;

/// VM size families that expose Intel SGX enclaves.
///
/// Each entry is an anchored, case-sensitive pattern over the full size name.
const SGX_SKU_FAMILIES: &[&str] = &[
    // DC-series v1
    r"^Standard_DC\d+s$",
    // DCsv2
    r"^Standard_DC\d+s?_v2$",
    // DCsv3 / DCdsv3
    r"^Standard_DC\d+d?s_v3$",
];

static SGX_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

fn get_sgx_patterns() -> &'static Vec<Regex> {
    SGX_PATTERNS.get_or_init(|| {
        SGX_SKU_FAMILIES
            .iter()
            .filter_map(|p| Regex::new(p).ok())
            .collect()
    })
}

/// Trait for VM SKU classification - allows for different implementations
pub trait SkuClassifier {
    fn is_sgx_enabled(&self, vm_size: &str) -> bool;
}

/// Default classifier backed by [`SGX_SKU_FAMILIES`]
pub struct DefaultSkuClassifier;

impl SkuClassifier for DefaultSkuClassifier {
    fn is_sgx_enabled(&self, vm_size: &str) -> bool {
        let enabled = get_sgx_patterns().iter().any(|re| re.is_match(vm_size));
        log::debug!("VM size {:?} sgx_enabled={}", vm_size, enabled);
        enabled
    }
}

pub fn is_sgx_enabled_sku(vm_size: &str) -> bool {
    DefaultSkuClassifier.is_sgx_enabled(vm_size)
}
