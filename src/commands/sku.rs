use crate::display::display_fields;
use crate::errors::Result;
use clap::Args;
use nodegen_core::{get_storage_account_type, is_sgx_enabled_sku};
use serde::Serialize;

#[derive(Args)]
pub struct SkuArgs {
    /// VM size name (e.g., Standard_DS2_v2)
    pub vm_size: String,

    /// Print the classification as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SkuReport<'a> {
    vm_size: &'a str,
    storage_tier: &'static str,
    sgx_enabled: bool,
}

pub fn handle_sku(args: SkuArgs) -> Result<()> {
    let tier = get_storage_account_type(&args.vm_size)?;
    let report = SkuReport {
        vm_size: &args.vm_size,
        storage_tier: tier.as_str(),
        sgx_enabled: is_sgx_enabled_sku(&args.vm_size),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_fields(&[
            ("vm size", report.vm_size.to_string()),
            ("storage tier", report.storage_tier.to_string()),
            ("sgx enabled", report.sgx_enabled.to_string()),
        ]);
    }

    Ok(())
}
