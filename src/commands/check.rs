use crate::display::{format_pool_summary, print_info, print_success};
use crate::errors::Result;
use clap::Args;
use nodegen_core::ClusterProfile;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct CheckArgs {
    /// Path to a cluster profile JSON file
    pub profile: PathBuf,

    /// Print the per-pool summary as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn load_profile(path: &Path) -> Result<ClusterProfile> {
    let content = fs::read_to_string(path)?;
    Ok(ClusterProfile::from_json(&content)?)
}

pub fn handle_check(args: CheckArgs) -> Result<()> {
    let profile = load_profile(&args.profile)?;
    profile.validate()?;
    let summary = profile.storage_summary()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_success(&format!(
        "Profile '{}' is valid ({} agent pools)",
        profile.dns_prefix,
        profile.agent_pools.len()
    ));
    print_info("Agent pools:");
    println!("{}", format_pool_summary(&summary));
    Ok(())
}
