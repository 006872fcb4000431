use crate::display::print_success;
use crate::errors::Result;
use clap::Args;
use nodegen_core::validate_dns_prefix;

#[derive(Args)]
pub struct DnsPrefixArgs {
    /// Cluster DNS prefix to validate
    pub prefix: String,
}

pub fn handle_dns_prefix(args: DnsPrefixArgs) -> Result<()> {
    validate_dns_prefix(&args.prefix)?;
    print_success(&format!("DNSPrefix '{}' is valid", args.prefix));
    Ok(())
}
