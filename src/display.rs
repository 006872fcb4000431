use colored::Colorize;
use nodegen_core::PoolStorageSummary;

/// Status messages
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Render `(label, value)` pairs with labels padded to a common width
pub fn format_fields(fields: &[(&str, String)]) -> String {
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    fields
        .iter()
        .map(|(label, value)| format!("{:<width$}  {}", label, value, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn display_fields(fields: &[(&str, String)]) {
    println!("{}", format_fields(fields));
}

/// One line per pool: name, size, disk tier, SGX capability
pub fn format_pool_summary(pools: &[PoolStorageSummary]) -> String {
    let name_width = pools.iter().map(|p| p.name.len()).max().unwrap_or(0);
    let size_width = pools.iter().map(|p| p.vm_size.len()).max().unwrap_or(0);

    pools
        .iter()
        .map(|pool| {
            format!(
                "{:<name_width$}  {:<size_width$}  {:<12}  sgx={}",
                pool.name,
                pool.vm_size,
                pool.storage_tier.as_str(),
                pool.sgx_enabled,
                name_width = name_width,
                size_width = size_width,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
