use crate::config::Config;
use crate::display::{print_info, print_success};
use crate::errors::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Show the configuration file path
    Path,
}

pub fn handle_config(action: ConfigCommands, config: &Config) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            print_info(&format!("Config file: {}", config.path().display()));
            let entries = config.entries();
            if entries.is_empty() {
                println!("(no settings, using defaults)");
            }
            for (key, value) in entries {
                println!("{} = {}", key, value);
            }
            print_success(&format!("render.indent (effective) = {}", config.indent()?));
        }
        ConfigCommands::Path => {
            println!("{}", config.path().display());
        }
    }
    Ok(())
}
