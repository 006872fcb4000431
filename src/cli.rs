use crate::commands::check::{self, CheckArgs};
use crate::commands::config::{handle_config, ConfigCommands};
use crate::commands::dns::{self, DnsPrefixArgs};
use crate::commands::render::{self, IndentArgs, KeyValsArgs, VerbatimArgs};
use crate::commands::sku::{self, SkuArgs};
use crate::commands::url::{self, UrlArgs};
use crate::config::{Config, CONFIG_ENV_VAR};
use crate::errors::Result;
use crate::logging::init_logging;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nodegen")]
#[command(about = "Validation and string-shaping helpers for cluster node configuration")]
#[command(version)]
pub struct Cli {
    /// Path to the INI config file
    #[arg(long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a cluster DNS prefix
    DnsPrefix(DnsPrefixArgs),
    /// Classify a VM size (SGX capability and managed disk tier)
    Sku(SkuArgs),
    /// Extract the component name from a download URL
    ComponentName(UrlArgs),
    /// Extract the image name from a container image reference
    ImageName(UrlArgs),
    /// Serialize KEY=VALUE pairs in key order
    KeyVals(KeyValsArgs),
    /// Indent every line of a text
    Indent(IndentArgs),
    /// Wrap a text in verbatim delimiters
    Verbatim(VerbatimArgs),
    /// Validate a cluster profile and summarize its agent pools
    Check(CheckArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

pub fn run_cli(cli: Cli) -> Result<()> {
    // Only `indent` and `config` read settings; a broken config file must not
    // block the pure commands.
    let config = Config::load(cli.config.as_deref());
    let log_level = config
        .as_ref()
        .ok()
        .and_then(|c| c.log_level().map(str::to_string));

    // A second init (e.g. from an embedding test harness) is not fatal.
    if let Err(e) = init_logging(cli.verbose, log_level.as_deref()) {
        eprintln!("{}", e);
    }

    if let Err(e) = &config {
        if !uses_config(&cli.command) {
            log::warn!("Ignoring unusable config: {}", e);
        }
    }

    match cli.command {
        Commands::DnsPrefix(args) => dns::handle_dns_prefix(args),
        Commands::Sku(args) => sku::handle_sku(args),
        Commands::ComponentName(args) => url::handle_component_name(args),
        Commands::ImageName(args) => url::handle_image_name(args),
        Commands::KeyVals(args) => render::handle_key_vals(args),
        Commands::Indent(args) => render::handle_indent(args, &config?),
        Commands::Verbatim(args) => render::handle_verbatim(args),
        Commands::Check(args) => check::handle_check(args),
        Commands::Config { action } => handle_config(action, &config?),
    }
}

fn uses_config(command: &Commands) -> bool {
    matches!(command, Commands::Indent(_) | Commands::Config { .. })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_indent_flags() {
        let cli = Cli::try_parse_from(["nodegen", "indent", "--spaces", "2", "foo"]).unwrap();
        match cli.command {
            Commands::Indent(args) => {
                assert_eq!(args.spaces, Some(2));
                assert_eq!(args.text, "foo");
            }
            _ => panic!("expected indent command"),
        }
    }

    #[test]
    fn test_parse_global_config_flag() {
        let cli = Cli::try_parse_from([
            "nodegen",
            "dns-prefix",
            "myDNS-1234",
            "--config",
            "/tmp/nodegen.ini",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/nodegen.ini")));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_only_settings_commands_use_config() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap().command;

        assert!(uses_config(&parse(&["nodegen", "indent", "foo"])));
        assert!(uses_config(&parse(&["nodegen", "config", "show"])));
        assert!(!uses_config(&parse(&["nodegen", "verbatim", "foo"])));
        assert!(!uses_config(&parse(&["nodegen", "dns-prefix", "myDNS-1234"])));
    }

    #[test]
    fn test_missing_config_does_not_block_pure_commands() {
        let cli = Cli::try_parse_from([
            "nodegen",
            "--config",
            "/nonexistent/nodegen.ini",
            "verbatim",
            "foo",
        ])
        .unwrap();
        assert!(run_cli(cli).is_ok());
    }
}
