use crate::config::Config;
use crate::errors::{NodegenError, Result};
use clap::Args;
use nodegen_utils::{indent_string, ordered_escaped_key_vals, wrap_as_verbatim};
use std::collections::HashMap;

#[derive(Args)]
pub struct KeyValsArgs {
    /// Pairs in KEY=VALUE format
    #[arg(value_name = "KEY=VALUE")]
    pub pairs: Vec<String>,
}

#[derive(Args)]
pub struct IndentArgs {
    /// Text to indent
    pub text: String,

    /// Number of spaces (defaults to [render] indent from config)
    #[arg(short, long)]
    pub spaces: Option<usize>,
}

#[derive(Args)]
pub struct VerbatimArgs {
    /// Text to wrap
    pub text: String,
}

/// Parse `KEY=VALUE` arguments. Later duplicates replace earlier ones.
pub fn parse_key_vals(pairs: &[String]) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();

    for pair in pairs {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            NodegenError::InvalidInput(format!(
                "Invalid pair format: '{}'. Use KEY=VALUE",
                pair
            ))
        })?;

        if key.is_empty() {
            return Err(NodegenError::InvalidInput(
                "Key cannot be empty".to_string(),
            ));
        }

        map.insert(key.to_string(), value.to_string());
    }

    Ok(map)
}

pub fn handle_key_vals(args: KeyValsArgs) -> Result<()> {
    let map = parse_key_vals(&args.pairs)?;
    println!("{}", ordered_escaped_key_vals(&map));
    Ok(())
}

pub fn handle_indent(args: IndentArgs, config: &Config) -> Result<()> {
    let spaces = match args.spaces {
        Some(spaces) => spaces,
        None => config.indent()?,
    };
    print!("{}", indent_string(&args.text, spaces));
    Ok(())
}

pub fn handle_verbatim(args: VerbatimArgs) -> Result<()> {
    println!("{}", wrap_as_verbatim(&args.text));
    Ok(())
}
