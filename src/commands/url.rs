use crate::errors::Result;
use clap::Args;
use nodegen_utils::{component_name_from_url, container_image_name_from_url};

#[derive(Args)]
pub struct UrlArgs {
    /// Download URL or container image reference
    pub url: String,
}

pub fn handle_component_name(args: UrlArgs) -> Result<()> {
    let name = component_name_from_url(&args.url)?;
    log::debug!("component {:?} from {:?}", name, args.url);
    println!("{}", name);
    Ok(())
}

pub fn handle_image_name(args: UrlArgs) -> Result<()> {
    let name = container_image_name_from_url(&args.url)?;
    log::debug!("image {:?} from {:?}", name, args.url);
    println!("{}", name);
    Ok(())
}
