use anyhow::Result;
use clap::Args;
use nfd_api::Client;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct IsValidArgs {
    /// Application ID to check
    pub app_id: u64,
}

pub async fn run(args: &IsValidArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let valid = client.is_valid(args.app_id).await?;
    match format {
        OutputFormat::Table => {
            if valid.is_valid {
                println!("{} is a valid NFD", args.app_id);
            } else {
                println!("{} is not a valid NFD: {}", args.app_id, valid.message);
            }
        }
        OutputFormat::Json => print_json(&valid),
    }
    Ok(())
}
