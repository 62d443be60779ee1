use anyhow::Result;
use clap::Args;
use nfd_api::types::View;
use nfd_api::{AddressQuery, Client};

use super::parse_lenient;
use crate::output::{print_json, print_records_table, OutputFormat};

#[derive(Args)]
pub struct AddressArgs {
    /// One or more Algorand addresses
    #[arg(required = true)]
    pub addresses: Vec<String>,

    /// Maximum names per address
    #[arg(long)]
    pub limit: Option<u64>,

    /// Response view: tiny, thumbnail, brief, full
    #[arg(long)]
    pub view: Option<String>,

    /// Conditional fetch tag
    #[arg(long)]
    pub if_none_match: Option<String>,
}

#[derive(Args)]
pub struct RevSigArgs {
    /// Algorand address to get the reverse signature address for
    pub address: String,
}

pub async fn run(args: &AddressArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = AddressQuery::default();
    if let Some(limit) = args.limit {
        query = query.with_limit(limit);
    }
    if let Some(view) = parse_lenient::<View>("view", args.view.as_deref()) {
        query = query.with_view(view);
    }
    if let Some(etag) = &args.if_none_match {
        query = query.with_if_none_match(etag);
    }

    let records = client.address(&args.addresses, Some(&query)).await?;

    match format {
        OutputFormat::Table => print_records_table(&records),
        OutputFormat::Json => print_json(&records),
    }
    Ok(())
}

pub async fn run_rev_sig(args: &RevSigArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let sig = client.rev_sig(&args.address).await?;
    match format {
        OutputFormat::Table => println!("{}", sig),
        OutputFormat::Json => print_json(&sig),
    }
    Ok(())
}
