use anyhow::Result;
use clap::Args;
use nfd_api::{AuctionQuery, Client};

use crate::output::{print_auctions_table, print_json, OutputFormat};

#[derive(Args)]
pub struct AuctionArgs {
    /// Only the auction for this name
    #[arg(long)]
    pub name: Option<String>,

    /// Include auctions that have not started yet
    #[arg(long)]
    pub starting_soon: bool,
}

pub async fn run(args: &AuctionArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = AuctionQuery::default().with_starting_soon(args.starting_soon);
    if let Some(name) = &args.name {
        query = query.with_name(name);
    }

    let auctions = client.auction(Some(&query)).await?;

    match format {
        OutputFormat::Table => print_auctions_table(&auctions),
        OutputFormat::Json => print_json(&auctions),
    }
    Ok(())
}
