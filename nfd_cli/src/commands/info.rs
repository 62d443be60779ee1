use anyhow::Result;
use nfd_api::Client;

use crate::output::{print_json, OutputFormat};

pub async fn run_version(client: &Client, format: &OutputFormat) -> Result<()> {
    let version = client.version().await?;
    match format {
        OutputFormat::Table => println!("{} {}", version.app, version.version),
        OutputFormat::Json => print_json(&version),
    }
    Ok(())
}

pub async fn run_totals(client: &Client, format: &OutputFormat) -> Result<()> {
    let totals = client.totals().await?;
    match format {
        OutputFormat::Table => {
            println!("Total names:   {}", totals.total.unwrap_or_default());
            println!("For sale:      {}", totals.for_sale.unwrap_or_default());
            println!("Unique owners: {}", totals.unique_owners.unwrap_or_default());
            if let Some(minted) = &totals.minted_totals {
                println!(
                    "Minted:        {} today, {} this week, {} this month, {} lifetime",
                    minted.day, minted.week, minted.month, minted.lifetime
                );
            }
        }
        OutputFormat::Json => print_json(&totals),
    }
    Ok(())
}
