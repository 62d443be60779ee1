use anyhow::Result;
use clap::Args;
use nfd_api::types::View;
use nfd_api::{Client, SuggestQuery};

use super::parse_lenient;
use crate::output::{print_json, print_records_table, OutputFormat};

#[derive(Args)]
pub struct SuggestArgs {
    /// Name or fragment to find suggestions for
    pub name: String,

    /// Maximum number of suggestions
    #[arg(long)]
    pub limit: Option<u64>,

    /// Response view: brief, full
    #[arg(long)]
    pub view: Option<String>,
}

pub async fn run(args: &SuggestArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = SuggestQuery::default();
    if let Some(limit) = args.limit {
        query = query.with_limit(limit);
    }
    if let Some(view) = parse_lenient::<View>("view", args.view.as_deref()) {
        query = query.with_view(view);
    }

    let records = client.suggest(&args.name, Some(&query)).await?;

    match format {
        OutputFormat::Table => print_records_table(&records),
        OutputFormat::Json => print_json(&records),
    }
    Ok(())
}
