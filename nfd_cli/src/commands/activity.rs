use anyhow::Result;
use clap::Args;
use nfd_api::types::{ActivityType, SortOption};
use nfd_api::{ActivityQuery, Client};

use super::{parse_after, parse_lenient};
use crate::output::{print_activity_table, print_json, OutputFormat};

#[derive(Args)]
pub struct ActivityArgs {
    /// Names to fetch changes for
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Activity type: changes
    #[arg(long = "type")]
    pub activity_type: Option<String>,

    /// Only changes after this time (RFC 3339, e.g. 2024-01-31T00:00:00Z)
    #[arg(long)]
    pub after: Option<String>,

    /// Maximum number of entries
    #[arg(long)]
    pub limit: Option<u64>,

    /// Sort order: timeDesc
    #[arg(long)]
    pub sort: Option<String>,

    /// Conditional fetch tag
    #[arg(long)]
    pub if_none_match: Option<String>,
}

pub async fn run(args: &ActivityArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = ActivityQuery::default();

    if let Some(activity_type) =
        parse_lenient::<ActivityType>("type", args.activity_type.as_deref())
    {
        query = query.with_activity_type(activity_type);
    }
    if let Some(after) = parse_after(args.after.as_deref())? {
        query = query.with_after(after);
    }
    if let Some(limit) = args.limit {
        query = query.with_limit(limit);
    }
    if let Some(sort) = parse_lenient::<SortOption>("sort", args.sort.as_deref()) {
        query = query.with_sort(sort);
    }
    if let Some(etag) = &args.if_none_match {
        query = query.with_if_none_match(etag);
    }

    let activity = client.activity(&args.names, Some(&query)).await?;
    tracing::info!("{} activity entries", activity.len());

    match format {
        OutputFormat::Table => print_activity_table(&activity),
        OutputFormat::Json => print_json(&activity),
    }
    Ok(())
}
