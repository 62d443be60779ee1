use anyhow::Result;
use clap::Args;
use nfd_api::types::View;
use nfd_api::{Client, NameQuery};

use super::parse_lenient;
use crate::output::{print_json, print_records_table, OutputFormat};

#[derive(Args)]
pub struct NameArgs {
    /// Name to fetch, e.g. alice.algo
    pub name: String,

    /// Response view: tiny, thumbnail, brief, full
    #[arg(long)]
    pub view: Option<String>,

    /// Skip the API's short-lived response cache
    #[arg(long)]
    pub poll: bool,

    /// Skip the API's record cache
    #[arg(long)]
    pub no_cache: bool,

    /// Only return the record if its match-check differs from this tag
    #[arg(long)]
    pub if_none_match: Option<String>,
}

#[derive(Args)]
pub struct NameSigArgs {
    /// Name to get the signature address for
    pub name: String,
}

pub async fn run(args: &NameArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = NameQuery::default()
        .with_poll(args.poll)
        .with_no_cache(args.no_cache);

    if let Some(view) = parse_lenient::<View>("view", args.view.as_deref()) {
        query = query.with_view(view);
    }
    if let Some(etag) = &args.if_none_match {
        query = query.with_if_none_match(etag);
    }

    let record = client.name(&args.name, Some(&query)).await?;

    match format {
        OutputFormat::Table => print_records_table(std::slice::from_ref(&record)),
        OutputFormat::Json => print_json(&record),
    }
    Ok(())
}

pub async fn run_sig(args: &NameSigArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let sig = client.name_sig(&args.name).await?;
    match format {
        OutputFormat::Table => println!("{}", sig),
        OutputFormat::Json => print_json(&sig),
    }
    Ok(())
}
