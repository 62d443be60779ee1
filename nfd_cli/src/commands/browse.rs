use anyhow::Result;
use clap::Args;
use nfd_api::types::{Category, Length, SaleType, SortOption, State, Trait, View};
use nfd_api::{BrowseQuery, Client};

use super::{parse_all_lenient, parse_lenient};
use crate::output::{print_json, print_records_table, OutputFormat};

#[derive(Args)]
pub struct BrowseArgs {
    /// Substring match on the name
    #[arg(long)]
    pub name: Option<String>,

    /// Category: curated, premium, common
    #[arg(long)]
    pub category: Option<String>,

    /// Sale type: auction, buyItNow
    #[arg(long)]
    pub sale_type: Option<String>,

    /// State: minting, forSale, owned
    #[arg(long)]
    pub state: Option<String>,

    /// Name length: 1_letters .. 9_letters, 10+_letters
    #[arg(long)]
    pub length: Option<String>,

    /// Trait filter, repeatable: emoji
    #[arg(long = "trait")]
    pub traits: Vec<String>,

    /// Minimum price in microAlgos
    #[arg(long)]
    pub min_price: Option<u64>,

    /// Maximum price in microAlgos
    #[arg(long)]
    pub max_price: Option<u64>,

    /// Maximum number of names
    #[arg(long)]
    pub limit: Option<u64>,

    /// Names to skip, for paging
    #[arg(long)]
    pub offset: Option<u64>,

    /// Sort order: timeDesc, priceAsc, saleTypeAsc, priceDesc, createdDesc,
    /// soldDesc, highestSaleDesc
    #[arg(long)]
    pub sort: Option<String>,

    /// Response view: tiny, thumbnail, brief, full
    #[arg(long)]
    pub view: Option<String>,

    /// Conditional fetch tag
    #[arg(long)]
    pub if_none_match: Option<String>,
}

pub async fn run(args: &BrowseArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = build_query(args);
    let records = client.browse(Some(&query)).await?;
    tracing::info!("{} names", records.len());

    match format {
        OutputFormat::Table => print_records_table(&records),
        OutputFormat::Json => print_json(&records),
    }
    Ok(())
}

fn build_query(args: &BrowseArgs) -> BrowseQuery {
    let mut query = BrowseQuery::default();

    if let Some(name) = &args.name {
        query = query.with_name(name);
    }
    if let Some(category) = parse_lenient::<Category>("category", args.category.as_deref()) {
        query = query.with_category(category);
    }
    if let Some(sale_type) = parse_lenient::<SaleType>("sale-type", args.sale_type.as_deref()) {
        query = query.with_sale_type(sale_type);
    }
    if let Some(state) = parse_lenient::<State>("state", args.state.as_deref()) {
        query = query.with_state(state);
    }
    if let Some(length) = parse_lenient::<Length>("length", args.length.as_deref()) {
        query = query.with_length(length);
    }
    let traits: Vec<Trait> = parse_all_lenient("trait", &args.traits);
    query = query.with_traits(&traits);
    if let Some(min_price) = args.min_price {
        query = query.with_min_price(min_price);
    }
    if let Some(max_price) = args.max_price {
        query = query.with_max_price(max_price);
    }
    if let Some(limit) = args.limit {
        query = query.with_limit(limit);
    }
    if let Some(offset) = args.offset {
        query = query.with_offset(offset);
    }
    if let Some(sort) = parse_lenient::<SortOption>("sort", args.sort.as_deref()) {
        query = query.with_sort(sort);
    }
    if let Some(view) = parse_lenient::<View>("view", args.view.as_deref()) {
        query = query.with_view(view);
    }
    if let Some(etag) = &args.if_none_match {
        query = query.with_if_none_match(etag);
    }
    query
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use nfd_api::Query;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: BrowseArgs,
    }

    fn params(argv: &[&str]) -> nfd_api::QueryParams {
        let mut full = vec!["browse"];
        full.extend_from_slice(argv);
        build_query(&TestCli::parse_from(full).args).query_params()
    }

    #[test]
    fn no_flags_means_no_params() {
        assert!(params(&[]).is_empty());
    }

    #[test]
    fn listing_flags() {
        let params = params(&[
            "--state",
            "forSale",
            "--sale-type",
            "buyItNow",
            "--min-price",
            "100",
            "--sort",
            "priceAsc",
            "--trait",
            "emoji",
        ]);
        assert_eq!(params.get("state"), Some("forSale"));
        assert_eq!(params.get("saleType"), Some("buyItNow"));
        assert_eq!(params.get("minPrice"), Some("100"));
        assert_eq!(params.get("sort"), Some("priceAsc"));
        assert_eq!(params.get_all("trait"), vec!["emoji"]);
    }

    #[test]
    fn defaults_and_unknown_tokens_are_left_out() {
        let params = params(&["--sort", "createdDesc", "--view", "brief", "--category", "rare"]);
        assert!(params.is_empty());
    }
}
