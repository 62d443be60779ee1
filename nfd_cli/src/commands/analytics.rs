use anyhow::Result;
use clap::Args;
use nfd_api::types::{Category, Event, Length, SaleType, SortOption, State, Trait};
use nfd_api::{AnalyticsQuery, Client};

use super::{parse_after, parse_all_lenient, parse_lenient};
use crate::output::{print_analytics_table, print_json, OutputFormat};

#[derive(Args)]
pub struct AnalyticsArgs {
    /// Only events for this name
    #[arg(long)]
    pub name: Option<String>,

    /// Only events with this buyer address
    #[arg(long)]
    pub buyer: Option<String>,

    /// Only events with this seller address
    #[arg(long)]
    pub seller: Option<String>,

    /// Event kind: minted, offeredForSale, canceledSale, sold, postedOffer
    #[arg(long)]
    pub event: Option<String>,

    /// Only events that have a buyer
    #[arg(long)]
    pub require_buyer: bool,

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

    /// Only events after this time (RFC 3339)
    #[arg(long)]
    pub after: Option<String>,

    /// Maximum number of events
    #[arg(long)]
    pub limit: Option<u64>,

    /// Events to skip, for paging
    #[arg(long)]
    pub offset: Option<u64>,

    /// Sort order: timeDesc, priceAsc, priceDesc
    #[arg(long)]
    pub sort: Option<String>,

    /// Conditional fetch tag
    #[arg(long)]
    pub if_none_match: Option<String>,
}

pub async fn run(args: &AnalyticsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = build_query(args)?;
    let page = client.analytics(Some(&query)).await?;
    tracing::info!(
        "{} of {} matching events",
        page.results.len(),
        page.total
    );

    match format {
        OutputFormat::Table => print_analytics_table(&page.results),
        OutputFormat::Json => print_json(&page),
    }
    Ok(())
}

fn build_query(args: &AnalyticsArgs) -> Result<AnalyticsQuery> {
    let mut query = AnalyticsQuery::default().with_require_buyer(args.require_buyer);

    if let Some(name) = &args.name {
        query = query.with_name(name);
    }
    if let Some(buyer) = &args.buyer {
        query = query.with_buyer(buyer);
    }
    if let Some(seller) = &args.seller {
        query = query.with_seller(seller);
    }
    if let Some(event) = parse_lenient::<Event>("event", args.event.as_deref()) {
        query = query.with_event(event);
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
    if let Some(after) = parse_after(args.after.as_deref())? {
        query = query.with_after(after);
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
    if let Some(etag) = &args.if_none_match {
        query = query.with_if_none_match(etag);
    }
    Ok(query)
}
