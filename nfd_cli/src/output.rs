use nfd_api::types::{ActivityRecord, AnalyticRecord, AuctionAndPrice, Record};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Owner")]
    owner: String,
    #[tabled(rename = "Price")]
    price: String,
}

#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Block")]
    block: String,
    #[tabled(rename = "Changed")]
    changed: String,
    #[tabled(rename = "Changes")]
    changes: String,
}

#[derive(Tabled)]
struct AnalyticRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Event")]
    event: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Buyer")]
    buyer: String,
}

#[derive(Tabled)]
struct AuctionRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Floor")]
    floor: String,
    #[tabled(rename = "Ends")]
    ends: String,
}

// -- Row builders --

fn build_record_rows(records: &[Record]) -> Vec<RecordRow> {
    records
        .iter()
        .map(|r| RecordRow {
            name: r.name.clone(),
            state: r.state.clone().unwrap_or_default(),
            category: r.category.clone().unwrap_or_default(),
            owner: r.owner.as_deref().map(short_address).unwrap_or_default(),
            price: r.sell_amount.map(format_algo).unwrap_or_default(),
        })
        .collect()
}

fn build_activity_rows(activity: &[ActivityRecord]) -> Vec<ActivityRow> {
    activity
        .iter()
        .map(|a| ActivityRow {
            name: a.name.clone(),
            block: a.block.map(|b| b.to_string()).unwrap_or_default(),
            changed: a
                .time_changed
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            changes: a.changes.keys().cloned().collect::<Vec<_>>().join(", "),
        })
        .collect()
}

fn build_analytic_rows(records: &[AnalyticRecord]) -> Vec<AnalyticRow> {
    records
        .iter()
        .map(|r| AnalyticRow {
            time: r
                .timestamp
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            name: r.data.name.clone(),
            event: r.data.event.clone().unwrap_or_default(),
            price: format_algo(r.price),
            buyer: r.data.buyer.as_deref().map(short_address).unwrap_or_default(),
        })
        .collect()
}

fn build_auction_rows(auctions: &[AuctionAndPrice]) -> Vec<AuctionRow> {
    auctions
        .iter()
        .map(|a| AuctionRow {
            name: a.auction_info.name.clone(),
            price: a.price.map(format_algo).unwrap_or_default(),
            floor: a.auction_info.floor_price.map(format_algo).unwrap_or_default(),
            ends: a
                .auction_info
                .end_time
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        })
        .collect()
}

// -- Table output --

pub fn print_records_table(records: &[Record]) {
    println!("{}", Table::new(build_record_rows(records)));
}

pub fn print_activity_table(activity: &[ActivityRecord]) {
    println!("{}", Table::new(build_activity_rows(activity)));
}

pub fn print_analytics_table(records: &[AnalyticRecord]) {
    println!("{}", Table::new(build_analytic_rows(records)));
}

pub fn print_auctions_table(auctions: &[AuctionAndPrice]) {
    println!("{}", Table::new(build_auction_rows(auctions)));
}

// -- JSON output --

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Formats microAlgos as ALGO, dropping trailing zeros.
fn format_algo(micro_algos: u64) -> String {
    let whole = micro_algos / 1_000_000;
    let frac = micro_algos % 1_000_000;
    if frac == 0 {
        format!("{} ALGO", whole)
    } else {
        let frac = format!("{:06}", frac);
        format!("{}.{} ALGO", whole, frac.trim_end_matches('0'))
    }
}

/// `ABCDEF...WXYZ` form of a 58-character Algorand address.
fn short_address(address: &str) -> String {
    if address.len() <= 12 || !address.is_ascii() {
        address.to_string()
    } else {
        format!("{}...{}", &address[..6], &address[address.len() - 4..])
    }
}
