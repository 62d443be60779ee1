use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reverse (descending price) auction.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    /// Starting price in microAlgos.
    pub ceiling_price: Option<u64>,

    pub current_price: Option<u64>,

    pub end_time: Option<DateTime<Utc>>,

    /// Price the auction settles at once `end_time` passes.
    pub floor_price: Option<u64>,

    pub name: String,

    pub start_time: Option<DateTime<Utc>>,
}

/// An open auction along with its price at the time of the request.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuctionAndPrice {
    pub auction_info: Auction,

    pub change_per_minute: Option<u64>,

    pub elapsed_minutes: Option<u64>,

    pub price: Option<u64>,

    pub total_minutes: Option<u64>,
}
