use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{de::blank_as_none, enums::UnknownToken, Category};

/// Page of sales/listing events from `/nfd/analytics`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AnalyticRecords {
    #[serde(default)]
    pub results: Vec<AnalyticRecord>,

    /// Matching events across all pages, not just this one.
    #[serde(default)]
    pub total: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnalyticRecord {
    pub data: AnalyticEvent,

    /// Sale or listing price in microAlgos.
    #[serde(default)]
    pub price: u64,

    #[serde(rename = "timeStamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A marketplace event. `category`, `event` and `sale_type` are the raw
/// tokens the API sent.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnalyticEvent {
    pub block: Option<u64>,
    pub buyer: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub event: Option<String>,
    #[serde(rename = "groupID")]
    pub group_id: Option<String>,
    #[serde(default, rename = "metaTags")]
    pub meta_tags: Vec<String>,
    pub name: String,
    pub note: Option<String>,
    #[serde(default, rename = "saleType", deserialize_with = "blank_as_none")]
    pub sale_type: Option<String>,
    pub seller: Option<String>,
}

impl AnalyticEvent {
    /// `None` when unset or not an event kind this client knows.
    pub fn event_kind(&self) -> Option<Event> {
        self.event.as_deref().and_then(|e| e.parse().ok())
    }

    pub fn category_kind(&self) -> Option<Category> {
        self.category.as_deref().and_then(|c| c.parse().ok())
    }
}

/// Marketplace event kinds.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Event {
    Minted,
    OfferedForSale,
    CanceledSale,
    Sold,
    PostedOffer,
}
impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::Minted => "minted",
            Event::OfferedForSale => "offeredForSale",
            Event::CanceledSale => "canceledSale",
            Event::Sold => "sold",
            Event::PostedOffer => "postedOffer",
        }
    }
}
impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for Event {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minted" => Ok(Event::Minted),
            "offeredForSale" => Ok(Event::OfferedForSale),
            "canceledSale" => Ok(Event::CanceledSale),
            "sold" => Ok(Event::Sold),
            "postedOffer" => Ok(Event::PostedOffer),
            _ => Err(UnknownToken(s.to_string())),
        }
    }
}
