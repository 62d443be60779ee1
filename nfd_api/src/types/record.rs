//! NFD records as returned by `/nfd/{name}`, `/nfd/address` and friends.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de::blank_as_none;
use super::enums::UnknownToken;

/// Application ID of an NFD's on-chain contract.
pub type AppID = u64;

/// A single NFD.
///
/// Only `name` is guaranteed; what else is present depends on the
/// [`View`](super::View) requested. `category`, `sale_type` and `state` hold
/// the raw tokens the API sent; the `*_kind` accessors map them onto the
/// known enums.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(rename = "appID")]
    pub app_id: Option<AppID>,

    #[serde(rename = "asaID")]
    pub asa_id: Option<u64>,

    /// Verified Algorand addresses linked to this name.
    #[serde(default)]
    pub ca_algo: Vec<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub category: Option<String>,

    pub current_as_of_block: Option<u64>,

    /// Cache tag, usable as an `if-none-match` value on the next fetch.
    #[serde(rename = "match-check")]
    pub match_check: Option<String>,

    #[serde(default)]
    pub meta_tags: Vec<String>,

    /// Fully qualified name, e.g. `alice.algo`.
    pub name: String,

    pub nfd_account: Option<String>,

    pub owner: Option<String>,

    pub properties: Option<Properties>,

    pub reserved_for: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub sale_type: Option<String>,

    /// Asking price in microAlgos when for sale.
    pub sell_amount: Option<u64>,

    pub seller: Option<String>,

    pub sig_name_address: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub state: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub time_changed: Option<DateTime<Utc>>,

    pub time_created: Option<DateTime<Utc>>,

    pub time_purchased: Option<DateTime<Utc>>,

    #[serde(default)]
    pub unverified_ca_algo: Vec<String>,
}

impl Record {
    /// `None` when unset or not a category this client knows.
    pub fn category_kind(&self) -> Option<Category> {
        self.category.as_deref().and_then(|c| c.parse().ok())
    }

    pub fn sale_type_kind(&self) -> Option<SaleType> {
        self.sale_type.as_deref().and_then(|t| t.parse().ok())
    }

    pub fn state_kind(&self) -> Option<State> {
        self.state.as_deref().and_then(|s| s.parse().ok())
    }
}

/// Key/value properties attached to a record, grouped by provenance.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    /// Set by the registry contract itself.
    #[serde(default)]
    pub internal: BTreeMap<String, String>,

    /// Set freely by the owner.
    #[serde(default)]
    pub user_defined: BTreeMap<String, String>,

    /// Set by the owner and verified by the registry (twitter, discord, ...).
    #[serde(default)]
    pub verified: BTreeMap<String, String>,
}

/// Pricing category assigned at mint time.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Curated,
    Premium,
    Common,
}
impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Curated => "curated",
            Category::Premium => "premium",
            Category::Common => "common",
        }
    }
}
impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for Category {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "curated" => Ok(Category::Curated),
            "premium" => Ok(Category::Premium),
            "common" => Ok(Category::Common),
            _ => Err(UnknownToken(s.to_string())),
        }
    }
}

/// How a name is being sold.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaleType {
    #[serde(rename = "auction")]
    Auction,
    #[serde(rename = "buyItNow")]
    BuyItNow,
}
impl SaleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleType::Auction => "auction",
            SaleType::BuyItNow => "buyItNow",
        }
    }
}
impl std::fmt::Display for SaleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for SaleType {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auction" => Ok(SaleType::Auction),
            "buyItNow" => Ok(SaleType::BuyItNow),
            _ => Err(UnknownToken(s.to_string())),
        }
    }
}

/// Lifecycle state of a name.
///
/// `Available` and `Reserved` only ever appear in responses; the browse and
/// analytics filters accept the other three.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    #[serde(rename = "available")]
    Available,
    #[serde(rename = "minting")]
    Minting,
    #[serde(rename = "reserved")]
    Reserved,
    #[serde(rename = "forSale")]
    ForSale,
    #[serde(rename = "owned")]
    Owned,
}
impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Available => "available",
            State::Minting => "minting",
            State::Reserved => "reserved",
            State::ForSale => "forSale",
            State::Owned => "owned",
        }
    }
}
impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for State {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(State::Available),
            "minting" => Ok(State::Minting),
            "reserved" => Ok(State::Reserved),
            "forSale" => Ok(State::ForSale),
            "owned" => Ok(State::Owned),
            _ => Err(UnknownToken(s.to_string())),
        }
    }
}
