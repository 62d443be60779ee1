//! Typed client for the NFDomains (NFD) registry REST API.
//!
//! Each [`Client`] method maps to one GET endpoint. Optional filters are
//! described by per-endpoint query types implementing [`Query`].

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, Network};
pub use self::errors::Error;
pub use self::query::{
    is_allowed, ActivityQuery, AddressQuery, AnalyticsQuery, AuctionQuery, BrowseQuery, NameQuery,
    Query, QueryParams, SuggestQuery, DEFAULT_BROWSE_SORT, DEFAULT_BROWSE_VIEW,
};
