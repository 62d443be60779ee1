use chrono::{DateTime, Utc};

use crate::types::{Category, Event, Length, SaleType, SortOption, State, Trait};

use super::common::{Query, QueryParams, CATEGORIES, FILTER_STATES, LENGTHS, SALE_TYPES, TRAITS};

const EVENTS: &[Event] = &[
    Event::Minted,
    Event::OfferedForSale,
    Event::CanceledSale,
    Event::Sold,
    Event::PostedOffer,
];

const ANALYTICS_SORTS: &[SortOption] = &[
    SortOption::TimeDesc,
    SortOption::PriceAsc,
    SortOption::PriceDesc,
];

/// Filters for marketplace history (`/nfd/analytics`).
#[derive(Clone, Debug, Default)]
pub struct AnalyticsQuery {
    pub name: Option<String>,
    pub buyer: Option<String>,
    pub seller: Option<String>,
    pub event: Option<Event>,
    /// Only events that have a buyer.
    pub require_buyer: bool,
    pub category: Option<Category>,
    pub sale_type: Option<SaleType>,
    pub state: Option<State>,
    pub length: Option<Length>,
    pub traits: Vec<Trait>,
    /// Price bounds in microAlgos.
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub after: Option<DateTime<Utc>>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub sort: Option<SortOption>,
    pub if_none_match: Option<String>,
}

impl Query for AnalyticsQuery {
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_str("name", self.name.as_deref());
        params.push_str("buyer", self.buyer.as_deref());
        params.push_str("seller", self.seller.as_deref());
        params.push_allowed("event", self.event, EVENTS);
        params.push_flag("requireBuyer", self.require_buyer);
        params.push_allowed("category", self.category, CATEGORIES);
        params.push_allowed("saleType", self.sale_type, SALE_TYPES);
        params.push_allowed("state", self.state, FILTER_STATES);
        params.push_allowed("length", self.length, LENGTHS);
        params.push_all_allowed("traits", &self.traits, TRAITS);
        params.push_int("minPrice", self.min_price);
        params.push_int("maxPrice", self.max_price);
        params.push_time("afterTime", self.after.as_ref());
        params.push_int("limit", self.limit);
        params.push_int("offset", self.offset);
        params.push_allowed("sort", self.sort, ANALYTICS_SORTS);
        params
    }

    fn if_none_match(&self) -> Option<&str> {
        self.if_none_match.as_deref()
    }
}

impl AnalyticsQuery {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_buyer(mut self, buyer: &str) -> Self {
        self.buyer = Some(buyer.to_string());
        self
    }

    pub fn with_seller(mut self, seller: &str) -> Self {
        self.seller = Some(seller.to_string());
        self
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.event = Some(event);
        self
    }

    pub fn with_require_buyer(mut self, require_buyer: bool) -> Self {
        self.require_buyer = require_buyer;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_sale_type(mut self, sale_type: SaleType) -> Self {
        self.sale_type = Some(sale_type);
        self
    }

    pub fn with_state(mut self, state: State) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_length(mut self, length: Length) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_trait(mut self, t: Trait) -> Self {
        self.traits.push(t);
        self
    }

    pub fn with_traits(mut self, traits: &[Trait]) -> Self {
        self.traits.extend_from_slice(traits);
        self
    }

    pub fn with_min_price(mut self, min_price: u64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn with_max_price(mut self, max_price: u64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_after(mut self, after: DateTime<Utc>) -> Self {
        self.after = Some(after);
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_if_none_match(mut self, etag: &str) -> Self {
        self.if_none_match = Some(etag.to_string());
        self
    }
}
