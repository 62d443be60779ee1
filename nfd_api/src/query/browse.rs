use crate::types::{Category, Length, SaleType, SortOption, State, Trait, View};

use super::common::{
    Query, QueryParams, ALL_VIEWS, CATEGORIES, FILTER_STATES, LENGTHS, SALE_TYPES, TRAITS,
};

const BROWSE_SORTS: &[SortOption] = &[
    SortOption::TimeDesc,
    SortOption::PriceAsc,
    SortOption::SaleTypeAsc,
    SortOption::PriceDesc,
    SortOption::CreatedDesc,
    SortOption::SoldDesc,
    SortOption::HighestSaleDesc,
];

/// Sort the API applies when none is given. Never sent.
pub const DEFAULT_BROWSE_SORT: SortOption = SortOption::CreatedDesc;

/// View the API applies when none is given. Never sent.
pub const DEFAULT_BROWSE_VIEW: View = View::Brief;

/// Filters for listing names (`/nfd/browse`).
///
/// Sort and view values equal to the server defaults are left out of the
/// URL so that equivalent queries map to one cacheable URL.
#[derive(Clone, Debug, Default)]
pub struct BrowseQuery {
    /// Substring match on the name.
    pub name: Option<String>,
    pub category: Option<Category>,
    pub sale_type: Option<SaleType>,
    pub state: Option<State>,
    pub length: Option<Length>,
    pub traits: Vec<Trait>,
    /// Price bounds in microAlgos.
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub sort: Option<SortOption>,
    pub view: Option<View>,
    pub if_none_match: Option<String>,
}

impl Query for BrowseQuery {
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_str("name", self.name.as_deref());
        params.push_allowed("category", self.category, CATEGORIES);
        params.push_allowed("saleType", self.sale_type, SALE_TYPES);
        params.push_allowed("state", self.state, FILTER_STATES);
        params.push_allowed("length", self.length, LENGTHS);
        params.push_all_allowed("trait", &self.traits, TRAITS);
        params.push_int("minPrice", self.min_price);
        params.push_int("maxPrice", self.max_price);
        params.push_int("limit", self.limit);
        params.push_int("offset", self.offset);
        params.push_allowed(
            "sort",
            self.sort.filter(|s| *s != DEFAULT_BROWSE_SORT),
            BROWSE_SORTS,
        );
        params.push_allowed(
            "view",
            self.view.filter(|v| *v != DEFAULT_BROWSE_VIEW),
            ALL_VIEWS,
        );
        params
    }

    fn if_none_match(&self) -> Option<&str> {
        self.if_none_match.as_deref()
    }
}

impl BrowseQuery {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
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

    pub fn with_view(mut self, view: View) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_if_none_match(mut self, etag: &str) -> Self {
        self.if_none_match = Some(etag.to_string());
        self
    }
}
