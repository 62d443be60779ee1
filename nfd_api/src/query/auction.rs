use super::common::{Query, QueryParams};

/// Options for listing open auctions (`/nfd/auction`).
#[derive(Clone, Debug, Default)]
pub struct AuctionQuery {
    /// Restrict to a single name.
    pub name: Option<String>,
    /// Include auctions that have not started yet.
    pub starting_soon: bool,
}

impl Query for AuctionQuery {
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_str("name", self.name.as_deref());
        params.push_flag("startingSoon", self.starting_soon);
        params
    }
}

impl AuctionQuery {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_starting_soon(mut self, starting_soon: bool) -> Self {
        self.starting_soon = starting_soon;
        self
    }
}
