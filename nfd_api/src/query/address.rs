use crate::types::View;

use super::common::{Query, QueryParams, ALL_VIEWS};

/// Options for reverse lookups (`/nfd/address`).
///
/// The addresses themselves are passed to [`Client::address`](crate::Client::address).
#[derive(Clone, Debug, Default)]
pub struct AddressQuery {
    pub limit: Option<u64>,
    pub view: Option<View>,
    pub if_none_match: Option<String>,
}

impl Query for AddressQuery {
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_int("limit", self.limit);
        params.push_allowed("view", self.view, ALL_VIEWS);
        params
    }

    fn if_none_match(&self) -> Option<&str> {
        self.if_none_match.as_deref()
    }
}

impl AddressQuery {
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_query_limit_and_view() {
        let params = AddressQuery::default()
            .with_limit(5)
            .with_view(View::Thumbnail)
            .query_params();
        assert_eq!(params.get("limit"), Some("5"));
        assert_eq!(params.get("view"), Some("thumbnail"));
    }

    #[test]
    fn zero_limit_is_unset() {
        assert!(AddressQuery::default().with_limit(0).query_params().is_empty());
    }
}
