use crate::types::View;

use super::common::{Query, QueryParams, ALL_VIEWS};

/// Options for fetching a single name (`/nfd/{name}`).
#[derive(Clone, Debug, Default)]
pub struct NameQuery {
    pub view: Option<View>,
    /// Bypass the API's short-lived response cache.
    pub poll: bool,
    /// Bypass the API's record cache entirely.
    pub no_cache: bool,
    pub if_none_match: Option<String>,
}

impl Query for NameQuery {
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_allowed("view", self.view, ALL_VIEWS);
        params.push_flag("poll", self.poll);
        params.push_flag("nocache", self.no_cache);
        params
    }

    fn if_none_match(&self) -> Option<&str> {
        self.if_none_match.as_deref()
    }
}

impl NameQuery {
    pub fn with_view(mut self, view: View) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_poll(mut self, poll: bool) -> Self {
        self.poll = poll;
        self
    }

    pub fn with_no_cache(mut self, no_cache: bool) -> Self {
        self.no_cache = no_cache;
        self
    }

    pub fn with_if_none_match(mut self, etag: &str) -> Self {
        self.if_none_match = Some(etag.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::IF_NONE_MATCH;

    use super::*;

    #[test]
    fn name_query_flags_and_view() {
        let params = NameQuery::default()
            .with_view(View::Full)
            .with_poll(true)
            .with_no_cache(true)
            .query_params();
        assert_eq!(params.get("view"), Some("full"));
        assert_eq!(params.get("poll"), Some("true"));
        assert_eq!(params.get("nocache"), Some("true"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn if_none_match_becomes_a_header_not_a_param() {
        let query = NameQuery::default().with_if_none_match("abc123");
        assert!(query.query_params().is_empty());

        let headers = query.headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(IF_NONE_MATCH).unwrap(), "abc123");
    }

    #[test]
    fn empty_if_none_match_sends_no_header() {
        let query = NameQuery::default().with_if_none_match("");
        assert!(query.headers().is_empty());
    }
}
