use crate::types::View;

use super::common::{Query, QueryParams};

/// Suggestions only come back in the brief or full shape.
const SUGGEST_VIEWS: &[View] = &[View::Brief, View::Full];

/// Options for name suggestions (`/nfd/suggest/{name}`).
#[derive(Clone, Debug, Default)]
pub struct SuggestQuery {
    pub limit: Option<u64>,
    pub view: Option<View>,
}

impl Query for SuggestQuery {
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_int("limit", self.limit);
        params.push_allowed("view", self.view, SUGGEST_VIEWS);
        params
    }
}

impl SuggestQuery {
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.view = Some(view);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_view_restricted_to_brief_and_full() {
        for view in [View::Brief, View::Full] {
            let params = SuggestQuery::default().with_view(view).query_params();
            assert_eq!(params.get("view"), Some(view.as_str()));
        }
        for view in [View::Tiny, View::Thumbnail] {
            let params = SuggestQuery::default().with_view(view).query_params();
            assert!(params.is_empty());
        }
    }

    #[test]
    fn suggest_limit() {
        let params = SuggestQuery::default().with_limit(3).query_params();
        assert_eq!(params.get("limit"), Some("3"));
    }
}
