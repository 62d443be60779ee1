use chrono::{DateTime, Utc};

use crate::types::{ActivityType, SortOption};

use super::common::{Query, QueryParams};

const ACTIVITY_TYPES: &[ActivityType] = &[ActivityType::Changes];

/// The activity feed only understands newest-first ordering.
const ACTIVITY_SORTS: &[SortOption] = &[SortOption::TimeDesc];

/// Options for the change feed of one or more names (`/nfd/activity`).
///
/// The names themselves are passed to [`Client::activity`](crate::Client::activity).
#[derive(Clone, Debug, Default)]
pub struct ActivityQuery {
    pub activity_type: Option<ActivityType>,
    /// Only changes after this instant.
    pub after: Option<DateTime<Utc>>,
    pub limit: Option<u64>,
    pub sort: Option<SortOption>,
    pub if_none_match: Option<String>,
}

impl Query for ActivityQuery {
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_allowed("type", self.activity_type, ACTIVITY_TYPES);
        params.push_time("afterTime", self.after.as_ref());
        params.push_int("limit", self.limit);
        params.push_allowed("sort", self.sort, ACTIVITY_SORTS);
        params
    }

    fn if_none_match(&self) -> Option<&str> {
        self.if_none_match.as_deref()
    }
}

impl ActivityQuery {
    pub fn with_activity_type(mut self, activity_type: ActivityType) -> Self {
        self.activity_type = Some(activity_type);
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

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_if_none_match(mut self, etag: &str) -> Self {
        self.if_none_match = Some(etag.to_string());
        self
    }
}
