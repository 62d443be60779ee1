use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry from `/nfd/activity`: a set of changes applied to a name at a block.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub block: Option<u64>,

    #[serde(rename = "cache-control")]
    pub cache_control: Option<String>,

    /// Property name to new value.
    #[serde(default)]
    pub changes: BTreeMap<String, String>,

    pub etag: Option<String>,

    pub name: String,

    pub time_changed: Option<DateTime<Utc>>,
}
