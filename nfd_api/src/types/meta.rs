use serde::{Deserialize, Serialize};

/// Build information for the API server.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Version {
    #[serde(default)]
    pub app: String,
    #[serde(default)]
    pub version: String,
}

/// Registry-wide counters from `/nfd/totals`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub for_sale: Option<u64>,
    pub minted_totals: Option<MintedTotals>,
    pub total: Option<u64>,
    pub unique_owners: Option<u64>,
}

/// Names minted over a few trailing windows.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MintedTotals {
    #[serde(default)]
    pub day: u64,
    #[serde(default)]
    pub week: u64,
    #[serde(default)]
    pub month: u64,
    #[serde(default)]
    pub lifetime: u64,
}

/// Answer from `/nfd/isValid/{appID}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Valid {
    pub is_valid: bool,
    /// Reason when `is_valid` is false.
    #[serde(default)]
    pub message: String,
}
