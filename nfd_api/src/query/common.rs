//! Shared query infrastructure: the [`Query`] trait, [`QueryParams`] and the closed-set check.

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::header::{HeaderMap, HeaderValue, IF_NONE_MATCH};
use url::Url;

use crate::types::{Category, Length, SaleType, State, Trait, View};

/// Every view the API knows about.
pub(crate) const ALL_VIEWS: &[View] = &[View::Tiny, View::Thumbnail, View::Brief, View::Full];

/// States the browse and analytics filters accept.
pub(crate) const FILTER_STATES: &[State] = &[State::Minting, State::ForSale, State::Owned];

pub(crate) const CATEGORIES: &[Category] =
    &[Category::Curated, Category::Premium, Category::Common];

pub(crate) const SALE_TYPES: &[SaleType] = &[SaleType::Auction, SaleType::BuyItNow];

pub(crate) const LENGTHS: &[Length] = &[
    Length::One,
    Length::Two,
    Length::Three,
    Length::Four,
    Length::Five,
    Length::Six,
    Length::Seven,
    Length::Eight,
    Length::Nine,
    Length::TenPlus,
];

/// Traits the browse and analytics filters accept.
pub(crate) const TRAITS: &[Trait] = &[Trait::Emoji];

/// Trait implemented by all per-endpoint queries. Turns a sparse set of
/// filters into query parameters and request headers.
///
/// Encoding never fails: unset fields and values outside a field's accepted
/// set are left out.
pub trait Query {
    /// Query parameters for this query, in field order.
    fn query_params(&self) -> QueryParams;

    /// Entity tag for a conditional fetch. Only some endpoints support it.
    fn if_none_match(&self) -> Option<&str> {
        None
    }

    /// Request headers for this query. Holds `if-none-match` when a
    /// non-empty tag is set, nothing otherwise.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(tag) = self.if_none_match().filter(|tag| !tag.is_empty()) {
            match HeaderValue::from_str(tag) {
                Ok(value) => {
                    headers.insert(IF_NONE_MATCH, value);
                }
                Err(e) => {
                    tracing::warn!("Dropping invalid if-none-match value {:?}: {}", tag, e);
                }
            }
        }
        headers
    }

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        self.query_params().append_to(url)
    }
}

/// Returns true when `value` is one of `allowed`.
pub fn is_allowed<T: PartialEq>(value: &T, allowed: &[T]) -> bool {
    allowed.contains(value)
}

/// Ordered multi-map of query parameter names to values.
///
/// A key may repeat; values keep their insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key=value` unconditionally.
    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.pairs.push((key, value.into()));
    }

    /// Appends a string value unless it is missing or empty.
    pub fn push_str(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.push(key, value);
        }
    }

    /// Appends an integer value unless it is missing or zero.
    pub fn push_int(&mut self, key: &'static str, value: Option<u64>) {
        if let Some(value) = value.filter(|v| *v != 0) {
            self.push(key, value.to_string());
        }
    }

    /// Appends `key=true` when the flag is set.
    pub fn push_flag(&mut self, key: &'static str, set: bool) {
        if set {
            self.push(key, "true");
        }
    }

    /// Appends an RFC 3339 timestamp (`2024-01-31T12:00:00Z`).
    pub fn push_time(&mut self, key: &'static str, value: Option<&DateTime<Utc>>) {
        if let Some(time) = value {
            self.push(key, time.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
    }

    /// Appends an enum token if it belongs to `allowed`; anything else is
    /// treated as unset.
    pub fn push_allowed<T>(&mut self, key: &'static str, value: Option<T>, allowed: &[T])
    where
        T: PartialEq + std::fmt::Display,
    {
        if let Some(value) = value.filter(|v| is_allowed(v, allowed)) {
            self.push(key, value.to_string());
        }
    }

    /// Appends one `key=token` per element of `values` that belongs to `allowed`.
    pub fn push_all_allowed<T>(&mut self, key: &'static str, values: &[T], allowed: &[T])
    where
        T: PartialEq + std::fmt::Display,
    {
        for value in values.iter().filter(|v| is_allowed(*v, allowed)) {
            self.push(key, value.to_string());
        }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| *k == key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Appends the parameters to `url`, sorted by key so equal queries always
    /// produce the same URL. Repeated keys keep their relative order.
    pub fn append_to(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if self.pairs.is_empty() {
            return url;
        }
        let mut sorted: Vec<(&str, &str)> = self.iter().collect();
        sorted.sort_by_key(|(k, _)| *k);
        url.query_pairs_mut().extend_pairs(sorted);
        url
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::types::SortOption;

    #[test]
    fn unset_sentinels_are_skipped() {
        let mut params = QueryParams::new();
        params.push_str("name", None);
        params.push_str("name", Some(""));
        params.push_int("limit", None);
        params.push_int("limit", Some(0));
        params.push_flag("poll", false);
        params.push_time("afterTime", None);
        params.push_allowed::<View>("view", None, ALL_VIEWS);
        params.push_all_allowed::<View>("view", &[], ALL_VIEWS);
        assert!(params.is_empty());
    }

    #[test]
    fn push_time_uses_rfc3339_with_z() {
        let mut params = QueryParams::new();
        let time = Utc.with_ymd_and_hms(2024, 1, 31, 12, 30, 5).unwrap();
        params.push_time("afterTime", Some(&time));
        assert_eq!(params.get("afterTime"), Some("2024-01-31T12:30:05Z"));
    }

    #[test]
    fn push_allowed_drops_values_outside_the_set() {
        let mut params = QueryParams::new();
        params.push_allowed(
            "sort",
            Some(SortOption::CreatedDesc),
            &[SortOption::TimeDesc, SortOption::PriceAsc],
        );
        assert!(!params.contains_key("sort"));

        params.push_allowed(
            "sort",
            Some(SortOption::PriceAsc),
            &[SortOption::TimeDesc, SortOption::PriceAsc],
        );
        assert_eq!(params.get("sort"), Some("priceAsc"));
    }

    #[test]
    fn repeated_keys_keep_order() {
        let mut params = QueryParams::new();
        params.push("name", "b.algo");
        params.push("limit", "2");
        params.push("name", "a.algo");
        assert_eq!(params.get_all("name"), vec!["b.algo", "a.algo"]);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn append_to_sorts_keys_and_leaves_empty_query_alone() {
        let url = Url::parse("https://example.com/nfd/browse").unwrap();
        assert_eq!(
            QueryParams::new().append_to(&url).as_str(),
            "https://example.com/nfd/browse"
        );

        let mut params = QueryParams::new();
        params.push("sort", "priceAsc");
        params.push("minPrice", "100");
        params.push("trait", "emoji");
        params.push("minPrice", "5");
        assert_eq!(
            params.append_to(&url).query(),
            Some("minPrice=100&minPrice=5&sort=priceAsc&trait=emoji")
        );
    }

    #[test]
    fn is_allowed_is_a_membership_test() {
        assert!(is_allowed(&State::Owned, FILTER_STATES));
        assert!(!is_allowed(&State::Reserved, FILTER_STATES));
    }
}
