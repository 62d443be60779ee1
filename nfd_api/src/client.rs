//! HTTP client for the NFD registry API.

use std::str::FromStr;

use reqwest::{header::ACCEPT, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{
        ActivityQuery, AddressQuery, AnalyticsQuery, AuctionQuery, BrowseQuery, NameQuery, Query,
        QueryParams, SuggestQuery,
    },
    types::{
        ActivityRecord, AnalyticRecords, AppID, AuctionAndPrice, Record, Totals, UnknownToken,
        Valid, Version,
    },
    Error,
};

/// Hosted API environments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Network {
    #[default]
    MainNet,
    TestNet,
    BetaNet,
}

impl Network {
    /// Root URL of the API for this network.
    pub fn base_url(&self) -> &'static str {
        match self {
            Network::MainNet => "https://api.nf.domains",
            Network::TestNet => "https://api.testnet.nf.domains",
            Network::BetaNet => "https://api.betanet.nf.domains",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Network::MainNet => "mainnet",
                Network::TestNet => "testnet",
                Network::BetaNet => "betanet",
            }
        )
    }
}

impl FromStr for Network {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::MainNet),
            "testnet" | "test" => Ok(Network::TestNet),
            "betanet" | "beta" => Ok(Network::BetaNet),
            _ => Err(UnknownToken(s.to_string())),
        }
    }
}

/// HTTP client for the NFD registry API.
///
/// Holds only a base URL and a `reqwest::Client`, so it is cheap to clone and
/// safe to share. Timeouts, proxies and TLS settings belong on the
/// `reqwest::Client` passed to [`Client::with_http_client`].
#[derive(Clone, Debug)]
pub struct Client {
    /// Root URL for the API. Defaults to the MainNet API.
    base_api_url: String,
    http: reqwest::Client,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the MainNet API.
    pub fn new() -> Self {
        Self::for_network(Network::MainNet)
    }

    /// Creates a new client pointing at one of the hosted networks.
    pub fn for_network(network: Network) -> Self {
        Self::with_base_url(network.base_url())
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Replaces the underlying transport.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(
        &self,
        segments: &[&str],
        required: &QueryParams,
        query: Option<&dyn Query>,
    ) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_api_url, e);
            Error::InvalidUrl(e)
        })?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl(self.base_api_url.clone()))?
            .pop_if_empty()
            .extend(segments);

        // Required parameters go first; optional ones are appended after them.
        let url = required.append_to(&url);
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get_text(
        &self,
        segments: &[&str],
        required: &QueryParams,
        query: Option<&dyn Query>,
    ) -> Result<String, Error> {
        let url = self.get_url(segments, required, query)?;
        let headers = query.map(|q| q.headers()).unwrap_or_default();
        tracing::debug!("GET {}", url);

        let resp = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .headers(headers)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get {}: {}", url, e);
                Error::Transport(e)
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::error!("Request to {} failed with status {}", url, status);
            return Err(Error::HttpStatus { status });
        }

        resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", url, e);
            Error::Transport(e)
        })
    }

    async fn get<T>(
        &self,
        segments: &[&str],
        required: &QueryParams,
        query: Option<&dyn Query>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let body = self.get_text(segments, required, query).await?;
        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse /{}: {} | body: {}",
                segments.join("/"),
                e,
                truncate_body(&body)
            );
            Error::Decode(e)
        })
    }

    /// Fetches the API server's build version.
    pub async fn version(&self) -> Result<Version, Error> {
        self.get(&["info", "version"], &QueryParams::new(), None)
            .await
    }

    /// Fetches registry-wide totals.
    pub async fn totals(&self) -> Result<Totals, Error> {
        self.get(&["nfd", "totals"], &QueryParams::new(), None)
            .await
    }

    /// Fetches a single name, e.g. `alice.algo`.
    ///
    /// With `if_none_match` set to the record's last `match-check`, an
    /// unchanged record comes back as [`Error::HttpStatus`] with 304.
    pub async fn name(&self, name: &str, query: Option<&NameQuery>) -> Result<Record, Error> {
        self.get(
            &["nfd", name],
            &QueryParams::new(),
            query.map(|q| q as &dyn Query),
        )
        .await
    }

    /// Fetches the change feed for the given names.
    pub async fn activity(
        &self,
        names: &[String],
        query: Option<&ActivityQuery>,
    ) -> Result<Vec<ActivityRecord>, Error> {
        let mut required = QueryParams::new();
        for name in names {
            required.push("name", name.as_str());
        }
        self.get(
            &["nfd", "activity"],
            &required,
            query.map(|q| q as &dyn Query),
        )
        .await
    }

    /// Finds the names linked to each of the given Algorand addresses.
    pub async fn address(
        &self,
        addresses: &[String],
        query: Option<&AddressQuery>,
    ) -> Result<Vec<Record>, Error> {
        let mut required = QueryParams::new();
        for address in addresses {
            required.push("address", address.as_str());
        }
        self.get(
            &["nfd", "address"],
            &required,
            query.map(|q| q as &dyn Query),
        )
        .await
    }

    /// Fetches marketplace history.
    pub async fn analytics(
        &self,
        query: Option<&AnalyticsQuery>,
    ) -> Result<AnalyticRecords, Error> {
        self.get(
            &["nfd", "analytics"],
            &QueryParams::new(),
            query.map(|q| q as &dyn Query),
        )
        .await
    }

    /// Lists open auctions with their current prices.
    pub async fn auction(
        &self,
        query: Option<&AuctionQuery>,
    ) -> Result<Vec<AuctionAndPrice>, Error> {
        self.get(
            &["nfd", "auction"],
            &QueryParams::new(),
            query.map(|q| q as &dyn Query),
        )
        .await
    }

    /// Lists names matching the given filters. Pagination is up to the caller.
    pub async fn browse(&self, query: Option<&BrowseQuery>) -> Result<Vec<Record>, Error> {
        self.get(
            &["nfd", "browse"],
            &QueryParams::new(),
            query.map(|q| q as &dyn Query),
        )
        .await
    }

    /// Checks whether an application ID is a genuine NFD contract.
    pub async fn is_valid(&self, app_id: AppID) -> Result<Valid, Error> {
        let app_id = app_id.to_string();
        self.get(&["nfd", "isValid", &app_id], &QueryParams::new(), None)
            .await
    }

    /// Fetches the signature address for a name's properties.
    pub async fn name_sig(&self, name: &str) -> Result<String, Error> {
        let body = self
            .get_text(&["nfd", "nameSig", name], &QueryParams::new(), None)
            .await?;
        parse_quoted_body(&body)
    }

    /// Fetches the reverse-address signature address for an Algorand address.
    pub async fn rev_sig(&self, address: &str) -> Result<String, Error> {
        let body = self
            .get_text(
                &["nfd", "revAddressSig", address],
                &QueryParams::new(),
                None,
            )
            .await?;
        parse_quoted_body(&body)
    }

    /// Suggests available or purchasable names similar to `name`.
    pub async fn suggest(
        &self,
        name: &str,
        query: Option<&SuggestQuery>,
    ) -> Result<Vec<Record>, Error> {
        self.get(
            &["nfd", "suggest", name],
            &QueryParams::new(),
            query.map(|q| q as &dyn Query),
        )
        .await
    }
}

/// Extracts the string from a body of the form `"VALUE"\n`.
///
/// One trailing newline (optionally `\r\n`) is removed, the remainder must be
/// a double-quoted string literal. Escapes are decoded.
pub(crate) fn parse_quoted_body(raw: &str) -> Result<String, Error> {
    let trimmed = match raw.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => raw,
    };
    if trimmed.len() < 2 || !trimmed.starts_with('"') || !trimmed.ends_with('"') {
        tracing::error!("Expected a quoted string, got: {}", truncate_body(raw));
        return Err(Error::MalformedBody(truncate_body(raw)));
    }
    serde_json::from_str::<String>(trimmed).map_err(|e| {
        tracing::error!("Failed to unquote {}: {}", truncate_body(raw), e);
        Error::MalformedBody(truncate_body(raw))
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_body_with_newline() {
        assert_eq!(
            parse_quoted_body("\"ABCDEFG\"\n").unwrap(),
            "ABCDEFG".to_string()
        );
        assert_eq!(parse_quoted_body("\"ABC\"\r\n").unwrap(), "ABC");
        assert_eq!(parse_quoted_body("\"ABC\"").unwrap(), "ABC");
        assert_eq!(parse_quoted_body("\"\"\n").unwrap(), "");
    }

    #[test]
    fn quoted_body_decodes_escapes() {
        assert_eq!(parse_quoted_body("\"a\\\"b\"\n").unwrap(), "a\"b");
    }

    #[test]
    fn malformed_quoted_bodies_are_errors() {
        for raw in ["", "\n", "\"", "\"\n", "ABC\n", "\"ABC", "ABC\"", "\"a\"b\"", "\"ABC\"\n\n"] {
            assert!(
                matches!(parse_quoted_body(raw), Err(Error::MalformedBody(_))),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(2500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert_eq!(truncated.chars().filter(|c| *c == 'é').count(), 2000);
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn network_urls_and_parsing() {
        assert_eq!(Network::MainNet.base_url(), "https://api.nf.domains");
        assert_eq!(Network::TestNet.base_url(), "https://api.testnet.nf.domains");
        assert_eq!(Network::BetaNet.base_url(), "https://api.betanet.nf.domains");
        assert_eq!("TestNet".parse::<Network>(), Ok(Network::TestNet));
        assert_eq!("beta".parse::<Network>(), Ok(Network::BetaNet));
        assert!("devnet".parse::<Network>().is_err());
    }

    #[test]
    fn get_url_percent_encodes_path_and_orders_params() {
        let client = Client::with_base_url("https://example.com/");
        let mut required = QueryParams::new();
        required.push("name", "b.algo");
        required.push("name", "a.algo");
        let query = ActivityQuery::default().with_limit(5);
        let url = client
            .get_url(&["nfd", "activity"], &required, Some(&query))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/nfd/activity?name=b.algo&name=a.algo&limit=5"
        );

        let url = client
            .get_url(&["nfd", "a b/c"], &QueryParams::new(), None)
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/nfd/a%20b%2Fc");
    }

    #[test]
    fn cannot_be_a_base_url_is_rejected() {
        let client = Client::with_base_url("mailto:someone@example.com");
        let result = client.get_url(&["nfd", "totals"], &QueryParams::new(), None);
        assert!(matches!(result, Err(Error::InvalidBaseUrl(_))));
    }
}
