//! Client settings resolved from flags, the environment and `.env`.

use std::time::Duration;

use anyhow::{Context, Result};
use nfd_api::{Client, Network};

pub const NETWORK_ENV: &str = "NFD_NETWORK";
pub const BASE_URL_ENV: &str = "NFD_BASE_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub network: Network,
    /// Overrides the network's root URL when set.
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl Settings {
    /// Flags win over environment variables; both are optional.
    pub fn resolve<F>(
        network_flag: Option<&str>,
        base_url_flag: Option<&str>,
        timeout_secs: u64,
        env: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = match network_flag.map(str::to_string).or_else(|| env(NETWORK_ENV)) {
            Some(raw) => raw
                .parse::<Network>()
                .with_context(|| format!("invalid network `{}` (mainnet, testnet, betanet)", raw))?,
            None => Network::default(),
        };
        let base_url = base_url_flag
            .map(str::to_string)
            .or_else(|| env(BASE_URL_ENV))
            .filter(|url| !url.is_empty());

        Ok(Self {
            network,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Builds the API client with the configured timeout.
    pub fn client(&self) -> Result<Client> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("nfd-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        let client = match &self.base_url {
            Some(url) => Client::with_base_url(url),
            None => Client::for_network(self.network),
        };
        Ok(client.with_http_client(http))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_mainnet() {
        let settings = Settings::resolve(None, None, 30, env_from(&[])).unwrap();
        assert_eq!(settings.network, Network::MainNet);
        assert_eq!(settings.base_url, None);
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert_eq!(settings.client().unwrap().base_url(), "https://api.nf.domains");
    }

    #[test]
    fn env_is_used_when_flags_are_absent() {
        let env = env_from(&[(NETWORK_ENV, "testnet"), (BASE_URL_ENV, "http://localhost:9000")]);
        let settings = Settings::resolve(None, None, 5, env).unwrap();
        assert_eq!(settings.network, Network::TestNet);
        assert_eq!(settings.client().unwrap().base_url(), "http://localhost:9000");
    }

    #[test]
    fn flags_win_over_env() {
        let env = env_from(&[(NETWORK_ENV, "testnet")]);
        let settings = Settings::resolve(Some("betanet"), None, 5, env).unwrap();
        assert_eq!(settings.network, Network::BetaNet);
        assert_eq!(
            settings.client().unwrap().base_url(),
            "https://api.betanet.nf.domains"
        );
    }

    #[test]
    fn unknown_network_is_an_error() {
        assert!(Settings::resolve(Some("devnet"), None, 5, env_from(&[])).is_err());
    }
}
