//! CLI subcommand implementations.

pub mod activity;
pub mod address;
pub mod analytics;
pub mod auction;
pub mod browse;
pub mod info;
pub mod is_valid;
pub mod name;
pub mod suggest;

use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use nfd_api::types::UnknownToken;

/// Parses an optional enum flag, dropping unknown tokens with a warning so the
/// query runs unfiltered rather than failing.
pub(crate) fn parse_lenient<T>(flag: &str, value: Option<&str>) -> Option<T>
where
    T: FromStr<Err = UnknownToken>,
{
    let value = value?;
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!("Ignoring --{}: {}", flag, e);
            None
        }
    }
}

/// Like [`parse_lenient`], for repeatable flags.
pub(crate) fn parse_all_lenient<T>(flag: &str, values: &[String]) -> Vec<T>
where
    T: FromStr<Err = UnknownToken>,
{
    values
        .iter()
        .filter_map(|v| parse_lenient(flag, Some(v.as_str())))
        .collect()
}

/// Parses an RFC 3339 timestamp such as `2024-01-31T00:00:00Z`.
pub(crate) fn parse_after(value: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    value
        .map(|raw| {
            DateTime::parse_from_rfc3339(raw)
                .map(|t| t.with_timezone(&Utc))
                .with_context(|| format!("invalid --after `{}`, expected RFC 3339", raw))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use nfd_api::types::{SortOption, Trait, View};

    use super::*;

    #[test]
    fn lenient_parse_keeps_known_tokens() {
        assert_eq!(parse_lenient::<View>("view", Some("full")), Some(View::Full));
        assert_eq!(
            parse_lenient::<SortOption>("sort", Some("priceAsc")),
            Some(SortOption::PriceAsc)
        );
        assert_eq!(parse_lenient::<View>("view", None), None);
    }

    #[test]
    fn lenient_parse_drops_unknown_tokens() {
        assert_eq!(parse_lenient::<View>("view", Some("huge")), None);
        let traits: Vec<Trait> =
            parse_all_lenient("trait", &["emoji".to_string(), "shiny".to_string()]);
        assert_eq!(traits, vec![Trait::Emoji]);
    }

    #[test]
    fn after_accepts_offsets_and_normalizes_to_utc() {
        let after = parse_after(Some("2024-01-31T02:00:00+02:00")).unwrap().unwrap();
        assert_eq!(after.to_rfc3339(), "2024-01-31T00:00:00+00:00");
        assert!(parse_after(None).unwrap().is_none());
        assert!(parse_after(Some("yesterday")).is_err());
    }
}
