//! Closed token sets accepted by the query endpoints.
//!
//! Each enum serializes to its wire token, displays as that token and parses
//! back from it. Parsing an unknown token fails with [`UnknownToken`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Returned when a string is not one of an enum's wire tokens.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown token `{0}`")]
pub struct UnknownToken(pub String);

/// How much of a record the API returns.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Name, owner and a handful of properties.
    Tiny,
    /// Like `Tiny`, plus avatar/banner thumbnails.
    Thumbnail,
    /// The API default.
    Brief,
    /// Every field, including all properties.
    Full,
}
impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Tiny => "tiny",
            View::Thumbnail => "thumbnail",
            View::Brief => "brief",
            View::Full => "full",
        }
    }
}
impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for View {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tiny" => Ok(View::Tiny),
            "thumbnail" => Ok(View::Thumbnail),
            "brief" => Ok(View::Brief),
            "full" => Ok(View::Full),
            _ => Err(UnknownToken(s.to_string())),
        }
    }
}

/// Result ordering. Not every endpoint accepts every option.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOption {
    #[serde(rename = "timeDesc")]
    TimeDesc,
    #[serde(rename = "priceAsc")]
    PriceAsc,
    #[serde(rename = "saleTypeAsc")]
    SaleTypeAsc,
    #[serde(rename = "priceDesc")]
    PriceDesc,
    #[serde(rename = "createdDesc")]
    CreatedDesc,
    #[serde(rename = "soldDesc")]
    SoldDesc,
    #[serde(rename = "highestSaleDesc")]
    HighestSaleDesc,
}
impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::TimeDesc => "timeDesc",
            SortOption::PriceAsc => "priceAsc",
            SortOption::SaleTypeAsc => "saleTypeAsc",
            SortOption::PriceDesc => "priceDesc",
            SortOption::CreatedDesc => "createdDesc",
            SortOption::SoldDesc => "soldDesc",
            SortOption::HighestSaleDesc => "highestSaleDesc",
        }
    }
}
impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for SortOption {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "timeDesc" => Ok(SortOption::TimeDesc),
            "priceAsc" => Ok(SortOption::PriceAsc),
            "saleTypeAsc" => Ok(SortOption::SaleTypeAsc),
            "priceDesc" => Ok(SortOption::PriceDesc),
            "createdDesc" => Ok(SortOption::CreatedDesc),
            "soldDesc" => Ok(SortOption::SoldDesc),
            "highestSaleDesc" => Ok(SortOption::HighestSaleDesc),
            _ => Err(UnknownToken(s.to_string())),
        }
    }
}

/// Kind of activity feed entry.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    /// Property and ownership changes.
    Changes,
}
impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Changes => "changes",
        }
    }
}
impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for ActivityType {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "changes" => Ok(ActivityType::Changes),
            _ => Err(UnknownToken(s.to_string())),
        }
    }
}

/// Length bucket of the name part (before `.algo`).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Length {
    #[serde(rename = "1_letters")]
    One,
    #[serde(rename = "2_letters")]
    Two,
    #[serde(rename = "3_letters")]
    Three,
    #[serde(rename = "4_letters")]
    Four,
    #[serde(rename = "5_letters")]
    Five,
    #[serde(rename = "6_letters")]
    Six,
    #[serde(rename = "7_letters")]
    Seven,
    #[serde(rename = "8_letters")]
    Eight,
    #[serde(rename = "9_letters")]
    Nine,
    #[serde(rename = "10+_letters")]
    TenPlus,
}
impl Length {
    pub fn as_str(&self) -> &'static str {
        match self {
            Length::One => "1_letters",
            Length::Two => "2_letters",
            Length::Three => "3_letters",
            Length::Four => "4_letters",
            Length::Five => "5_letters",
            Length::Six => "6_letters",
            Length::Seven => "7_letters",
            Length::Eight => "8_letters",
            Length::Nine => "9_letters",
            Length::TenPlus => "10+_letters",
        }
    }
}
impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for Length {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1_letters" => Ok(Length::One),
            "2_letters" => Ok(Length::Two),
            "3_letters" => Ok(Length::Three),
            "4_letters" => Ok(Length::Four),
            "5_letters" => Ok(Length::Five),
            "6_letters" => Ok(Length::Six),
            "7_letters" => Ok(Length::Seven),
            "8_letters" => Ok(Length::Eight),
            "9_letters" => Ok(Length::Nine),
            "10+_letters" => Ok(Length::TenPlus),
            _ => Err(UnknownToken(s.to_string())),
        }
    }
}

/// Name trait filter.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trait {
    /// Names containing emoji.
    Emoji,
}
impl Trait {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trait::Emoji => "emoji",
        }
    }
}
impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for Trait {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "emoji" => Ok(Trait::Emoji),
            _ => Err(UnknownToken(s.to_string())),
        }
    }
}
