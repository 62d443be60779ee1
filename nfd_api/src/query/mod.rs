mod common;
pub use self::common::{is_allowed, Query, QueryParams};

mod name;
pub use self::name::NameQuery;

mod activity;
pub use self::activity::ActivityQuery;

mod address;
pub use self::address::AddressQuery;

mod analytics;
pub use self::analytics::AnalyticsQuery;

mod auction;
pub use self::auction::AuctionQuery;

mod browse;
pub use self::browse::{BrowseQuery, DEFAULT_BROWSE_SORT, DEFAULT_BROWSE_VIEW};

mod suggest;
pub use self::suggest::SuggestQuery;
