mod de;
mod enums;
pub use self::enums::{ActivityType, Length, SortOption, Trait, UnknownToken, View};

mod record;
pub use self::record::{AppID, Category, Properties, Record, SaleType, State};

mod activity;
pub use self::activity::ActivityRecord;

mod analytics;
pub use self::analytics::{AnalyticEvent, AnalyticRecord, AnalyticRecords, Event};

mod auction;
pub use self::auction::{Auction, AuctionAndPrice};

mod meta;
pub use self::meta::{MintedTotals, Totals, Valid, Version};
