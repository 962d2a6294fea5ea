pub mod account;
pub mod content;
pub mod genre;
pub mod profile;
pub mod season;
pub mod watch_history;
pub mod watchlist;

pub use account::{
    DataUsage, DownloadQuality, Language, MaturityLevel, NotificationSettings, PlaybackSettings,
    SubscriptionDetails,
};
pub use content::{CastMember, Content, ContentRating, ContentType};
pub use genre::Genre;
pub use profile::{SubscriptionPlan, User, UserProfile};
pub use season::{Episode, Season};
pub use watch_history::WatchHistory;
pub use watchlist::WatchlistItem;
