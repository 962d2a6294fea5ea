//! View assemblers: combine store reads with the query pipeline into the
//! response payload for each page type. Pure read path except where a view
//! explicitly mutates (profile lifecycle, recent-search recording).

pub mod account;
pub mod browse;
pub mod detail;
pub mod home;
pub mod my_list;
pub mod profiles;
pub mod search;

use catalog_models::{Content, WatchHistory};
use serde::Serialize;

pub use account::{account_view, AccountView};
pub use browse::{browse_view, BrowseParams, BrowseView};
pub use detail::{detail_view, DetailView};
pub use home::{home_view, ContentRow, FeaturedContent, HomeView};
pub use my_list::{my_list_view, MyListEntry, MyListView};
pub use profiles::{
    delete_profile, profile_edit_view, profile_select_view, select_profile, ProfileEditView,
    ProfileSelectView,
};
pub use search::{search_view, SearchParams, SearchView};

/// A continue-watching entry with its catalog record attached
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResumeItem {
    pub content: Content,
    pub history: WatchHistory,
}
