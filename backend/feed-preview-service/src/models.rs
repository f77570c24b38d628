use core_network::{ApiPostDto, ApiUserDto};
use core_ui::{UiListItem, UiText};
use serde::{Deserialize, Serialize};

/// Point-in-time bundle of one fetched user, their posts, and a combined
/// checksum over both.
///
/// `users` holds 0 or 1 entries. Transient: constructed per request, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub users: Vec<ApiUserDto>,
    pub posts: Vec<ApiPostDto>,
    pub raw_checksum: i32,
}

/// Reduced view of a user carrying only display-relevant fields.
///
/// `checksum` is derived from the name alone and is independent of any
/// snapshot checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub checksum: i32,
    pub is_active: bool,
}

/// A summary wrapped with a batch-sequential id and formatted display
/// strings, one per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub summary: UserSummary,
}

/// Final render-ready structure consumed by a presentation layer.
///
/// Exactly one of the four construction states holds at a time: populated,
/// empty, loading, or error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedUiModel {
    pub header: UiText,
    pub items: Vec<UiListItem>,
    pub loading: bool,
    pub error: Option<String>,
}
