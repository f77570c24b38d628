//! Synthetic-model helpers for demos and load experiments
//!
//! These bypass the repository and build summaries directly; the rendered
//! shapes match what the real pipeline produces, minus the position
//! prefix on titles.

use core_model::CoreUser;
use core_ui::{UiListItem, UiText};

use crate::models::{FeedUiModel, UserSummary};
use crate::repository::to_user_summary;

pub fn transform_users_to_summaries(users: &[CoreUser]) -> Vec<UserSummary> {
    users.iter().map(to_user_summary).collect()
}

/// Rows with bare names as titles and 0-based positions as ids.
pub fn map_summaries_to_ui_items(summaries: &[UserSummary]) -> Vec<UiListItem> {
    summaries
        .iter()
        .enumerate()
        .map(|(index, summary)| UiListItem {
            id: index as i64,
            title: summary.name.clone(),
            subtitle: Some(
                if summary.is_active { "Active" } else { "Inactive" }.to_string(),
            ),
            selected: summary.is_active,
        })
        .collect()
}

/// A populated model of `count` synthetic summaries; even indexes are
/// active.
pub fn create_large_ui_model(count: usize) -> FeedUiModel {
    let summaries: Vec<UserSummary> = (0..count)
        .map(|i| UserSummary {
            id: i as i64,
            name: format!("User-{}", i),
            checksum: (i as i32).wrapping_mul(17),
            is_active: i % 2 == 0,
        })
        .collect();
    FeedUiModel {
        header: UiText::new(format!("Large model {}", count)),
        items: map_summaries_to_ui_items(&summaries),
        loading: false,
        error: None,
    }
}

pub fn ui_text_list(users: &[CoreUser]) -> Vec<UiText> {
    users
        .iter()
        .map(|user| UiText::new(format!("User: {}", user.name)))
        .collect()
}

/// `repeat` models whose sizes cycle through 1..=20.
pub fn build_many_ui_models(repeat: usize) -> Vec<FeedUiModel> {
    (0..repeat).map(|i| create_large_ui_model((i % 20) + 1)).collect()
}
