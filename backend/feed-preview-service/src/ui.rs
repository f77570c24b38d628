//! UI model construction
//!
//! The four constructors cover the complete state space of a rendered
//! feed: populated, empty, loading, and error. Callers pick one from
//! control flow; no transitions are modeled here.

use core_ui::{UiListItem, UiText};

use crate::models::{FeedItem, FeedUiModel};

/// Maps projected feed items into the render-ready model.
#[derive(Debug, Clone)]
pub struct UiMapper {
    label: String,
}

impl UiMapper {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Populated state: one row per feed item, in input order, titles
    /// prefixed with the 1-based position.
    pub fn map_to_ui(&self, items: &[FeedItem]) -> FeedUiModel {
        let rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| UiListItem {
                id: item.id,
                title: format!("{}. {}", index + 1, item.title),
                subtitle: item.subtitle.clone(),
                selected: item.summary.is_active,
            })
            .collect();
        FeedUiModel {
            header: UiText::new(format!("{} Feed ({})", self.label, items.len())),
            items: rows,
            loading: false,
            error: None,
        }
    }

    pub fn empty_state(&self) -> FeedUiModel {
        FeedUiModel {
            header: UiText::new("No data"),
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn loading_state(&self) -> FeedUiModel {
        FeedUiModel {
            header: UiText::new("Loading..."),
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn error_state(&self, message: impl Into<String>) -> FeedUiModel {
        FeedUiModel {
            header: UiText::new("Error"),
            items: Vec::new(),
            loading: false,
            error: Some(message.into()),
        }
    }
}
