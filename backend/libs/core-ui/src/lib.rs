//! Render-ready UI primitives shared by feed feature crates
//!
//! These are plain value types consumed by a presentation layer; nothing
//! here renders anything itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A piece of display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiText {
    pub value: String,
}

impl UiText {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl fmt::Display for UiText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<&str> for UiText {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One selectable display row in a rendered list.
///
/// `selected` mirrors the active flag of the user the row was derived
/// from; the mapper that builds rows upholds that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiListItem {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_text_display() {
        let text = UiText::new("Feed (3)");
        assert_eq!(text.to_string(), "Feed (3)");
    }

    #[test]
    fn test_ui_text_from_str() {
        let text: UiText = "No data".into();
        assert_eq!(text.value, "No data");
    }

    #[test]
    fn test_ui_list_item_serde_round_trip() {
        let item = UiListItem {
            id: 0,
            title: "1. User Ada".to_string(),
            subtitle: Some("Active".to_string()),
            selected: true,
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: UiListItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
