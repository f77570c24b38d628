//! Core domain model shared by feed feature crates
//!
//! Holds the canonical user value type, the deterministic checksum
//! primitives used for snapshot fingerprinting, and the synthetic user
//! factory used by demo flows and tests.

pub mod checksum;
pub mod factory;

use serde::{Deserialize, Serialize};

/// Canonical user record
///
/// Immutable once produced; consumed by the projection stage of the feed
/// pipeline. `email` is optional because several producers (the synthetic
/// factory, snapshot reconstruction) never carry one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreUser {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub is_active: bool,
}

impl CoreUser {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
            is_active: true,
        }
    }
}
