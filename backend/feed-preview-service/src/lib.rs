//! Feed Preview Service
//!
//! Builds a render-ready feed preview for a single user: fetch the user
//! and a page of their posts through an injected API client, fingerprint
//! the snapshot, project users into feed items, and map those into a UI
//! list model. One configured instance of this crate replaces what used
//! to be a fleet of identical per-feature modules; the feed label and
//! page size are configuration.
//!
//! # Modules
//!
//! - `config`: environment-driven configuration
//! - `error`: error types and the service `Result` alias
//! - `models`: snapshot, summary, feed item, and UI model types
//! - `repository`: snapshot fetching, checksums, and projections
//! - `ui`: UI model construction (populated/empty/loading/error states)
//! - `service`: composition layer and demo entry points
//! - `demo`: synthetic-model helpers for demos and load experiments

pub mod config;
pub mod demo;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod ui;

pub use config::Config;
pub use error::{AppError, Result};
pub use repository::{FeedRepository, SnapshotSource};
pub use service::FeedService;
pub use ui::UiMapper;
