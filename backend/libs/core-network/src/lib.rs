//! Network collaborator surface for feed feature crates
//!
//! Defines the wire DTOs, the `NetworkClient`/`ApiClient` traits that
//! consumers inject, and in-process fake implementations that simulate a
//! backend. The fakes are the only implementations shipped here; a real
//! transport would implement the same traits.

pub mod api;
pub mod client;
pub mod error;
pub mod models;

pub use api::{ApiClient, FakeApiService};
pub use client::{FakeNetworkClient, NetworkClient};
pub use error::{NetworkError, Result};
pub use models::{ApiPostDto, ApiUserDto, NetworkRequest, NetworkResponse};
