//! # PokeAPI Clients
//!
//! The catalog listing and per-entry detail calls, behind the [`PokeApi`]
//! trait so the selection coordinator can be driven by a test double.

pub mod client;
pub mod error;
pub mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_CATALOG_LIMIT, PokeApi, PokeApiClient};
pub use error::ApiError;
pub use types::{DetailRecord, ListEntry, Stat};
