//! Directus content fetching for remdoc.
//!
//! This crate fetches the documentation tree (area -> category -> page) from a
//! Directus instance in a single query. The exporter never talks to Directus
//! directly; it receives a [`ContentSource`] handle instead.
//!
//! The crate provides:
//! - [`ContentSource`] trait with a single `fetch_documentation_tree()` method
//! - [`DirectusClient`] implementation over the Directus REST API
//! - [`StaticSource`] serving an in-memory tree (behind `mock` feature flag)

mod client;
mod error;
#[cfg(feature = "mock")]
mod mock;
mod query;
mod source;
pub mod types;

pub use client::DirectusClient;
pub use error::RemoteQueryError;
#[cfg(feature = "mock")]
pub use mock::StaticSource;
pub use query::{DOCUMENTATION_COLLECTION, DOCUMENTATION_FIELDS, ItemsQuery, MAX_AREAS};
pub use source::ContentSource;
pub use types::{AdditionalPath, Area, Category, ItemId, Page, PageTag, Tag};
