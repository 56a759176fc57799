//! # Catalog Sources
//!
//! The catalog lives behind a third-party, read-only HTTP API. The [`CatalogSource`]
//! trait abstracts the two calls the app makes against it so the fetch logic can be
//! exercised without a network.
//!
//! ## Implementations
//!
//! - [`http::HttpSource`]: Production source over `reqwest`
//!   - Index: `GET <base>/pokemon?limit=<N>`
//!   - Detail: `GET <url>` as reported by the index
//!
//! - [`memory::InMemorySource`]: Canned responses for testing
//!   - Per-URL failure injection
//!   - Tracks how many detail requests were in flight at once
//!
//! Neither implementation retries, caches, or authenticates. Every call is a plain
//! GET that may fail.

use crate::error::Result;
use crate::model::PokemonRef;
use async_trait::async_trait;

pub mod http;
pub mod memory;
pub mod wire;

pub use wire::DetailResponse;

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full index of basic references in one request.
    async fn fetch_index(&self, limit: u32) -> Result<Vec<PokemonRef>>;

    /// Fetch the detail resource at `url`.
    async fn fetch_detail(&self, url: &str) -> Result<DetailResponse>;

    /// Locator of the detail resource for a numeric id.
    fn detail_url(&self, id: u32) -> String;
}
