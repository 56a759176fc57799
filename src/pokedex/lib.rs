//! # Pokedex Architecture
//!
//! Pokedex is a **UI-agnostic catalog browsing library** for the public PokeAPI
//! dataset, with a terminal client on top. The library fetches the catalog, keeps
//! it in memory, and turns user controls into the page to display; the client only
//! parses input and prints.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, runs browse loop    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Session (session.rs)                  │
//! │  - Thin facade over commands                                │
//! │  - Session owns load state and control state                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, pipeline.rs, controls.rs)    │
//! │  - Load: index + concurrent detail enrichment               │
//! │  - Pipeline: filter → sort → paginate, page window          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source/)                                     │
//! │  - CatalogSource trait                                      │
//! │  - HttpSource (production), InMemorySource (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! The catalog is loaded once per session: one index request, then one detail
//! request per entry, all in flight together. A failed detail request keeps the
//! entry with its detail fields unknown; only an index failure fails the load.
//! After that, every control change (search, type filter, sort, page) re-runs the
//! pure listing pipeline over the in-memory collection. Nothing is re-fetched and
//! nothing is persisted.
//!
//! ## Testing Strategy
//!
//! 1. **Pipeline / controls**: plain unit tests, no I/O.
//! 2. **Commands**: async tests against `InMemorySource`, including failure
//!    injection and concurrency measurements.
//! 3. **CLI**: argument parsing and rendering unit tests, plus end-to-end runs of
//!    the binary against a local stub HTTP server (`tests/`).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Load, list, detail and config operations
//! - [`pipeline`]: Filter, sort, paginate and the page window
//! - [`controls`]: Control state and its reset/clamp rules
//! - [`session`]: Load state machine and browsing session
//! - [`source`]: Catalog source abstraction and implementations
//! - [`model`]: Core data types (`PokemonRef`, `Pokemon`, `PokemonDetail`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod controls;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod session;
pub mod source;
