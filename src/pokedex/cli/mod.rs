//! # CLI Behavior
//!
//! This is **one possible UI client** for the pokedex library, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Naked Execution (`pokedex`)
//!
//! Running `pokedex` with no arguments is `pokedex list`: first page, sorted by
//! name, no filters.
//!
//! ## One-shot vs. Interactive
//!
//! - `list` / `show` / `config` / `types` run once and exit. A failed catalog
//!   load exits with status 1.
//! - `browse` loads the catalog once and then reads commands from stdin until
//!   `quit`, end of input or Ctrl-C. Every command re-renders from memory.
//!
//! ## Output
//!
//! Everything meant for the user goes to stdout. Logs and the "Loading..."
//! indicator go to stderr.

mod browse;
mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
