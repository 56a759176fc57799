//! # Pokedex CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/pokedex/cli/`, while
//! this file only starts the runtime, invokes `cli::run()` and handles process
//! termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + handlers (commands.rs)                  │
//! │  - Interactive session loop (browse.rs)                     │
//! │  - Template rendering (render.rs, templates/)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (lib.rs): api → commands → pipeline → source       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors bubble up as `PokedexError`, are printed as `Error: <message>` on
//! stderr, and exit with status 1.

mod cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
