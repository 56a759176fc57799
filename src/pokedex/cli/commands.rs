//! # CLI Layer
//!
//! This module is **one possible UI client** for the pokedex library, not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API and configuration
//! - `handle_*()`: Per-command handlers that call the API and format output
//!
//! The interactive `browse` loop lives in [`super::browse`].

use super::browse;
use super::render::{
    print_messages, render_detail, render_listing, render_text_list, render_types,
};
use super::setup::{Cli, Commands, ListArgs};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use pokedex::api::{ConfigAction, PokedexApi};
use pokedex::config::PokedexConfig;
use pokedex::error::{PokedexError, Result};
use pokedex::model::Pokemon;
use pokedex::source::http::HttpSource;
use std::future::Future;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Overrides the platform config directory.
pub const HOME_ENV: &str = "POKEDEX_HOME";

pub(super) struct AppContext {
    pub(super) api: PokedexApi<HttpSource>,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Needs neither config nor network.
    if let Some(Commands::Types) = &cli.command {
        print!("{}", render_types());
        return Ok(());
    }

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List(args)) => handle_list(&ctx, args).await,
        Some(Commands::Browse(args)) => browse::run(&ctx.api, args.controls(), args.page()).await,
        Some(Commands::Show { id }) => handle_show(&ctx, id).await,
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Types) => Ok(()),
        None => handle_list(&ctx, ListArgs::default()).await,
    }
}

/// `RUST_LOG` wins; otherwise `-v` turns on debug logs for this crate.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "pokedex=debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "pokedex", "pokedex")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PokedexError::Config("Could not determine config dir".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let mut config = PokedexConfig::load(&config_dir)?;
    if let Some(url) = &cli.base_url {
        config.set("api-base-url", url)?;
    }

    let source = HttpSource::new(&config)?;
    Ok(AppContext {
        api: PokedexApi::new(source, config, config_dir),
    })
}

/// Shows "Loading..." on stderr while `task` runs, when stderr is a terminal.
pub(super) async fn with_loading<T>(task: impl Future<Output = T>) -> T {
    let term = Term::stderr();
    let interactive = term.is_term();
    if interactive {
        let _ = term.write_line("Loading...");
    }
    let output = task.await;
    if interactive {
        let _ = term.clear_last_lines(1);
    }
    output
}

async fn handle_list(ctx: &AppContext, args: ListArgs) -> Result<()> {
    let collection: Vec<Pokemon> = with_loading(ctx.api.load_catalog()).await?;

    let mut controls = args.controls();
    // Left unclamped so an out-of-range page is reported instead of silently moved.
    controls.go_to(args.page(), usize::MAX);

    let result = ctx.api.list(&collection, &controls);
    if let Some(page) = &result.page {
        println!("{}", render_listing(page, &controls));
    }
    print_messages(&result.messages);
    Ok(())
}

async fn handle_show(ctx: &AppContext, id: u32) -> Result<()> {
    let result = with_loading(ctx.api.view_pokemon(id)).await?;
    if let Some(detail) = &result.detail {
        print!("{}", render_detail(detail));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if key.is_none() {
        let lines: Vec<String> = result
            .config
            .iter()
            .flat_map(|config| config.list_all())
            .map(|(k, v)| format!("{} = {}", k, v))
            .collect();
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages);
    Ok(())
}
