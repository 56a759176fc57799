//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every UI client.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Binds** the configured source and settings so callers don't thread them through
//! - **Returns structured types** (`Result<CmdResult>`, collections, pages)
//!
//! It does no terminal I/O and holds no listing state: the loaded collection and the
//! [`ControlState`] belong to the caller (see [`crate::session`]).
//!
//! ## Generic Over CatalogSource
//!
//! - Production: `PokedexApi<HttpSource>`
//! - Testing: `PokedexApi<InMemorySource>`

use crate::commands;
use crate::config::PokedexConfig;
use crate::controls::ControlState;
use crate::error::Result;
use crate::model::Pokemon;
use crate::source::CatalogSource;
use std::path::{Path, PathBuf};
use tokio::task::JoinHandle;

pub struct PokedexApi<S: CatalogSource> {
    source: S,
    config: PokedexConfig,
    config_dir: PathBuf,
}

impl<S: CatalogSource> PokedexApi<S> {
    pub fn new(source: S, config: PokedexConfig, config_dir: PathBuf) -> Self {
        Self {
            source,
            config,
            config_dir,
        }
    }

    /// Fetches the index and enriches every entry. Only an index failure is an error.
    pub async fn load_catalog(&self) -> Result<Vec<Pokemon>> {
        commands::load::run(&self.source, &self.config).await
    }

    /// Runs the listing pipeline over an already-loaded collection.
    pub fn list(&self, collection: &[Pokemon], controls: &ControlState) -> commands::CmdResult {
        commands::list::run(collection, controls)
    }

    pub async fn view_pokemon(&self, id: u32) -> Result<commands::CmdResult> {
        let detail = commands::detail::run(&self.source, id).await?;
        Ok(commands::CmdResult::default().with_detail(detail))
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn settings(&self) -> &PokedexConfig {
        &self.config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: CatalogSource + Clone + 'static> PokedexApi<S> {
    /// Starts the catalog load on the runtime and returns immediately.
    ///
    /// The task is not cancelled if the handle is dropped; it runs to completion
    /// and its result is simply never observed.
    pub fn spawn_load(&self) -> JoinHandle<Result<Vec<Pokemon>>> {
        let source = self.source.clone();
        let config = self.config.clone();
        tokio::spawn(async move { commands::load::run(&source, &config).await })
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::ControlAction;
    use crate::source::memory::{detail, InMemorySource};

    fn api(dir: &Path) -> PokedexApi<InMemorySource> {
        let source = InMemorySource::new()
            .with_pokemon(1, "bulbasaur", detail(&["grass", "poison"], 7, 69, Some(64)))
            .with_pokemon(4, "charmander", detail(&["fire"], 6, 85, Some(62)))
            .with_broken_pokemon(7, "squirtle");
        PokedexApi::new(source, PokedexConfig::default(), dir.to_path_buf())
    }

    #[tokio::test]
    async fn load_then_list_without_refetching() {
        let dir = tempfile::tempdir().unwrap();
        let api = api(dir.path());

        let collection = api.load_catalog().await.unwrap();
        assert_eq!(api.source().detail_calls(), 3);

        let mut controls = ControlState::new();
        controls.apply(ControlAction::FilterType(Some("fire".parse().unwrap())), 1);
        let result = api.list(&collection, &controls);
        let page = result.page.unwrap();
        assert_eq!(page.entries.len(), 1);
        assert_eq!(page.entries[0].name, "charmander");

        controls.apply(ControlAction::Search("sq".into()), 1);
        controls.apply(ControlAction::FilterType(None), 1);
        let page = api.list(&collection, &controls).page.unwrap();
        assert_eq!(page.entries[0].name, "squirtle");

        assert_eq!(api.source().detail_calls(), 3);
    }

    #[tokio::test]
    async fn view_dispatches_to_detail() {
        let dir = tempfile::tempdir().unwrap();
        let api = api(dir.path());

        let result = api.view_pokemon(4).await.unwrap();
        assert_eq!(result.detail.unwrap().name, "charmander");
        assert!(api.view_pokemon(7).await.is_err());
    }

    #[test]
    fn config_uses_the_bound_directory() {
        let dir = tempfile::tempdir().unwrap();
        let api = api(dir.path());

        api.config(ConfigAction::Set("index-limit".into(), "151".into()))
            .unwrap();
        assert!(api.config_dir().join("config.json").exists());
        assert_eq!(api.settings().index_limit, 1320);
    }
}
