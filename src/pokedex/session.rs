//! # Browsing Session
//!
//! A session is one "mount" of the listing view: it loads the collection once,
//! owns the [`ControlState`], and recomputes the visible page on demand.
//!
//! The load goes through [`LoadState`], which allows exactly one transition out of
//! `Loading`. A result that arrives after that transition, or after the session
//! was closed, is dropped without touching the state.

use crate::controls::{ControlAction, ControlState};
use crate::error::{Result, INDEX_FETCH_MESSAGE};
use crate::model::Pokemon;
use crate::pipeline::{self, ListingPage};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Vec<Pokemon>),
    Failed(String),
}

impl LoadState {
    /// Applies the load outcome. Returns `false` when the state had already settled.
    pub fn resolve(&mut self, outcome: Result<Vec<Pokemon>>) -> bool {
        if !matches!(self, LoadState::Loading) {
            return false;
        }
        *self = match outcome {
            Ok(collection) => LoadState::Ready(collection),
            Err(err) => {
                debug!(error = %err, "catalog load failed");
                LoadState::Failed(INDEX_FETCH_MESSAGE.to_string())
            }
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn collection(&self) -> Option<&[Pokemon]> {
        match self {
            LoadState::Ready(collection) => Some(collection),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    state: LoadState,
    controls: ControlState,
    closed: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_controls(controls: ControlState) -> Self {
        Self {
            controls,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    /// Hands the load outcome to the session. A no-op once closed or settled.
    pub fn resolve(&mut self, outcome: Result<Vec<Pokemon>>) -> bool {
        if self.closed {
            debug!("load finished after the session closed; ignoring");
            return false;
        }
        self.state.resolve(outcome)
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    /// The page for the current controls, once the collection is available.
    pub fn page(&self) -> Option<ListingPage> {
        self.state
            .collection()
            .map(|collection| pipeline::run(collection, &self.controls))
    }

    /// Applies a control change. Never re-fetches.
    pub fn apply(&mut self, action: ControlAction) {
        let total_pages = self.page().map_or(1, |page| page.total_pages);
        self.controls.apply(action, total_pages);
    }

    /// The entry shown at 1-based `row` of the current page.
    pub fn row(&self, row: usize) -> Option<Pokemon> {
        let page = self.page()?;
        row.checked_sub(1)
            .and_then(|index| page.entries.get(index))
            .cloned()
    }
}
