//! # Control State
//!
//! The user-adjustable parameters that drive the listing pipeline: search text,
//! type filter, sort key, sort direction and the current page.
//!
//! Two rules hold for every mutation:
//!
//! - Changing the search, the type filter, the sort key or the sort direction
//!   resets the page to 1, even when the new value equals the old one.
//! - Page navigation never leaves `[1, total_pages]`.
//!
//! Nothing in here triggers a fetch. The collection is loaded once and the
//! pipeline is simply re-run against the new state.

use crate::model::PokemonType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Name,
    Height,
    Weight,
    BaseExperience,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Height => "height",
            SortKey::Weight => "weight",
            SortKey::BaseExperience => "base-experience",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Height => "Height",
            SortKey::Weight => "Weight",
            SortKey::BaseExperience => "Base Experience",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "name" => Ok(SortKey::Name),
            "height" => Ok(SortKey::Height),
            "weight" => Ok(SortKey::Weight),
            "base-experience" | "baseexperience" | "experience" | "xp" => {
                Ok(SortKey::BaseExperience)
            }
            _ => Err(format!(
                "Unknown sort key: {} (expected name, height, weight or base-experience)",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Asc => "Ascending",
            SortDirection::Desc => "Descending",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(format!("Unknown sort direction: {}", s)),
        }
    }
}

/// A single user interaction against the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlAction {
    Search(String),
    FilterType(Option<PokemonType>),
    SortBy(SortKey),
    SetDirection(SortDirection),
    ToggleDirection,
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
    GoToPage(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    search_query: String,
    type_filter: Option<PokemonType>,
    sort_key: SortKey,
    sort_direction: SortDirection,
    current_page: usize,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            type_filter: None,
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            current_page: 1,
        }
    }
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always lowercase.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn type_filter(&self) -> Option<PokemonType> {
        self.type_filter
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.to_lowercase();
        self.current_page = 1;
    }

    pub fn set_type_filter(&mut self, kind: Option<PokemonType>) {
        self.type_filter = kind;
        self.current_page = 1;
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
        self.current_page = 1;
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.sort_direction = direction;
        self.current_page = 1;
    }

    pub fn toggle_sort_direction(&mut self) {
        self.set_sort_direction(self.sort_direction.toggled());
    }

    /// Moves to `page`, clamped to `[1, total_pages]`.
    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    pub fn first(&mut self) {
        self.current_page = 1;
    }

    pub fn prev(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn next(&mut self, total_pages: usize) {
        self.go_to(self.current_page + 1, total_pages);
    }

    pub fn last(&mut self, total_pages: usize) {
        self.go_to(total_pages, total_pages);
    }

    /// Applies an interaction. `total_pages` is the page count of the listing
    /// the user is looking at, used to bound navigation.
    pub fn apply(&mut self, action: ControlAction, total_pages: usize) {
        match action {
            ControlAction::Search(query) => self.set_search(&query),
            ControlAction::FilterType(kind) => self.set_type_filter(kind),
            ControlAction::SortBy(key) => self.set_sort_key(key),
            ControlAction::SetDirection(direction) => self.set_sort_direction(direction),
            ControlAction::ToggleDirection => self.toggle_sort_direction(),
            ControlAction::FirstPage => self.first(),
            ControlAction::PrevPage => self.prev(),
            ControlAction::NextPage => self.next(total_pages),
            ControlAction::LastPage => self.last(total_pages),
            ControlAction::GoToPage(page) => self.go_to(page, total_pages),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page(page: usize) -> ControlState {
        let mut state = ControlState::new();
        state.go_to(page, 20);
        assert_eq!(state.current_page(), page);
        state
    }

    #[test]
    fn starts_on_first_page_sorted_by_name() {
        let state = ControlState::new();
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.sort_key(), SortKey::Name);
        assert_eq!(state.sort_direction(), SortDirection::Asc);
        assert_eq!(state.search_query(), "");
        assert_eq!(state.type_filter(), None);
    }

    #[test]
    fn search_is_lowercased() {
        let mut state = ControlState::new();
        state.set_search("PikaChu");
        assert_eq!(state.search_query(), "pikachu");
    }

    #[test]
    fn every_listing_change_resets_the_page() {
        let actions = [
            ControlAction::Search("char".into()),
            ControlAction::FilterType(Some(PokemonType::Fire)),
            ControlAction::SortBy(SortKey::Weight),
            ControlAction::SetDirection(SortDirection::Desc),
            ControlAction::ToggleDirection,
        ];
        for action in actions {
            let mut state = on_page(3);
            state.apply(action.clone(), 20);
            assert_eq!(state.current_page(), 1, "{:?} kept the page", action);
        }
    }

    #[test]
    fn unchanged_values_still_reset_the_page() {
        let mut state = on_page(4);
        state.set_search("");
        assert_eq!(state.current_page(), 1);

        let mut state = on_page(4);
        state.set_sort_key(SortKey::Name);
        assert_eq!(state.current_page(), 1);

        let mut state = on_page(4);
        state.set_type_filter(None);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut state = ControlState::new();
        state.prev();
        assert_eq!(state.current_page(), 1);

        state.next(3);
        state.next(3);
        state.next(3);
        assert_eq!(state.current_page(), 3);

        state.go_to(0, 3);
        assert_eq!(state.current_page(), 1);

        state.go_to(99, 3);
        assert_eq!(state.current_page(), 3);

        state.first();
        state.last(7);
        assert_eq!(state.current_page(), 7);
    }

    #[test]
    fn navigation_on_empty_listing_stays_on_page_one() {
        let mut state = ControlState::new();
        state.apply(ControlAction::NextPage, 1);
        state.apply(ControlAction::LastPage, 0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn toggle_flips_direction() {
        let mut state = ControlState::new();
        state.toggle_sort_direction();
        assert_eq!(state.sort_direction(), SortDirection::Desc);
        state.toggle_sort_direction();
        assert_eq!(state.sort_direction(), SortDirection::Asc);
    }

    #[test]
    fn parses_sort_keys_and_directions() {
        assert_eq!("Height".parse::<SortKey>(), Ok(SortKey::Height));
        assert_eq!("base_experience".parse::<SortKey>(), Ok(SortKey::BaseExperience));
        assert_eq!("xp".parse::<SortKey>(), Ok(SortKey::BaseExperience));
        assert!("speed".parse::<SortKey>().is_err());

        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("up".parse::<SortDirection>().is_err());
    }
}
