//! # Listing Pipeline
//!
//! Turns the loaded collection plus the current [`ControlState`] into the page the
//! user sees. It is a pure function, re-run on every control change:
//!
//! ```text
//! collection ──filter──▶ matches ──sort──▶ ordered ──paginate──▶ page slice
//! ```
//!
//! 1. **Filter**: the name contains the (lowercased) search text, and the entry
//!    carries the selected type, if any.
//! 2. **Sort**: stable, keyed by [`SortKey`]. Names collate case-insensitively,
//!    numbers treat a missing value as 0. Descending reverses the comparator.
//! 3. **Paginate**: fixed pages of [`PAGE_SIZE`]. An empty result still has one
//!    (empty) page so the navigation controls stay well defined.
//!
//! The page window (the numbered buttons) is at most [`MAX_PAGE_BUTTONS`] wide,
//! centered on the current page and clamped at both ends, see [`page_window`].

use crate::controls::{ControlState, SortDirection, SortKey};
use crate::model::{Pokemon, PokemonType};
use serde::Serialize;
use std::cmp::Ordering;

pub const PAGE_SIZE: usize = 10;
pub const MAX_PAGE_BUTTONS: usize = 5;

/// One rendered page of the listing, plus what the navigation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingPage {
    pub entries: Vec<Pokemon>,
    pub total_matches: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub window: Vec<usize>,
}

impl ListingPage {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first_disabled(&self) -> bool {
        self.current_page <= 1
    }

    pub fn prev_disabled(&self) -> bool {
        self.first_disabled()
    }

    pub fn next_disabled(&self) -> bool {
        self.current_page >= self.total_pages
    }

    pub fn last_disabled(&self) -> bool {
        self.next_disabled()
    }

    /// 1-based position of the first entry of this page within all matches.
    pub fn first_position(&self) -> usize {
        (self.current_page - 1) * PAGE_SIZE + 1
    }
}

pub fn matches(pokemon: &Pokemon, query: &str, kind: Option<PokemonType>) -> bool {
    pokemon.name.to_lowercase().contains(query) && kind.map_or(true, |k| pokemon.has_type(k))
}

pub fn filter<'a>(
    collection: &'a [Pokemon],
    query: &str,
    kind: Option<PokemonType>,
) -> Vec<&'a Pokemon> {
    collection
        .iter()
        .filter(|pokemon| matches(pokemon, query, kind))
        .collect()
}

/// Case-insensitive collation. On a case-only tie the lowercase spelling sorts first.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

pub fn compare(a: &Pokemon, b: &Pokemon, key: SortKey) -> Ordering {
    let number = |value: Option<u32>| value.unwrap_or(0);
    match key {
        SortKey::Name => collate(&a.name, &b.name),
        SortKey::Height => number(a.height).cmp(&number(b.height)),
        SortKey::Weight => number(a.weight).cmp(&number(b.weight)),
        SortKey::BaseExperience => number(a.base_experience).cmp(&number(b.base_experience)),
    }
}

pub fn sort(entries: &mut [&Pokemon], key: SortKey, direction: SortDirection) {
    entries.sort_by(|a, b| match direction {
        SortDirection::Asc => compare(a, b, key),
        SortDirection::Desc => compare(a, b, key).reverse(),
    });
}

pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

/// The `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)` slice, empty when out of range.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if page == 0 || start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Page numbers to offer as buttons.
///
/// ```text
/// start = max(1, current - 2)
/// end   = start + 4
/// if end > total: end = total; start = max(1, end - 4)
/// ```
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    let half = MAX_PAGE_BUTTONS / 2;
    let mut start = current_page.saturating_sub(half).max(1);
    let mut end = start + MAX_PAGE_BUTTONS - 1;

    if end > total_pages {
        end = total_pages;
        start = end.saturating_sub(MAX_PAGE_BUTTONS - 1).max(1);
    }

    (start..=end).collect()
}

pub fn run(collection: &[Pokemon], controls: &ControlState) -> ListingPage {
    let mut ordered = filter(collection, controls.search_query(), controls.type_filter());
    sort(&mut ordered, controls.sort_key(), controls.sort_direction());

    let total_pages = total_pages(ordered.len());
    let current_page = controls.current_page();

    ListingPage {
        entries: page_slice(&ordered, current_page)
            .iter()
            .map(|pokemon| (*pokemon).clone())
            .collect(),
        total_matches: ordered.len(),
        current_page,
        total_pages,
        window: page_window(current_page, total_pages),
    }
}
