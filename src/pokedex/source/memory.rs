use super::wire::{DetailResponse, NamedResource, Sprites, TypeSlot};
use super::CatalogSource;
use crate::error::{PokedexError, Result};
use crate::model::PokemonRef;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const BASE_URL: &str = "https://pokeapi.test/api/v2";

/// In-memory catalog for tests. Entries are served in insertion order.
#[derive(Debug, Default)]
pub struct InMemorySource {
    index: Vec<PokemonRef>,
    details: HashMap<String, DetailResponse>,
    failing: HashSet<String>,
    index_fails: bool,
    latency: Option<Duration>,
    detail_calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry whose detail resource resolves to `detail`.
    pub fn with_pokemon(mut self, id: u32, name: &str, mut detail: DetailResponse) -> Self {
        let url = format!("{}/pokemon/{}/", BASE_URL, id);
        detail.id = id;
        detail.name = name.to_string();
        self.index.push(PokemonRef::new(name, url.clone()));
        self.details.insert(url, detail);
        self
    }

    /// Adds an entry whose detail request fails.
    pub fn with_broken_pokemon(mut self, id: u32, name: &str) -> Self {
        let url = format!("{}/pokemon/{}/", BASE_URL, id);
        self.index.push(PokemonRef::new(name, url.clone()));
        self.failing.insert(url);
        self
    }

    pub fn with_failing_index(mut self) -> Self {
        self.index_fails = true;
        self
    }

    /// Delays every detail response, so concurrent requests overlap.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    pub fn index(&self) -> &[PokemonRef] {
        &self.index
    }
}

/// Shorthand for a detail payload carrying only the listing fields.
pub fn detail(
    types: &[&str],
    height: u32,
    weight: u32,
    base_experience: Option<u32>,
) -> DetailResponse {
    DetailResponse {
        sprites: Sprites {
            front_default: Some(format!("https://img.test/{}-{}.png", height, weight)),
        },
        types: types
            .iter()
            .map(|name| TypeSlot {
                kind: NamedResource {
                    name: name.to_string(),
                },
            })
            .collect(),
        height,
        weight,
        base_experience,
        ..DetailResponse::default()
    }
}

#[async_trait]
impl CatalogSource for InMemorySource {
    async fn fetch_index(&self, limit: u32) -> Result<Vec<PokemonRef>> {
        if self.index_fails {
            return Err(PokedexError::Api("index unavailable".to_string()));
        }
        Ok(self.index.iter().take(limit as usize).cloned().collect())
    }

    async fn fetch_detail(&self, url: &str) -> Result<DetailResponse> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        } else {
            tokio::task::yield_now().await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(url) {
            return Err(PokedexError::Api(format!("detail unavailable: {}", url)));
        }
        self.details
            .get(url)
            .cloned()
            .ok_or_else(|| PokedexError::Api(format!("no such resource: {}", url)))
    }

    fn detail_url(&self, id: u32) -> String {
        format!("{}/pokemon/{}/", BASE_URL, id)
    }
}
