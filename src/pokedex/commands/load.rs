use super::enrich;
use crate::config::PokedexConfig;
use crate::error::{PokedexError, Result};
use crate::model::Pokemon;
use crate::source::CatalogSource;
use futures::future::join_all;
use futures::stream::{self, StreamExt};
use tracing::{info, warn};

/// Loads the whole catalog: one index request, then one detail request per entry.
///
/// The detail requests are issued together and awaited as a single batch. A failed
/// detail request degrades that entry instead of failing the batch, so the result
/// always has one entry per index result, in index order. Only an index failure
/// fails the load.
///
/// With `max_concurrent_requests` unset every detail request is in flight at once.
pub async fn run<S: CatalogSource>(source: &S, config: &PokedexConfig) -> Result<Vec<Pokemon>> {
    let index = source
        .fetch_index(config.index_limit)
        .await
        .map_err(|err| {
            warn!(error = %err, "catalog index request failed");
            PokedexError::IndexFetch(err.to_string())
        })?;

    info!(count = index.len(), "catalog index loaded; fetching details");

    let lookups = index.into_iter().map(|basic| enrich::run(source, basic));
    let collection: Vec<Pokemon> = match config.max_concurrent_requests {
        Some(width) => stream::iter(lookups).buffered(width).collect().await,
        None => join_all(lookups).await,
    };

    let degraded = collection.iter().filter(|p| !p.is_enriched()).count();
    info!(total = collection.len(), degraded, "catalog loaded");
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::{detail, InMemorySource};
    use std::time::Duration;

    fn catalog(count: u32) -> InMemorySource {
        (1..=count).fold(InMemorySource::new(), |source, n| {
            source.with_pokemon(n, &format!("e{}", n), detail(&["normal"], n, n * 10, Some(n)))
        })
    }

    #[tokio::test]
    async fn enriches_every_entry_in_index_order() {
        let source = catalog(23);
        let collection = run(&source, &PokedexConfig::default()).await.unwrap();

        assert_eq!(collection.len(), 23);
        assert!(collection.iter().all(Pokemon::is_enriched));
        let names: Vec<_> = collection.iter().map(|p| p.name.clone()).collect();
        let expected: Vec<_> = (1..=23).map(|n| format!("e{}", n)).collect();
        assert_eq!(names, expected);
        assert_eq!(collection[22].height, Some(23));
    }

    #[tokio::test]
    async fn detail_failures_never_drop_entries() {
        let source = InMemorySource::new()
            .with_pokemon(1, "bulbasaur", detail(&["grass", "poison"], 7, 69, Some(64)))
            .with_broken_pokemon(2, "ivysaur")
            .with_broken_pokemon(3, "venusaur")
            .with_pokemon(4, "charmander", detail(&["fire"], 6, 85, Some(62)));

        let collection = run(&source, &PokedexConfig::default()).await.unwrap();

        assert_eq!(collection.len(), source.index().len());
        assert_eq!(source.detail_calls(), 4);
        assert!(collection[0].is_enriched());
        assert!(!collection[1].is_enriched());
        assert!(!collection[2].is_enriched());
        assert_eq!(collection[2].name, "venusaur");
        assert!(collection[3].is_enriched());
    }

    #[tokio::test]
    async fn all_details_failing_still_yields_the_full_index() {
        let source = (1..=5).fold(InMemorySource::new(), |source, n| {
            source.with_broken_pokemon(n, &format!("broken{}", n))
        });

        let collection = run(&source, &PokedexConfig::default()).await.unwrap();
        assert_eq!(collection.len(), 5);
        assert!(collection.iter().all(|p| !p.is_enriched()));
    }

    #[tokio::test]
    async fn index_failure_fails_the_load() {
        let source = catalog(3).with_failing_index();

        let err = run(&source, &PokedexConfig::default()).await.unwrap_err();
        assert!(matches!(err, PokedexError::IndexFetch(_)));
        assert_eq!(err.to_string(), "Failed to fetch Pokémon data");
        assert_eq!(source.detail_calls(), 0);
    }

    #[tokio::test]
    async fn respects_index_limit() {
        let source = catalog(12);
        let config = PokedexConfig {
            index_limit: 5,
            ..PokedexConfig::default()
        };

        let collection = run(&source, &config).await.unwrap();
        assert_eq!(collection.len(), 5);
        assert_eq!(source.detail_calls(), 5);
    }

    #[tokio::test]
    async fn unbounded_batch_issues_every_request_at_once() {
        let source = catalog(20).with_latency(Duration::from_millis(20));

        run(&source, &PokedexConfig::default()).await.unwrap();
        assert_eq!(source.peak_in_flight(), 20);
    }

    #[tokio::test]
    async fn bounded_batch_caps_in_flight_requests_and_keeps_order() {
        let source = catalog(20).with_latency(Duration::from_millis(5));
        let config = PokedexConfig {
            max_concurrent_requests: Some(4),
            ..PokedexConfig::default()
        };

        let collection = run(&source, &config).await.unwrap();
        assert!(source.peak_in_flight() <= 4);
        assert_eq!(collection.len(), 20);
        assert_eq!(collection[0].name, "e1");
        assert_eq!(collection[19].name, "e20");
    }
}
