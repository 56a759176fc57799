use crate::model::{Pokemon, PokemonRef};
use crate::source::CatalogSource;
use tracing::warn;

/// Fetches the detail resource for `basic` and merges in the listing fields.
///
/// Never fails: when the detail request errors the bare reference comes back
/// unchanged, so the entry still shows up in the listing.
pub async fn run<S: CatalogSource + ?Sized>(source: &S, basic: PokemonRef) -> Pokemon {
    match source.fetch_detail(&basic.url).await {
        Ok(detail) => detail.enrich(basic),
        Err(err) => {
            warn!(name = %basic.name, error = %err, "failed to fetch details; keeping basic entry");
            Pokemon::from(basic)
        }
    }
}
