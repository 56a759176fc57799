use crate::error::{PokedexError, Result};
use crate::model::PokemonDetail;
use crate::source::CatalogSource;
use tracing::debug;

/// Fetches the full record behind the detail view for `id`.
pub async fn run<S: CatalogSource>(source: &S, id: u32) -> Result<PokemonDetail> {
    let url = source.detail_url(id);
    debug!(id, %url, "loading detail view");

    let response = source
        .fetch_detail(&url)
        .await
        .map_err(|err| PokedexError::DetailFetch(err.to_string()))?;

    let mut detail = response.into_detail();
    if detail.id == 0 {
        detail.id = id;
    }
    Ok(detail)
}
