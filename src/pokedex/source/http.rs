use super::wire::{DetailResponse, IndexResponse};
use super::CatalogSource;
use crate::config::PokedexConfig;
use crate::error::Result;
use crate::model::PokemonRef;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Catalog source backed by the public HTTP API.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(config: &PokedexConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url().to_string(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch_index(&self, limit: u32) -> Result<Vec<PokemonRef>> {
        let url = format!("{}/pokemon", self.base_url);
        debug!(%url, limit, "fetching catalog index");

        let index: IndexResponse = self
            .client
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(count = index.results.len(), "catalog index received");
        Ok(index.results)
    }

    async fn fetch_detail(&self, url: &str) -> Result<DetailResponse> {
        debug!(%url, "fetching detail");

        let detail = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(detail)
    }

    fn detail_url(&self, id: u32) -> String {
        format!("{}/pokemon/{}/", self.base_url, id)
    }
}
