use thiserror::Error;

/// Generic message surfaced when the catalog index cannot be fetched.
pub const INDEX_FETCH_MESSAGE: &str = "Failed to fetch Pokémon data";

/// Generic message surfaced when a single Pokémon cannot be fetched for the detail view.
pub const DETAIL_FETCH_MESSAGE: &str = "Failed to fetch Pokemon data";

#[derive(Error, Debug)]
pub enum PokedexError {
    /// The index request failed. The cause is logged, the message stays generic.
    #[error("Failed to fetch Pokémon data")]
    IndexFetch(String),

    #[error("Failed to fetch Pokemon data")]
    DetailFetch(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PokedexError>;
