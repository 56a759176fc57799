use crate::config::PokedexConfig;
use crate::model::PokemonDetail;
use crate::pipeline::ListingPage;
use serde::Serialize;

pub mod config;
pub mod detail;
pub mod enrich;
pub mod list;
pub mod load;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub page: Option<ListingPage>,
    pub detail: Option<PokemonDetail>,
    pub config: Option<PokedexConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_page(mut self, page: ListingPage) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_detail(mut self, detail: PokemonDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_config(mut self, config: PokedexConfig) -> Self {
        self.config = Some(config);
        self
    }
}
