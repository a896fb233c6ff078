//! App Configuration
//!
//! Read from the page: the API defaults to the page's own origin and can be
//! overridden with `<meta>` tags in `index.html`.

use kanban_client::{ClientConfig, DoneColumnRule, Result};
use tracing::Level;

pub const API_BASE_META: &str = "kanban-api-base";
pub const DONE_COLUMN_META: &str = "kanban-done-column";
pub const LOG_LEVEL_META: &str = "kanban-log-level";

const FALLBACK_ORIGIN: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub done_column: DoneColumnRule,
    pub log_level: Level,
}

impl AppConfig {
    pub fn from_values(
        origin: Option<String>,
        api_base: Option<String>,
        done_column: Option<String>,
        log_level: Option<String>,
    ) -> Self {
        let api_base = api_base
            .filter(|s| !s.trim().is_empty())
            .or(origin)
            .unwrap_or_else(|| FALLBACK_ORIGIN.to_string());
        Self {
            api_base,
            done_column: done_column
                .map(|raw| DoneColumnRule::parse(&raw))
                .unwrap_or_default(),
            log_level: log_level
                .map(|raw| console_logger::parse_level(&raw))
                .unwrap_or(Level::INFO),
        }
    }

    /// Read the page origin and meta overrides
    pub fn from_document() -> Self {
        let window = web_sys::window();
        let origin = window.as_ref().and_then(|w| w.location().origin().ok());
        let document = window.and_then(|w| w.document());
        let meta = |name: &str| -> Option<String> {
            let doc = document.as_ref()?;
            let selector = format!("meta[name=\"{}\"]", name);
            doc.query_selector(&selector).ok()??.get_attribute("content")
        };
        Self::from_values(
            origin,
            meta(API_BASE_META),
            meta(DONE_COLUMN_META),
            meta(LOG_LEVEL_META),
        )
    }

    pub fn client_config(&self) -> Result<ClientConfig> {
        Ok(ClientConfig::from_origin(&self.api_base)?.with_done_column(self.done_column.clone()))
    }
}
