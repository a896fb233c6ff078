//! Client configuration

use url::Url;

use crate::error::Result;
use crate::models::DoneColumnRule;

/// Where the board API lives and how the done column is recognized
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub done_column: DoneColumnRule,
}

impl ClientConfig {
    /// Build a config for a server at `origin` (e.g. `http://localhost:5000`)
    pub fn from_origin(origin: &str) -> Result<Self> {
        let mut base_url = Url::parse(origin)?;
        // Url::join drops the last path segment unless the base ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            done_column: DoneColumnRule::default(),
        })
    }

    pub fn with_done_column(mut self, rule: DoneColumnRule) -> Self {
        self.done_column = rule;
        self
    }

    /// Absolute URL for an API path such as `api/task/101`
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}
