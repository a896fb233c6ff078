//! HTTP client for the board server

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::models::Ack;

/// reqwest-backed implementation of [`super::BoardApi`]
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpBoardApi {
    http_client: Client,
    config: ClientConfig,
}

impl HttpBoardApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build request builder for an API path
    pub(crate) fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.config.endpoint(path)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send and decode a JSON response, mapping non-2xx to [`ApiError::Status`]
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<Ack>().await {
                Ok(Ack { error: Some(error), .. }) => error,
                _ => status.canonical_reason().unwrap_or("unknown status").to_string(),
            };
            return Err(ApiError::status(status, message));
        }
        Ok(response.json::<T>().await?)
    }

    /// Like [`Self::send_json`] for `{success, error}` replies
    pub(crate) async fn send_ack(&self, builder: RequestBuilder) -> Result<Ack> {
        let ack: Ack = self.send_json(builder).await?;
        if ack.success {
            Ok(ack)
        } else {
            Err(ApiError::Rejected(ack.error.unwrap_or_else(|| "unspecified".to_string())))
        }
    }
}
