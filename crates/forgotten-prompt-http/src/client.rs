//! reqwest-backed game API client

use async_trait::async_trait;
use forgotten_prompt_core::{ApiRequest, ForgottenPromptError, Result};
use forgotten_prompt_server::GameApi;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::request::build_request;

/// Game API backend issuing one HTTP request per call
///
/// Single attempt, no timeout, no retry.
pub struct HttpGameApi {
    client: Client,
    config: ApiConfig,
}

impl HttpGameApi {
    /// Create a new client
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl GameApi for HttpGameApi {
    async fn invoke(&self, request: ApiRequest) -> Result<serde_json::Value> {
        let credential = self.config.credential.resolve()?;
        let prepared = build_request(&self.config.base_url, &credential, &request)?;

        info!("{}", prepared.redacted());

        let mut builder = self
            .client
            .request(prepared.reqwest_method(), &prepared.url);
        for (name, value) in &prepared.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = prepared.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            ForgottenPromptError::Transport(format!("Request to {} failed: {}", prepared.url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("API {} {} returned {}", prepared.method, prepared.url, status);
            return Err(ForgottenPromptError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!("API {} {} returned {}", prepared.method, prepared.url, status);

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ForgottenPromptError::Transport(format!("Failed to parse response: {}", e)))
    }
}
