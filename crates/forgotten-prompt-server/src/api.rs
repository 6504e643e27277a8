//! Game API trait

use async_trait::async_trait;
use forgotten_prompt_core::{ApiRequest, Result};
use std::sync::Arc;

/// Trait for backends that execute game API requests
///
/// Implement this trait to connect the tool server to a game service.
/// Each call is independent; implementations hold no per-session state.
#[async_trait]
pub trait GameApi: Send + Sync + 'static {
    /// Execute one request and return the decoded JSON payload
    async fn invoke(&self, request: ApiRequest) -> Result<serde_json::Value>;
}

#[async_trait]
impl<T: GameApi + ?Sized> GameApi for Arc<T> {
    async fn invoke(&self, request: ApiRequest) -> Result<serde_json::Value> {
        (**self).invoke(request).await
    }
}
