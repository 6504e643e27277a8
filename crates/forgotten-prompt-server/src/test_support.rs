//! In-memory game API for tests

use async_trait::async_trait;
use forgotten_prompt_core::{ApiRequest, ForgottenPromptError, Result};
use std::sync::Mutex;

use crate::api::GameApi;

type Reply = Box<dyn Fn() -> Result<serde_json::Value> + Send + Sync>;

/// Records every request and answers with a fixed reply
pub struct RecordingApi {
    calls: Mutex<Vec<ApiRequest>>,
    reply: Reply,
}

impl RecordingApi {
    pub fn ok(value: serde_json::Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Box::new(move || Ok(value.clone())),
        }
    }

    pub fn failing(make_error: impl Fn() -> ForgottenPromptError + Send + Sync + 'static) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Box::new(move || Err(make_error())),
        }
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GameApi for RecordingApi {
    async fn invoke(&self, request: ApiRequest) -> Result<serde_json::Value> {
        self.calls.lock().unwrap().push(request);
        (self.reply)()
    }
}
