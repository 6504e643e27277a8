//! HTTP backend for the Forgotten Prompt tool server
//!
//! This crate provides:
//! - API configuration and lazy credential resolution
//! - Request construction with session cookie and log redaction
//! - `HttpGameApi`, the reqwest implementation of `GameApi`

pub mod client;
pub mod config;
pub mod request;

pub use client::HttpGameApi;
pub use config::{API_KEY_VAR, API_URL_VAR, ApiConfig, CredentialSource, DEFAULT_BASE_URL};
pub use request::{PreparedRequest, REDACTED, build_request};

#[cfg(test)]
mod tests {
    use super::*;
    use forgotten_prompt_server::tools::{
        LIST_LEVELS, PERFORM_ACTION, START_GAME, handle_tool_call,
    };
    use serde_json::json;

    #[tokio::test]
    async fn test_every_tool_reports_missing_credential() {
        let config = ApiConfig::new(
            DEFAULT_BASE_URL,
            CredentialSource::Env("FORGOTTEN_PROMPT_TEST_UNSET_KEY".into()),
        )
        .unwrap();
        let api = HttpGameApi::new(config);

        let calls = [
            (START_GAME, json!({ "level_id": "intro" }), "Error starting game"),
            (LIST_LEVELS, json!({}), "Error listing levels"),
            (
                PERFORM_ACTION,
                json!({ "session_id": "abc123", "action": "look" }),
                "Error performing action",
            ),
        ];

        for (tool, args, prefix) in calls {
            let result = handle_tool_call(tool, args, &api).await.unwrap();
            assert!(result.is_error, "{} should fail", tool);
            let text = result.text_content();
            assert!(text.starts_with(prefix), "{}", text);
            assert!(text.contains("FORGOTTEN_PROMPT_TEST_UNSET_KEY"), "{}", text);
        }
    }
}
