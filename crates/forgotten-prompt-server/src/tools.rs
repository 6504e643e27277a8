//! MCP tool handlers for the adventure API

use forgotten_prompt_core::{
    ActionKind, ActionRequest, ApiRequest, ForgottenPromptError, Result,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::GameApi;
use crate::mcp::ToolResult;

pub const START_GAME: &str = "startGame";
pub const LIST_LEVELS: &str = "listLevels";
pub const PERFORM_ACTION: &str = "performAction";

/// Tool definition for MCP tools/list
#[derive(Debug, Clone, Serialize)]
pub struct ToolDef {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// Get list of available tools
pub fn list_tools() -> Vec<ToolDef> {
    let actions: Vec<&str> = ActionKind::ALL.iter().map(|a| a.as_str()).collect();

    vec![
        ToolDef {
            name: START_GAME.into(),
            description: "Start a new game session for a specific level.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "level_id": {
                        "type": "string",
                        "description": "The ID of the level to start"
                    }
                },
                "required": ["level_id"]
            }),
        },
        ToolDef {
            name: LIST_LEVELS.into(),
            description: "List available levels.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDef {
            name: PERFORM_ACTION.into(),
            description: "Perform an in-game action.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "session_id": {
                        "type": "string",
                        "description": "The current game session ID"
                    },
                    "action": {
                        "type": "string",
                        "enum": actions,
                        "description": "The action to perform"
                    },
                    "target": {
                        "type": "string",
                        "description": "The target of the action (e.g., item name, exit name)"
                    },
                    "indirect_target": {
                        "type": "string",
                        "description": "The second target for \"use\" action (optional)"
                    }
                },
                "required": ["session_id", "action"]
            }),
        },
    ]
}

/// Parameters for startGame
#[derive(Debug, Deserialize)]
pub struct StartGameParams {
    pub level_id: String,
}

/// Parameters for performAction
#[derive(Debug, Deserialize)]
pub struct PerformActionParams {
    pub session_id: String,
    /// Kept as a string so unknown verbs surface as validation errors
    pub action: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub indirect_target: Option<String>,
}

impl PerformActionParams {
    /// Build the dispatched API request, session included
    pub fn to_api_request(&self) -> Result<ApiRequest> {
        let kind: ActionKind = self.action.parse()?;
        let action = ActionRequest {
            kind,
            target: self.target.clone(),
            indirect_target: self.indirect_target.clone(),
        };
        Ok(action.dispatch()?.with_session(self.session_id.clone()))
    }
}

/// Handle a tools/call request
///
/// Only an unknown tool name is reported as `Err`. Every failure inside a
/// known tool is folded into an error envelope.
pub async fn handle_tool_call<A: GameApi>(
    name: &str,
    params: serde_json::Value,
    api: &A,
) -> Result<ToolResult> {
    let (context, result) = match name {
        START_GAME => ("starting game", handle_start_game(params, api).await),
        LIST_LEVELS => ("listing levels", handle_list_levels(api).await),
        PERFORM_ACTION => ("performing action", handle_perform_action(params, api).await),
        _ => {
            return Err(ForgottenPromptError::Protocol(format!(
                "Unknown tool: {}",
                name
            )));
        }
    };

    Ok(match result {
        Ok(value) => {
            debug!("Tool {} succeeded", name);
            ToolResult::text(value.to_string())
        }
        Err(e) => {
            warn!("Tool {} failed: {}", name, e);
            ToolResult::error(format!("Error {}: {}", context, e))
        }
    })
}

fn parse_params<T: serde::de::DeserializeOwned>(params: serde_json::Value) -> Result<T> {
    // Clients may omit arguments entirely for tools with no required fields
    let params = if params.is_null() {
        serde_json::json!({})
    } else {
        params
    };
    serde_json::from_value(params)
        .map_err(|e| ForgottenPromptError::Validation(format!("Invalid arguments: {}", e)))
}

async fn handle_start_game<A: GameApi>(
    params: serde_json::Value,
    api: &A,
) -> Result<serde_json::Value> {
    let p: StartGameParams = parse_params(params)?;
    api.invoke(ApiRequest::start_game(p.level_id)).await
}

async fn handle_list_levels<A: GameApi>(api: &A) -> Result<serde_json::Value> {
    api.invoke(ApiRequest::list_levels()).await
}

async fn handle_perform_action<A: GameApi>(
    params: serde_json::Value,
    api: &A,
) -> Result<serde_json::Value> {
    let p: PerformActionParams = parse_params(params)?;
    let request = p.to_api_request()?;
    api.invoke(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingApi;
    use forgotten_prompt_core::Method;
    use serde_json::json;

    #[test]
    fn test_list_tools_names() {
        let names: Vec<String> = list_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["startGame", "listLevels", "performAction"]);
    }

    #[test]
    fn test_perform_action_schema_lists_every_action() {
        let tools = list_tools();
        let schema = &tools[2].input_schema;
        let actions = schema["properties"]["action"]["enum"].as_array().unwrap();
        assert_eq!(actions.len(), 7);
        assert!(actions.contains(&json!("inventory")));
    }

    #[tokio::test]
    async fn test_start_game_success() {
        let api = RecordingApi::ok(json!({ "session_id": "s-1" }));
        let result = handle_tool_call(START_GAME, json!({ "level_id": "intro" }), &api)
            .await
            .unwrap();

        assert!(!result.is_error);
        assert_eq!(result.text_content(), r#"{"session_id":"s-1"}"#);
        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ApiRequest::start_game("intro"));
    }

    #[tokio::test]
    async fn test_list_levels_accepts_missing_arguments() {
        let api = RecordingApi::ok(json!(["intro", "cellar"]));
        let result = handle_tool_call(LIST_LEVELS, serde_json::Value::Null, &api)
            .await
            .unwrap();

        assert!(!result.is_error);
        assert_eq!(api.calls()[0], ApiRequest::list_levels());
    }

    #[tokio::test]
    async fn test_success_payload_is_serialized_compactly() {
        let api = RecordingApi::ok(json!({ "room": "hall" }));
        let result = handle_tool_call(
            PERFORM_ACTION,
            json!({ "session_id": "abc123", "action": "look" }),
            &api,
        )
        .await
        .unwrap();

        assert!(!result.is_error);
        assert!(result.text_content().contains(r#"{"room":"hall"}"#));
    }

    #[tokio::test]
    async fn test_perform_action_forwards_session() {
        let api = RecordingApi::ok(json!({}));
        handle_tool_call(
            PERFORM_ACTION,
            json!({ "session_id": "abc123", "action": "take", "target": "lamp" }),
            &api,
        )
        .await
        .unwrap();

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].endpoint, "/take");
        assert_eq!(calls[0].session_id.as_deref(), Some("abc123"));
        assert_eq!(calls[0].body, Some(json!({ "item_name": "lamp" })));
    }

    #[tokio::test]
    async fn test_missing_target_makes_no_call() {
        for action in ["move", "take", "drop", "use", "examine"] {
            let api = RecordingApi::ok(json!({}));
            let result = handle_tool_call(
                PERFORM_ACTION,
                json!({ "session_id": "abc123", "action": action }),
                &api,
            )
            .await
            .unwrap();

            assert!(result.is_error, "{} should fail", action);
            let text = result.text_content();
            assert!(text.starts_with("Error performing action: Target"), "{}", text);
            assert!(text.contains(&format!("{} action", action)), "{}", text);
            assert!(api.calls().is_empty(), "{} must not reach the API", action);
        }
    }

    #[tokio::test]
    async fn test_look_and_inventory_ignore_target() {
        for action in ["look", "inventory"] {
            let api = RecordingApi::ok(json!({}));
            let result = handle_tool_call(
                PERFORM_ACTION,
                json!({ "session_id": "abc123", "action": action, "target": "lamp" }),
                &api,
            )
            .await
            .unwrap();

            assert!(!result.is_error);
            let calls = api.calls();
            assert_eq!(calls[0].method, Method::Get);
            assert!(calls[0].body.is_none());
            assert_eq!(calls[0].endpoint, format!("/{}", action));
        }
    }

    #[tokio::test]
    async fn test_unknown_action_is_validation_error() {
        let api = RecordingApi::ok(json!({}));
        let result = handle_tool_call(
            PERFORM_ACTION,
            json!({ "session_id": "abc123", "action": "dance" }),
            &api,
        )
        .await
        .unwrap();

        assert!(result.is_error);
        assert_eq!(
            result.text_content(),
            "Error performing action: Unknown action: dance"
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_api_error_is_folded_into_envelope() {
        let api = RecordingApi::failing(|| ForgottenPromptError::Api {
            status: 404,
            body: "not found".into(),
        });
        let result = handle_tool_call(START_GAME, json!({ "level_id": "nope" }), &api)
            .await
            .unwrap();

        assert!(result.is_error);
        let text = result.text_content();
        assert!(text.starts_with("Error starting game:"), "{}", text);
        assert!(text.contains("404"));
        assert!(text.contains("not found"));
    }

    #[tokio::test]
    async fn test_malformed_arguments_are_folded_into_envelope() {
        let api = RecordingApi::ok(json!({}));
        let result = handle_tool_call(START_GAME, json!({ "level": 3 }), &api)
            .await
            .unwrap();

        assert!(result.is_error);
        assert!(result.text_content().contains("Invalid arguments"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_tool_is_protocol_error() {
        let api = RecordingApi::ok(json!({}));
        let result = handle_tool_call("teleport", json!({}), &api).await;
        let err = tokio_test::assert_err!(result);
        assert!(matches!(err, ForgottenPromptError::Protocol(_)));
    }
}
