//! stdio transport for MCP JSON-RPC

use crate::ForgottenPromptServer;
use crate::api::GameApi;
use crate::mcp::{
    InitializeParams, InitializeResult, Request, RequestId, Response, ServerCapabilities,
    ServerInfo, ToolsCapability,
};
use crate::tools::{handle_tool_call, list_tools};
use forgotten_prompt_core::{ForgottenPromptError, Result, error_codes};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Run the MCP server on stdio
pub async fn run<A: GameApi>(server: ForgottenPromptServer<A>) -> Result<()> {
    serve(server, tokio::io::stdin(), tokio::io::stdout()).await
}

/// Serve newline-delimited JSON-RPC from `input`, writing responses to `output`.
///
/// Every request is handled on its own task; returns once `input` reaches EOF
/// and all in-flight requests have been answered.
pub async fn serve<A, R, W>(server: ForgottenPromptServer<A>, input: R, output: W) -> Result<()>
where
    A: GameApi,
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let server = Arc::new(server);
    let output = Arc::new(Mutex::new(output));
    let mut reader = BufReader::new(input);
    let mut line = String::new();
    let mut in_flight = JoinSet::new();

    info!("Forgotten Prompt MCP server starting on stdio");

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await.map_err(|e| {
            ForgottenPromptError::Protocol(format!("Failed to read stdin: {}", e))
        })?;

        if bytes_read == 0 {
            // EOF - client disconnected
            info!("Client disconnected (EOF)");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        debug!("Received: {}", trimmed);

        let request: Request = match serde_json::from_str(trimmed) {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to parse request: {}", e);
                continue;
            }
        };

        let Some(id) = request.id.clone() else {
            debug!("Notification: {}", request.method);
            continue;
        };

        let server = server.clone();
        let output = output.clone();
        in_flight.spawn(async move {
            let response = handle_request(id, &request, &server).await;
            if let Err(e) = write_response(&output, &response).await {
                error!("Failed to send response: {}", e);
            }
        });

        // Reap finished handlers so the set does not grow unbounded
        while let Some(joined) = in_flight.try_join_next() {
            if let Err(e) = joined {
                warn!("Request handler panicked: {}", e);
            }
        }
    }

    while let Some(joined) = in_flight.join_next().await {
        if let Err(e) = joined {
            warn!("Request handler panicked: {}", e);
        }
    }

    Ok(())
}

async fn write_response<W: AsyncWrite + Unpin>(
    output: &Mutex<W>,
    response: &Response,
) -> Result<()> {
    let response_json = serde_json::to_string(response)?;

    debug!("Sending: {}", response_json);

    let mut out = output.lock().await;
    out.write_all(response_json.as_bytes())
        .await
        .map_err(|e| ForgottenPromptError::Protocol(format!("Failed to write stdout: {}", e)))?;
    out.write_all(b"\n")
        .await
        .map_err(|e| ForgottenPromptError::Protocol(format!("Failed to write newline: {}", e)))?;
    out.flush()
        .await
        .map_err(|e| ForgottenPromptError::Protocol(format!("Failed to flush stdout: {}", e)))?;
    Ok(())
}

async fn handle_request<A: GameApi>(
    id: RequestId,
    request: &Request,
    server: &ForgottenPromptServer<A>,
) -> Response {
    match request.method.as_str() {
        "initialize" => handle_initialize(id, request, server),
        "ping" => Response::success(id, serde_json::json!({})),
        "tools/list" => handle_tools_list(id),
        "tools/call" => handle_tools_call(id, request, server).await,
        _ => Response::error(
            id,
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        ),
    }
}

fn handle_initialize<A: GameApi>(
    id: RequestId,
    request: &Request,
    server: &ForgottenPromptServer<A>,
) -> Response {
    let params: InitializeParams = match serde_json::from_value(request.params.clone()) {
        Ok(p) => p,
        Err(e) => {
            return Response::error(
                id,
                error_codes::INVALID_PARAMS,
                format!("Invalid initialize params: {}", e),
            );
        }
    };

    if let Some(client) = &params.client_info {
        info!(
            "Client {} v{} connected (protocol {})",
            client.name, client.version, params.protocol_version
        );
    }

    let manifest = server.manifest();
    let result = InitializeResult {
        protocol_version: manifest.negotiate_protocol(&params.protocol_version),
        capabilities: ServerCapabilities {
            tools: ToolsCapability {
                list_changed: false,
            },
        },
        server_info: ServerInfo {
            name: manifest.name.clone(),
            version: manifest.version.clone(),
        },
        instructions: manifest.instructions.clone(),
    };

    match serde_json::to_value(result) {
        Ok(value) => Response::success(id, value),
        Err(e) => Response::error(id, error_codes::INTERNAL_ERROR, e.to_string()),
    }
}

fn handle_tools_list(id: RequestId) -> Response {
    let tools = list_tools();
    Response::success(id, serde_json::json!({ "tools": tools }))
}

async fn handle_tools_call<A: GameApi>(
    id: RequestId,
    request: &Request,
    server: &ForgottenPromptServer<A>,
) -> Response {
    #[derive(serde::Deserialize)]
    struct ToolCallParams {
        name: String,
        #[serde(default)]
        arguments: serde_json::Value,
    }

    let params: ToolCallParams = match serde_json::from_value(request.params.clone()) {
        Ok(p) => p,
        Err(e) => {
            return Response::error(
                id,
                error_codes::INVALID_PARAMS,
                format!("Invalid tool call params: {}", e),
            );
        }
    };

    match handle_tool_call(&params.name, params.arguments, server.api.as_ref()).await {
        Ok(result) => match serde_json::to_value(result) {
            Ok(value) => Response::success(id, value),
            Err(e) => Response::error(id, error_codes::INTERNAL_ERROR, e.to_string()),
        },
        Err(e) => Response::error(id, error_codes::INVALID_PARAMS, e.to_string()),
    }
}
