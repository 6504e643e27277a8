//! # forgotten-prompt-server
//!
//! MCP server exposing the Forgotten Prompt adventure API as tools.
//!
//! This crate provides:
//! - `GameApi` trait for plugging in the HTTP backend
//! - MCP JSON-RPC protocol handling
//! - Tool implementations (startGame, listLevels, performAction)
//! - stdio transport

pub mod api;
pub mod mcp;
pub mod tools;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use api::GameApi;
pub use mcp::ToolResult;

use forgotten_prompt_core::{Result, ServerManifest};
use std::sync::Arc;

/// Forgotten Prompt MCP server
pub struct ForgottenPromptServer<A: GameApi> {
    /// Backend executing game API requests
    api: Arc<A>,
    /// Identity reported during initialize
    manifest: ServerManifest,
}

impl<A: GameApi> ForgottenPromptServer<A> {
    /// Create a new server with the given backend
    pub fn new(api: A, manifest: ServerManifest) -> Self {
        Self {
            api: Arc::new(api),
            manifest,
        }
    }

    /// Run the server on stdio transport
    pub async fn run_stdio(self) -> Result<()> {
        transport::stdio::run(self).await
    }

    /// Get the server manifest
    pub fn manifest(&self) -> &ServerManifest {
        &self.manifest
    }
}
