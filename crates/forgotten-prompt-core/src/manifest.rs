//! Server manifest types

use serde::{Deserialize, Serialize};

/// Latest MCP protocol revision, offered when the client asks for one we don't know
pub const PROTOCOL_VERSION: &str = "2025-06-18";

/// MCP protocol revisions this server can speak, newest first
pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] = &["2025-06-18", "2025-03-26", "2024-11-05"];

/// Identity the server reports to connecting clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerManifest {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
    /// MCP protocol version
    pub protocol_version: String,
    /// Short usage hint returned to the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl ServerManifest {
    /// Pick the protocol revision to answer `initialize` with.
    ///
    /// Echoes the client's request when supported, else our latest.
    pub fn negotiate_protocol(&self, requested: &str) -> String {
        if SUPPORTED_PROTOCOL_VERSIONS.contains(&requested) {
            requested.to_string()
        } else {
            self.protocol_version.clone()
        }
    }
}

impl Default for ServerManifest {
    fn default() -> Self {
        Self {
            name: "forgotten-prompt".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            protocol_version: PROTOCOL_VERSION.into(),
            instructions: Some(
                "Call listLevels, then startGame with a level_id. Pass the returned \
                 session id to every performAction call."
                    .into(),
            ),
        }
    }
}
