//! forgotten-prompt-server: MCP server for the Forgotten Prompt adventure
//!
//! Exposes startGame, listLevels and performAction as MCP tools over stdio,
//! forwarding each call to the remote game API.
//!
//! Configuration:
//! - `FORGOTTEN_PROMPT_API_KEY` (required, read on each API call)
//! - `FORGOTTEN_PROMPT_API_URL` (optional base URL override)
//! - `RUST_LOG` (log filter, default `info`; logs go to stderr)

use anyhow::Result;
use forgotten_prompt_core::ServerManifest;
use forgotten_prompt_http::{API_KEY_VAR, ApiConfig, HttpGameApi};
use forgotten_prompt_server::ForgottenPromptServer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment may already be populated
    let dotenv = dotenvy::dotenv();

    // Initialize logging; stdout carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Ok(path) = dotenv {
        info!("Loaded environment from {:?}", path);
    }

    let config = ApiConfig::from_env()?;
    if config.credential.resolve().is_err() {
        warn!(
            "{} is not set; tool calls will fail until it is provided",
            API_KEY_VAR
        );
    }

    let manifest = ServerManifest::default();
    info!(
        "Starting {} v{}, API base URL: {}",
        manifest.name, manifest.version, config.base_url
    );

    let server = ForgottenPromptServer::new(HttpGameApi::new(config), manifest);
    server.run_stdio().await?;

    info!("Shutting down");
    Ok(())
}
