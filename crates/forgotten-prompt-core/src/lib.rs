//! # forgotten-prompt-core
//!
//! Core types shared by the Forgotten Prompt tool server.
//!
//! This crate provides:
//! - Action kinds and the action-to-endpoint dispatch table
//! - Game API request descriptions
//! - Error taxonomy
//! - Server manifest

pub mod action;
pub mod error;
pub mod manifest;
pub mod request;

pub use action::{ActionKind, ActionRequest};
pub use error::{ForgottenPromptError, Result, error_codes};
pub use manifest::{PROTOCOL_VERSION, SUPPORTED_PROTOCOL_VERSIONS, ServerManifest};
pub use request::{ApiRequest, Method};
