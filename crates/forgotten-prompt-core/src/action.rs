//! In-game actions and their mapping onto the game API

use std::fmt;
use std::str::FromStr;

use crate::error::{ForgottenPromptError, Result};
use crate::request::ApiRequest;

/// The verbs accepted by `performAction`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Move,
    Take,
    Drop,
    Use,
    Examine,
    Look,
    Inventory,
}

impl ActionKind {
    /// All action kinds, in the order they are advertised
    pub const ALL: [ActionKind; 7] = [
        ActionKind::Move,
        ActionKind::Take,
        ActionKind::Drop,
        ActionKind::Use,
        ActionKind::Examine,
        ActionKind::Look,
        ActionKind::Inventory,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Move => "move",
            ActionKind::Take => "take",
            ActionKind::Drop => "drop",
            ActionKind::Use => "use",
            ActionKind::Examine => "examine",
            ActionKind::Look => "look",
            ActionKind::Inventory => "inventory",
        }
    }

    /// Human description of the target, or `None` if the action takes none
    pub fn target_description(self) -> Option<&'static str> {
        match self {
            ActionKind::Move => Some("exit name"),
            ActionKind::Take | ActionKind::Drop => Some("item name"),
            ActionKind::Use => Some("direct object"),
            ActionKind::Examine => Some("item/exit name"),
            ActionKind::Look | ActionKind::Inventory => None,
        }
    }

    pub fn requires_target(self) -> bool {
        self.target_description().is_some()
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = ForgottenPromptError;

    fn from_str(s: &str) -> Result<Self> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ForgottenPromptError::Validation(format!("Unknown action: {}", s)))
    }
}

/// An action as requested by the agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub kind: ActionKind,
    pub target: Option<String>,
    /// Only meaningful for `use`
    pub indirect_target: Option<String>,
}

impl ActionRequest {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            target: None,
            indirect_target: None,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_indirect_target(mut self, indirect_target: impl Into<String>) -> Self {
        self.indirect_target = Some(indirect_target.into());
        self
    }

    /// Map the action onto its endpoint, method and body.
    ///
    /// Fails with a validation error when a required target is missing.
    /// The session is attached by the caller.
    pub fn dispatch(&self) -> Result<ApiRequest> {
        let request = match self.kind {
            ActionKind::Move => {
                let target = self.required_target()?;
                ApiRequest::post("/move", serde_json::json!({ "exit_name": target }))
            }
            ActionKind::Take => {
                let target = self.required_target()?;
                ApiRequest::post("/take", serde_json::json!({ "item_name": target }))
            }
            ActionKind::Drop => {
                let target = self.required_target()?;
                ApiRequest::post("/drop", serde_json::json!({ "item_name": target }))
            }
            ActionKind::Use => {
                let target = self.required_target()?;
                let mut body = serde_json::Map::new();
                body.insert("direct_object".into(), target.into());
                if let Some(indirect) = &self.indirect_target {
                    body.insert("indirect_object".into(), indirect.clone().into());
                }
                ApiRequest::post("/use", serde_json::Value::Object(body))
            }
            ActionKind::Examine => {
                let target = self.required_target()?;
                ApiRequest::post("/examine", serde_json::json!({ "target": target }))
            }
            ActionKind::Look => ApiRequest::get("/look"),
            ActionKind::Inventory => ApiRequest::get("/inventory"),
        };
        Ok(request)
    }

    fn required_target(&self) -> Result<&str> {
        match self.target.as_deref() {
            Some(target) if !target.is_empty() => Ok(target),
            _ => Err(ForgottenPromptError::Validation(format!(
                "Target ({}) is required for {} action.",
                self.kind.target_description().unwrap_or("target"),
                self.kind
            ))),
        }
    }
}
