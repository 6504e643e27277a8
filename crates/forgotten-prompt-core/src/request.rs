//! Requests against the remote game API

use std::fmt;

/// HTTP method used by the game API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single call against the game API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Endpoint path relative to the base URL, e.g. `/look`
    pub endpoint: String,
    pub method: Method,
    /// JSON body; `None` means no body is sent at all
    pub body: Option<serde_json::Value>,
    /// Session forwarded as a `session=<id>` cookie
    pub session_id: Option<String>,
}

impl ApiRequest {
    /// GET request without body
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: Method::Get,
            body: None,
            session_id: None,
        }
    }

    /// POST request with a JSON body
    pub fn post(endpoint: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: Method::Post,
            body: Some(body),
            session_id: None,
        }
    }

    /// Attach the caller's session
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// `POST /start {level_id}`
    pub fn start_game(level_id: impl Into<String>) -> Self {
        Self::post(
            "/start",
            serde_json::json!({ "level_id": level_id.into() }),
        )
    }

    /// `GET /levels`
    pub fn list_levels() -> Self {
        Self::get("/levels")
    }
}
