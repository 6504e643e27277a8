//! HTTP request construction for the game API

use forgotten_prompt_core::{ApiRequest, Method, Result};

/// Marker logged in place of the authorization value
pub const REDACTED: &str = "[REDACTED]";

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const COOKIE: &str = "Cookie";

/// A fully built HTTP request, ready to send
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub url: String,
    pub method: Method,
    /// Header name/value pairs in send order
    pub headers: Vec<(&'static str, String)>,
    /// Serialized JSON body; `None` sends no body at all
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Look up a header value by name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Diagnostic description with the authorization value masked
    pub fn redacted(&self) -> String {
        let headers: serde_json::Map<String, serde_json::Value> = self
            .headers
            .iter()
            .map(|(name, value)| {
                let shown = if name.eq_ignore_ascii_case(AUTHORIZATION) {
                    REDACTED
                } else {
                    value.as_str()
                };
                (name.to_string(), serde_json::Value::from(shown))
            })
            .collect();

        format!(
            "Making API call: URL: {} Method: {} Headers: {} Body: {}",
            self.url,
            self.method,
            serde_json::Value::Object(headers),
            self.body.as_deref().unwrap_or("N/A")
        )
    }

    pub(crate) fn reqwest_method(&self) -> reqwest::Method {
        match self.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// Build the HTTP request for `request` against `base_url`
pub fn build_request(
    base_url: &str,
    credential: &str,
    request: &ApiRequest,
) -> Result<PreparedRequest> {
    let mut headers = vec![
        (AUTHORIZATION, credential.to_string()),
        (CONTENT_TYPE, "application/json".to_string()),
    ];

    // An empty session is the same as none
    if let Some(session_id) = request.session_id.as_deref().filter(|s| !s.is_empty()) {
        headers.push((COOKIE, format!("session={}", session_id)));
    }

    let body = match &request.body {
        Some(body) => Some(serde_json::to_string(body)?),
        None => None,
    };

    Ok(PreparedRequest {
        url: format!("{}{}", base_url.trim_end_matches('/'), request.endpoint),
        method: request.method,
        headers,
        body,
    })
}
