//! HTTP API Client
//!
//! Functions for communicating with the CRM REST API.

use gloo_net::http::{Request, Response};

use crate::auth;
use crate::state::summary::DashboardSummary;

/// Default API base: empty means same-origin relative requests.
pub const DEFAULT_API_BASE: &str = "";

/// Storage key for an optional API base override (useful when the UI is
/// served from a different host than the API).
const API_BASE_KEY: &str = "crm_api_url";

/// Get the API base URL from local storage or use the same-origin default.
pub fn api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Request/Response Types ============

#[derive(Debug, serde::Serialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, serde::Serialize)]
struct RefreshRequest {
    refresh: String,
}

#[derive(Debug, serde::Serialize)]
struct LogoutRequest {
    refresh: String,
}

/// Token pair returned by a successful credential login.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, serde::Deserialize)]
struct RefreshResponse {
    access: String,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    #[serde(default)]
    detail: Option<String>,
}

/// Dashboard fetch failure. The loader redirects on `Unauthorized` and
/// shows a retryable banner for everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    Unauthorized,
    Other(String),
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::Unauthorized => write!(f, "Session is no longer authorized"),
            DashboardError::Other(message) => write!(f, "{}", message),
        }
    }
}

/// Extract the server's `detail` message from an error response, falling
/// back to a generic message when the body is not parseable.
async fn error_detail(response: Response, fallback: &str) -> String {
    let error: ApiError = response
        .json()
        .await
        .unwrap_or(ApiError { detail: None });
    error.detail.unwrap_or_else(|| fallback.to_string())
}

// ============ API Functions ============

/// Exchange credentials for a token pair.
pub async fn login(email: &str, password: &str) -> Result<TokenPair, String> {
    let response = Request::post(&format!("{}/api/auth/login/", api_base()))
        .json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response, "Login failed").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Exchange a refresh token for a fresh access token. The login route
/// doubles as the renewal endpoint; the response carries `access` only.
pub async fn refresh_access(refresh: &str) -> Result<String, String> {
    let response = Request::post(&format!("{}/api/auth/login/", api_base()))
        .json(&RefreshRequest {
            refresh: refresh.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response, "Token refresh rejected").await);
    }

    let renewed: RefreshResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(renewed.access)
}

/// Tell the backend to blacklist a refresh token. Best-effort: callers
/// proceed with local cleanup whatever the outcome.
pub async fn notify_logout(refresh: &str) -> Result<(), String> {
    let mut request = Request::post(&format!("{}/api/auth/logout/", api_base()));
    for (name, value) in auth::auth_headers() {
        request = request.header(name, &value);
    }

    let response = request
        .json(&LogoutRequest {
            refresh: refresh.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response, "Logout rejected").await);
    }

    Ok(())
}

/// Fetch the aggregated dashboard payload with the bearer header.
///
/// HTTP 401 is the sole auth-failure discriminator the loader consumes;
/// every other failure is surfaced as a message.
pub async fn fetch_dashboard() -> Result<DashboardSummary, DashboardError> {
    let mut request = Request::get(&format!("{}/api/dashboard/", api_base()));
    for (name, value) in auth::auth_headers() {
        request = request.header(name, &value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| DashboardError::Other(format!("Network error: {}", e)))?;

    if response.status() == 401 {
        return Err(DashboardError::Unauthorized);
    }

    if !response.ok() {
        let message = error_detail(response, "Failed to load dashboard").await;
        return Err(DashboardError::Other(message));
    }

    response
        .json()
        .await
        .map_err(|e| DashboardError::Other(format!("Parse error: {}", e)))
}
