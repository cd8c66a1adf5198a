//! Authentication
//!
//! Token storage plus the session flows around it: bearer headers for API
//! calls, background access-token renewal, and guaranteed-terminal logout.
//! None of this validates token contents; the backend is the authority and
//! HTTP 401 is the only verdict consumed.

use leptos::spawn_local;

use crate::api;

pub mod tokens;

/// SPA route for the login page; auth failures land here.
pub const LOGIN_PATH: &str = "/login";

/// SPA route for the dashboard.
pub const DASHBOARD_PATH: &str = "/";

/// Bearer header set for authenticated requests: empty when no access
/// token is stored, otherwise exactly one `Authorization` pair.
pub fn auth_headers() -> Vec<(&'static str, String)> {
    match tokens::access() {
        Some(token) => vec![("Authorization", format!("Bearer {}", token))],
        None => Vec::new(),
    }
}

/// Whether an access token is present. Says nothing about validity.
pub fn is_authenticated() -> bool {
    tokens::access().is_some()
}

/// Full-page navigation, matching the original's location-based redirects
/// so it also works outside reactive scopes.
pub fn redirect_to(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(path) {
            web_sys::console::error_1(&format!("Redirect to {} failed: {:?}", path, e).into());
        }
    }
}

/// Redirect to the login page.
pub fn redirect_to_login() {
    redirect_to(LOGIN_PATH);
}

/// Renew the access token with the stored refresh token.
///
/// Terminal on any failure: tokens are cleared and the browser goes to the
/// login page. On success only the access token is replaced; the refresh
/// token stays as-is. No caller observes a completion value — use
/// [`spawn_refresh_access_token`] and treat it as a background side effect.
pub async fn refresh_access_token() {
    let Some(refresh) = tokens::refresh() else {
        tokens::clear();
        redirect_to_login();
        return;
    };

    match api::refresh_access(&refresh).await {
        Ok(access) => {
            tokens::set_access(&access);
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Error refreshing token: {}", e).into());
            tokens::clear();
            redirect_to_login();
        }
    }
}

/// Fire-and-forget access-token renewal.
pub fn spawn_refresh_access_token() {
    spawn_local(refresh_access_token());
}

/// Best-effort backend notification followed by unconditional local
/// cleanup. The tokens are cleared whatever the network does.
async fn end_session() {
    if let Some(refresh) = tokens::refresh() {
        if let Err(e) = api::notify_logout(&refresh).await {
            web_sys::console::warn_1(&format!("Logout error: {}", e).into());
        }
    }

    tokens::clear();
}

/// Log out: end the session, then redirect. Guaranteed-terminal.
pub async fn logout_user() {
    end_session().await;
    redirect_to_login();
}

/// Fire-and-forget logout, for click handlers.
pub fn spawn_logout() {
    spawn_local(logout_user());
}
