//! API URL helpers.

/// Base URL for API requests, derived from the current window location.
/// The versioned REST prefix is fixed at build time.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}/api/v1", protocol, host)
}

/// Build a full API URL from a path (should start with "/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
