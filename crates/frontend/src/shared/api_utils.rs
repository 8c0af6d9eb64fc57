//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing the API base URL.

/// Compile-time override, e.g. `DB_EXPLORER_API_BASE=https://api.example.com trunk build`
const API_BASE_OVERRIDE: Option<&str> = option_env!("DB_EXPLORER_API_BASE");

/// Get the base URL for API requests
///
/// Uses `DB_EXPLORER_API_BASE` when it was set at build time, otherwise
/// constructs the URL from the current window location with port 3000.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available (requests become relative)
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE.filter(|b| !b.trim().is_empty()) {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}
