//! API utilities for talking to the admin service.
//!
//! The panel is served by the same service it administers, so requests go
//! to the page's own origin.

/// Get the base URL for API requests
///
/// # Returns
/// - Origin of the current page, like "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/v2.1/org/1/admin/groups/42/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
