//! URL helpers for the REST backend.

/// Local storage key holding the admin bearer token.
pub const API_TOKEN_KEY: &str = "api_token";

/// True for `http://` and `https://` URLs, case-insensitively.
pub fn is_absolute_url(path: &str) -> bool {
    let lower = path.get(..8).unwrap_or(path).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Join an endpoint path to the API base.
///
/// Absolute URLs pass through untouched. Otherwise trailing slashes on the
/// base and leading slashes on the path collapse into exactly one.
///
/// # Example
/// ```rust
/// use contracts::shared::api_path::join_api_url;
/// assert_eq!(join_api_url("https://x.test/api/", "/products"), "https://x.test/api/products");
/// ```
pub fn join_api_url(base: &str, path: &str) -> String {
    if is_absolute_url(path) {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Value for the `Authorization` header.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
