//! Image URL resolution for backend-hosted media.

use super::api_path::is_absolute_url;

/// Resolves backend media paths against the storage origin.
///
/// The storage origin is the API base with its trailing `/api` removed:
/// `https://host/public/api` serves files from `https://host/public/storage/...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    origin: String,
}

impl ImageResolver {
    pub fn from_api_base(api_base: &str) -> Self {
        let trimmed = api_base.trim_end_matches('/');
        let origin = trimmed.strip_suffix("/api").unwrap_or(trimmed);
        Self {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Resolve a product image path.
    ///
    /// 1. `http(s)://...` is returned as is.
    /// 2. `/storage/...` and `storage/...` are already rooted; they come back
    ///    as site-relative `/storage/...`.
    /// 3. Anything else is a bare upload path and goes under
    ///    `<origin>/storage/`.
    ///
    /// Applying it to its own output never adds a second prefix.
    pub fn resolve(&self, raw: &str) -> Option<String> {
        if raw.is_empty() {
            return None;
        }
        if is_absolute_url(raw) {
            return Some(raw.to_string());
        }
        if raw.starts_with("/storage/") {
            return Some(raw.to_string());
        }
        if raw.starts_with("storage/") {
            return Some(format!("/{}", raw));
        }
        Some(format!(
            "{}/storage/{}",
            self.origin,
            raw.trim_start_matches('/')
        ))
    }

    /// Make a settings image absolute. Root-relative paths (`/storage/...`)
    /// are joined to the origin; other values are left alone.
    pub fn absolutize(&self, raw: &str) -> String {
        if raw.is_empty() || is_absolute_url(raw) {
            return raw.to_string();
        }
        if raw.starts_with('/') {
            return format!("{}{}", self.origin, raw);
        }
        raw.to_string()
    }
}
