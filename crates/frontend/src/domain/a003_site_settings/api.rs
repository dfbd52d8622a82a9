use contracts::domain::a003_site_settings::SiteSettings;
use contracts::shared::error::SiteError;

use crate::shared::api_utils::get_json;

/// `GET /settings`, normalized. Missing fields fall back to the built-in
/// hero copy and images.
pub async fn fetch_settings(base: &str) -> Result<SiteSettings, SiteError> {
    let raw = get_json(base, "settings").await?;
    Ok(SiteSettings::from_value(&raw))
}
