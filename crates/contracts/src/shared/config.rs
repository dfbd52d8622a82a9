use serde::Deserialize;

use super::error::SiteError;
use crate::domain::a001_estimator::EstimatePolicy;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub popup: PopupConfig,
    #[serde(default)]
    pub consultation: ConsultationConfig,
    #[serde(default)]
    pub estimator: EstimatorConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// REST base, including the `/api` suffix.
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct HeroConfig {
    pub autoplay_ms: u32,
    pub swipe_threshold_px: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PopupConfig {
    pub delay_ms: u32,
    pub countdown_sec: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ConsultationConfig {
    pub max_images: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct EstimatorConfig {
    /// `show_result` or `open_consultation`.
    pub policy: EstimatePolicy,
}

pub const DEFAULT_API_BASE: &str = "https://www.backend.sindbad.om/public/api";

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            autoplay_ms: 3000,
            swipe_threshold_px: 30.0,
        }
    }
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            delay_ms: 5000,
            countdown_sec: 4,
        }
    }
}

impl Default for ConsultationConfig {
    fn default() -> Self {
        Self { max_images: 4 }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            hero: HeroConfig::default(),
            popup: PopupConfig::default(),
            consultation: ConsultationConfig::default(),
            estimator: EstimatorConfig::default(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://www.backend.sindbad.om/public/api"

[hero]
autoplay_ms = 3000
swipe_threshold_px = 30.0

[popup]
delay_ms = 5000
countdown_sec = 4

[consultation]
max_images = 4

[estimator]
policy = "show_result"
"#;

/// Load site configuration.
///
/// `override_toml` is a full TOML document baked in at build time (the
/// frontend passes `option_env!("KITCHEN_SITE_CONFIG")`). Without one the
/// embedded default is used.
pub fn load_config(override_toml: Option<&str>) -> Result<SiteConfig, SiteError> {
    match override_toml {
        Some(text) if !text.trim().is_empty() => {
            log::info!("Loading site config from build-time override");
            let config: SiteConfig = toml::from_str(text)?;
            Ok(config)
        }
        _ => {
            log::debug!("Using default embedded configuration");
            let config: SiteConfig = toml::from_str(DEFAULT_CONFIG)?;
            Ok(config)
        }
    }
}
