use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::common::lenient::{text_field, unwrap_envelope};
use crate::shared::image::ImageResolver;

pub const DEFAULT_TITLE_LINE1: &str = "مطبخ أحلامك";
pub const DEFAULT_TITLE_LINE2: &str = "يبدأ من هنا";
pub const DEFAULT_SUBTITLE: &str =
    "تصميم وتصنيع خزائن مطابخ مخصصة بجودة عالمية. نحوّل مساحتك إلى تحفة فنية وظيفية.";

pub const DEFAULT_HERO_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1686023858216-4f54c853acf2?w=1400",
    "https://images.unsplash.com/photo-1610177534644-34d881503b83?w=1400",
    "https://images.unsplash.com/photo-1593068658336-4588efd97854?w=1400",
];

/// Admin-editable site settings (`GET /settings`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub hero_images: Vec<String>,
    pub hero_title_line1: Option<String>,
    pub hero_title_line2: Option<String>,
    pub hero_subtitle: Option<String>,
    /// Keys this crate does not interpret, kept for other sections.
    pub extra: Map<String, Value>,
}

impl SiteSettings {
    /// Parse an enveloped or bare settings payload. Never fails; anything
    /// unreadable falls back to defaults.
    pub fn from_value(raw: &Value) -> Self {
        let Value::Object(obj) = unwrap_envelope(raw) else {
            return Self::default();
        };
        let body = Value::Object(obj.clone());
        let mut extra = obj.clone();
        for key in ["hero_images", "hero_title_line1", "hero_title_line2", "hero_subtitle"] {
            extra.remove(key);
        }
        Self {
            hero_images: parse_hero_images(obj.get("hero_images")),
            hero_title_line1: text_field(&body, "hero_title_line1").map(str::to_string),
            hero_title_line2: text_field(&body, "hero_title_line2").map(str::to_string),
            hero_subtitle: text_field(&body, "hero_subtitle").map(str::to_string),
            extra,
        }
    }

    pub fn title_line1(&self) -> &str {
        self.hero_title_line1.as_deref().unwrap_or(DEFAULT_TITLE_LINE1)
    }

    pub fn title_line2(&self) -> &str {
        self.hero_title_line2.as_deref().unwrap_or(DEFAULT_TITLE_LINE2)
    }

    pub fn subtitle(&self) -> &str {
        self.hero_subtitle.as_deref().unwrap_or(DEFAULT_SUBTITLE)
    }

    /// Slides for the hero carousel: configured images or the stock photos,
    /// made absolute against the storage origin.
    pub fn hero_slides(&self, resolver: &ImageResolver) -> Vec<String> {
        if self.hero_images.is_empty() {
            DEFAULT_HERO_IMAGES.iter().map(|s| s.to_string()).collect()
        } else {
            self.hero_images
                .iter()
                .map(|raw| resolver.absolutize(raw))
                .collect()
        }
    }
}

/// `hero_images` is stored either as a JSON array or as a string holding one.
fn parse_hero_images(raw: Option<&Value>) -> Vec<String> {
    let list = match raw {
        Some(Value::Array(items)) => items.clone(),
        Some(Value::String(text)) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => items,
            Ok(_) => Vec::new(),
            Err(e) => {
                log::warn!("hero_images is not valid JSON: {}", e);
                Vec::new()
            }
        },
        _ => Vec::new(),
    };
    list.into_iter()
        .filter_map(|v| match v {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enveloped_settings_with_string_encoded_images() {
        let raw = json!({"success": true, "data": {
            "hero_images": "[\"/storage/hero/1.jpg\", \"https://cdn.test/2.jpg\", \"\"]",
            "hero_title_line1": "مطابخ سندباد",
            "hero_title_line2": "",
            "whatsapp": "+968"
        }});
        let s = SiteSettings::from_value(&raw);
        assert_eq!(s.hero_images, vec!["/storage/hero/1.jpg", "https://cdn.test/2.jpg"]);
        assert_eq!(s.title_line1(), "مطابخ سندباد");
        assert_eq!(s.title_line2(), DEFAULT_TITLE_LINE2);
        assert_eq!(s.subtitle(), DEFAULT_SUBTITLE);
        assert_eq!(s.extra.get("whatsapp"), Some(&json!("+968")));
        assert!(!s.extra.contains_key("hero_images"));

        let resolver = ImageResolver::from_api_base("https://api.test/public/api");
        assert_eq!(
            s.hero_slides(&resolver),
            vec!["https://api.test/public/storage/hero/1.jpg", "https://cdn.test/2.jpg"]
        );
    }

    #[test]
    fn bare_settings_with_array_images() {
        let s = SiteSettings::from_value(&json!({"hero_images": ["a.jpg"]}));
        assert_eq!(s.hero_images, vec!["a.jpg"]);
    }

    #[test]
    fn malformed_images_fall_back_to_stock_photos() {
        let s = SiteSettings::from_value(&json!({"hero_images": "[not json"}));
        assert!(s.hero_images.is_empty());
        let resolver = ImageResolver::from_api_base("https://api.test/api");
        assert_eq!(s.hero_slides(&resolver).len(), DEFAULT_HERO_IMAGES.len());
    }

    #[test]
    fn non_object_payload_is_default() {
        assert_eq!(SiteSettings::from_value(&json!([1, 2])), SiteSettings::default());
        assert_eq!(SiteSettings::from_value(&Value::Null), SiteSettings::default());
    }
}
