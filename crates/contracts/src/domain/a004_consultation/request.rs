use serde::{Deserialize, Serialize};

use crate::domain::a001_estimator::{EstimateSummary, KitchenStyle};
use crate::shared::error::SiteError;

/// Multipart field name for uploaded kitchen photos.
pub const IMAGES_FIELD: &str = "images[]";

/// Local storage flag: the consultation popup has already been shown.
pub const POPUP_SHOWN_KEY: &str = "consultPopupShown";

/// Value written under [`POPUP_SHOWN_KEY`].
pub const POPUP_SHOWN_VALUE: &str = "1";

/// Any non-empty stored value counts as shown; older builds wrote `"true"`.
pub fn popup_flag_is_set(stored: Option<&str>) -> bool {
    stored.is_some_and(|value| !value.trim().is_empty())
}

/// Kitchen size buckets offered by the consultation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaRange {
    #[serde(rename = "0-5")]
    UpTo5,
    #[serde(rename = "6-10")]
    From6To10,
    #[serde(rename = "11-20")]
    From11To20,
    #[serde(rename = ">20")]
    Over20,
}

impl AreaRange {
    pub const ALL: [AreaRange; 4] = [
        AreaRange::UpTo5,
        AreaRange::From6To10,
        AreaRange::From11To20,
        AreaRange::Over20,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            AreaRange::UpTo5 => "0-5",
            AreaRange::From6To10 => "6-10",
            AreaRange::From11To20 => "11-20",
            AreaRange::Over20 => ">20",
        }
    }

    pub fn from_square_meters(area: u32) -> Self {
        match area {
            0..=5 => AreaRange::UpTo5,
            6..=10 => AreaRange::From6To10,
            11..=20 => AreaRange::From11To20,
            _ => AreaRange::Over20,
        }
    }
}

/// Consultation request (`POST /consultations`), without the image files,
/// which stay in the browser and are appended at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub area: Option<AreaRange>,
    pub style: KitchenStyle,
}

impl Default for ConsultationRequest {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            phone: String::new(),
            address: String::new(),
            area: None,
            style: KitchenStyle::Modern,
        }
    }
}

impl ConsultationRequest {
    /// Prefill from an estimator result.
    pub fn from_estimate(summary: &EstimateSummary) -> Self {
        Self {
            area: Some(AreaRange::from_square_meters(summary.area)),
            style: summary.style,
            ..Self::default()
        }
    }

    /// Required fields and the phone pattern (ten digits or more).
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.full_name.trim().is_empty() {
            return Err(SiteError::Validation("الاسم الكامل مطلوب".to_string()));
        }
        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(SiteError::Validation("رقم الجوال مطلوب".to_string()));
        }
        if phone.len() < 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(SiteError::Validation(
                "رقم الجوال يجب أن يتكون من 10 أرقام على الأقل".to_string(),
            ));
        }
        if self.address.trim().is_empty() {
            return Err(SiteError::Validation("العنوان مطلوب".to_string()));
        }
        Ok(())
    }

    /// Text fields of the multipart body, in submission order.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("fullName", self.full_name.clone()),
            ("phone", self.phone.clone()),
            ("address", self.address.clone()),
            ("area", self.area.map(|a| a.code().to_string()).unwrap_or_default()),
            ("style", self.style.code().to_string()),
        ]
    }
}

/// Keep at most `max` uploads, dropping the rest.
pub fn cap_images<T>(mut files: Vec<T>, max: usize) -> Vec<T> {
    files.truncate(max);
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_estimator::{Material, PriceEstimate};

    fn valid() -> ConsultationRequest {
        ConsultationRequest {
            full_name: "سالم".to_string(),
            phone: "0551234567".to_string(),
            address: "مسقط".to_string(),
            ..ConsultationRequest::default()
        }
    }

    #[test]
    fn prefill_from_estimate() {
        let summary = EstimateSummary {
            area: 14,
            material: Material::Wood,
            style: KitchenStyle::Classic,
            units: 8,
            estimate: PriceEstimate { min: 1, max: 2 },
        };
        let req = ConsultationRequest::from_estimate(&summary);
        assert_eq!(req.area, Some(AreaRange::From11To20));
        assert_eq!(req.style, KitchenStyle::Classic);
        assert!(req.full_name.is_empty());
    }

    #[test]
    fn area_buckets() {
        assert_eq!(AreaRange::from_square_meters(5), AreaRange::UpTo5);
        assert_eq!(AreaRange::from_square_meters(6), AreaRange::From6To10);
        assert_eq!(AreaRange::from_square_meters(20), AreaRange::From11To20);
        assert_eq!(AreaRange::from_square_meters(21), AreaRange::Over20);
    }

    #[test]
    fn validation_rules() {
        assert!(valid().validate().is_ok());

        let mut req = valid();
        req.full_name = "   ".to_string();
        assert!(matches!(req.validate(), Err(SiteError::Validation(_))));

        let mut req = valid();
        req.phone = "05512".to_string();
        assert!(req.validate().is_err());

        let mut req = valid();
        req.phone = "05-5123-4567".to_string();
        assert!(req.validate().is_err());

        let mut req = valid();
        req.address.clear();
        assert!(req.validate().is_err());
    }

    #[test]
    fn multipart_fields_in_order() {
        let mut req = valid();
        req.area = Some(AreaRange::Over20);
        let names: Vec<&str> = req.form_fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(names, vec!["fullName", "phone", "address", "area", "style"]);
        assert_eq!(req.form_fields()[3].1, ">20");
        assert_eq!(req.form_fields()[4].1, "modern");
    }

    #[test]
    fn images_are_capped() {
        assert_eq!(cap_images(vec![1, 2, 3, 4, 5, 6], 4), vec![1, 2, 3, 4]);
        assert_eq!(cap_images(vec![1], 4), vec![1]);
    }

    #[test]
    fn popup_flag_accepts_any_stored_value() {
        assert!(popup_flag_is_set(Some(POPUP_SHOWN_VALUE)));
        assert!(popup_flag_is_set(Some("1")));
        assert!(popup_flag_is_set(Some("true")));
        assert!(!popup_flag_is_set(Some("")));
        assert!(!popup_flag_is_set(None));
    }
}
