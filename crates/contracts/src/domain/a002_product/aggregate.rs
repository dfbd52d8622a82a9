use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

/// Filter id of the unfiltered view.
pub const ALL_CATEGORY_ID: &str = "all";
pub const ALL_CATEGORY_LABEL: &str = "الكل";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The synthetic "show everything" chip.
    pub fn all() -> Self {
        Self::new(EntityId::new(ALL_CATEGORY_ID), ALL_CATEGORY_LABEL)
    }

    pub fn is_all(&self) -> bool {
        self.id.as_str() == ALL_CATEGORY_ID
    }
}

/// Showcase entry built from a backend product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: EntityId,
    pub title: String,
    /// Description; may be empty.
    pub text: String,
    /// Resolved image URL.
    pub image: Option<String>,
    pub category: Option<Category>,
    pub material: String,
    pub area: String,
}

impl GalleryItem {
    pub fn category_id(&self) -> Option<&EntityId> {
        self.category.as_ref().map(|c| &c.id)
    }

    /// Description for the lightbox, with the "no description" placeholder.
    pub fn description_or_placeholder(&self) -> &str {
        if self.text.trim().is_empty() {
            "لا يوجد وصف"
        } else {
            &self.text
        }
    }
}

/// Normalized gallery payload: items plus the filter categories
/// (without the "all" chip).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryCatalog {
    pub items: Vec<GalleryItem>,
    pub categories: Vec<Category>,
}

impl GalleryCatalog {
    /// Filter chips in display order, "all" first.
    pub fn filter_chips(&self) -> Vec<Category> {
        std::iter::once(Category::all())
            .chain(self.categories.iter().cloned())
            .collect()
    }

    /// Showcase shown until (or unless) the backend answers.
    pub fn showcase() -> Self {
        let item = |id: &str, title: &str, image: &str, material: &str, area: &str| GalleryItem {
            id: EntityId::new(id),
            title: title.to_string(),
            text: String::new(),
            image: Some(image.to_string()),
            category: None,
            material: material.to_string(),
            area: area.to_string(),
        };
        Self {
            items: vec![
                item(
                    "1",
                    "مطبخ عصري فاخر",
                    "https://images.unsplash.com/photo-1610177534644-34d881503b83?w=800",
                    "خشب بريميوم",
                    "15 متر مربع",
                ),
                item(
                    "2",
                    "مطبخ كلاسيكي أنيق",
                    "https://images.unsplash.com/photo-1686023858216-4f54c853acf2?w=800",
                    "خشب طبيعي",
                    "18 متر مربع",
                ),
            ],
            categories: Vec::new(),
        }
    }
}
