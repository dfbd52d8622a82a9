//! Turns raw `/products` and `/categories` payloads into a [`GalleryCatalog`].

use serde_json::Value;

use super::aggregate::{Category, GalleryCatalog, GalleryItem};
use crate::domain::common::lenient::{display_field, is_truthy, text_field, unwrap_list};
use crate::domain::common::EntityId;
use crate::shared::image::ImageResolver;

/// Category reference carried by a product: the embedded `category` object
/// if present, otherwise `category_id` with an empty name.
pub fn product_category(product: &Value) -> Option<Category> {
    match product.get("category") {
        Some(Value::Object(obj)) => {
            let id = obj.get("id").and_then(EntityId::from_json)?;
            let name = obj
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            return Some(Category { id, name });
        }
        Some(Value::String(name)) if !name.is_empty() => {
            return Some(Category::new(name.as_str(), name.as_str()));
        }
        _ => {}
    }
    let raw_id = product.get("category_id")?;
    if !is_truthy(raw_id) {
        return None;
    }
    EntityId::from_json(raw_id).map(|id| Category {
        id,
        name: String::new(),
    })
}

/// Title shown for products that have none.
pub const UNTITLED_LABEL: &str = "بدون عنوان";

/// Map one product to a gallery item. Products without an id get a
/// positional one so lightbox navigation stays stable.
pub fn product_to_item(product: &Value, index: usize, resolver: &ImageResolver) -> GalleryItem {
    let id = product
        .get("id")
        .and_then(EntityId::from_json)
        .unwrap_or_else(|| EntityId::new(format!("item-{}", index)));
    let title = text_field(product, "title")
        .or_else(|| text_field(product, "name"))
        .unwrap_or(UNTITLED_LABEL)
        .to_string();
    let text = text_field(product, "text")
        .or_else(|| text_field(product, "description"))
        .unwrap_or_default()
        .to_string();
    let image = text_field(product, "image").and_then(|raw| resolver.resolve(raw));

    GalleryItem {
        id,
        title,
        text,
        image,
        category: product_category(product),
        material: display_field(product, "material"),
        area: display_field(product, "area"),
    }
}

pub fn normalize_products(raw: &Value, resolver: &ImageResolver) -> Vec<GalleryItem> {
    unwrap_list(raw)
        .iter()
        .enumerate()
        .map(|(i, p)| product_to_item(p, i, resolver))
        .collect()
}

/// Normalize a `/categories` payload.
///
/// - a string is both id and name;
/// - an object gives `id ?? index` and `name ?? title ?? ""`;
/// - anything else becomes `{index, ""}`.
pub fn normalize_categories(raw: &Value) -> Vec<Category> {
    unwrap_list(raw)
        .iter()
        .enumerate()
        .map(|(i, entry)| match entry {
            Value::String(s) if !s.is_empty() => Category::new(s.as_str(), s.as_str()),
            Value::Object(_) => {
                let id = entry
                    .get("id")
                    .and_then(EntityId::from_json)
                    .unwrap_or_else(|| EntityId::from_index(i));
                let name = entry
                    .get("name")
                    .and_then(Value::as_str)
                    .or_else(|| entry.get("title").and_then(Value::as_str))
                    .unwrap_or_default()
                    .to_string();
                Category { id, name }
            }
            _ => Category::new(EntityId::from_index(i), ""),
        })
        .collect()
}

/// Distinct categories referenced by `items`, in first-seen order.
/// A later non-empty name fills in an earlier empty one.
pub fn derive_categories(items: &[GalleryItem]) -> Vec<Category> {
    let mut derived: Vec<Category> = Vec::new();
    for category in items.iter().filter_map(|item| item.category.as_ref()) {
        match derived.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => {
                if existing.name.is_empty() && !category.name.is_empty() {
                    existing.name = category.name.clone();
                }
            }
            None => derived.push(category.clone()),
        }
    }
    derived
}

/// Full normalization of a products + categories pair. Falls back to
/// categories derived from the products when the category list is empty.
pub fn build_catalog(products: &Value, categories: &Value, resolver: &ImageResolver) -> GalleryCatalog {
    let items = normalize_products(products, resolver);
    let mut categories = normalize_categories(categories);
    if categories.is_empty() {
        categories = derive_categories(&items);
        log::debug!(
            "categories endpoint returned nothing, derived {} from products",
            categories.len()
        );
    }
    GalleryCatalog { items, categories }
}

/// Products-only normalization, categories always derived.
pub fn build_catalog_from_products(products: &Value, resolver: &ImageResolver) -> GalleryCatalog {
    let items = normalize_products(products, resolver);
    let categories = derive_categories(&items);
    GalleryCatalog { items, categories }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn resolver() -> ImageResolver {
        ImageResolver::from_api_base("https://api.test/api")
    }

    fn products() -> Value {
        json!([
            {"id": 1, "title": "Oak", "image": "products/oak.jpg", "text": "warm",
             "material": "wood", "area": 12, "category": {"id": 3, "name": "Modern"}},
            {"id": "2", "name": "Slate", "image": "/storage/products/slate.jpg",
             "description": "dark", "category_id": "4"},
            {"id": 3, "title": "Plain", "category_id": 0},
            {"id": 4, "title": "Oak II", "category": {"id": "3", "name": "Modern"}}
        ])
    }

    #[test]
    fn products_map_to_items() {
        let items = normalize_products(&products(), &resolver());
        assert_eq!(items.len(), 4);

        assert_eq!(items[0].id.as_str(), "1");
        assert_eq!(items[0].image.as_deref(), Some("https://api.test/storage/products/oak.jpg"));
        assert_eq!(items[0].area, "12");
        assert_eq!(items[0].category, Some(Category::new("3", "Modern")));

        assert_eq!(items[1].title, "Slate");
        assert_eq!(items[1].text, "dark");
        assert_eq!(items[1].image.as_deref(), Some("/storage/products/slate.jpg"));
        assert_eq!(items[1].category, Some(Category::new("4", "")));

        assert_eq!(items[2].category, None);
        assert_eq!(items[2].image, None);
        assert_eq!(items[2].material, "");
    }

    #[test]
    fn category_shapes() {
        let raw = json!({"data": [
            "Classic",
            {"id": 9, "name": "Dark"},
            {"title": "Minimal"},
            {"id": "x"},
            null
        ]});
        let cats = normalize_categories(&raw);
        assert_eq!(
            cats,
            vec![
                Category::new("Classic", "Classic"),
                Category::new("9", "Dark"),
                Category::new("2", "Minimal"),
                Category::new("x", ""),
                Category::new("4", ""),
            ]
        );
    }

    #[test]
    fn empty_categories_are_derived_from_products() {
        let catalog = build_catalog(&products(), &json!([]), &resolver());
        let derived: BTreeSet<&str> = catalog.categories.iter().map(|c| c.id.as_str()).collect();
        let referenced: BTreeSet<&str> = catalog
            .items
            .iter()
            .filter_map(|i| i.category_id().map(EntityId::as_str))
            .collect();
        assert_eq!(derived, referenced);
        assert_eq!(catalog.categories.len(), 2);
        assert_eq!(catalog.categories[0], Category::new("3", "Modern"));
    }

    #[test]
    fn derived_names_fill_in_later() {
        let raw = json!([
            {"id": 1, "category_id": 5},
            {"id": 2, "category": {"id": 5, "name": "Wood"}}
        ]);
        let catalog = build_catalog_from_products(&raw, &resolver());
        assert_eq!(catalog.categories, vec![Category::new("5", "Wood")]);
    }

    #[test]
    fn endpoint_categories_win_over_derivation() {
        let catalog = build_catalog(&products(), &json!([{"id": 7, "name": "Only"}]), &resolver());
        assert_eq!(catalog.categories, vec![Category::new("7", "Only")]);
    }

    #[test]
    fn enveloped_and_bare_payloads_normalize_identically() {
        let bare = build_catalog(&products(), &json!([]), &resolver());
        let wrapped = build_catalog(
            &json!({"data": products()}),
            &json!({"data": []}),
            &resolver(),
        );
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn untitled_products_get_a_placeholder_title() {
        let resolver = ImageResolver::from_api_base("https://api.test/api");
        let item = product_to_item(&json!({"id": 5, "title": ""}), 0, &resolver);
        assert_eq!(item.title, UNTITLED_LABEL);
        let item = product_to_item(&json!({"id": 7}), 2, &resolver);
        assert_eq!(item.title, UNTITLED_LABEL);
        let item = product_to_item(&json!({"id": 6, "name": "Oak"}), 1, &resolver);
        assert_eq!(item.title, "Oak");
    }
}
