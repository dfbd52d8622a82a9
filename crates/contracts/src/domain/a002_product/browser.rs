//! Category filter and lightbox navigation over a [`GalleryCatalog`].

use super::aggregate::{Category, GalleryCatalog, GalleryItem, ALL_CATEGORY_ID};
use crate::domain::common::EntityId;

/// Items visible under `filter`: everything for `all`, otherwise the items
/// whose category id equals the filter.
pub fn filter_items<'a>(items: &'a [GalleryItem], filter: &EntityId) -> Vec<&'a GalleryItem> {
    if filter.as_str() == ALL_CATEGORY_ID {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.category_id() == Some(filter))
        .collect()
}

/// Neighbour of `current` within `visible`, wrapping at both ends.
/// `None` when `current` is not part of `visible`.
pub fn step_circular(visible: &[&GalleryItem], current: &EntityId, forward: bool) -> Option<EntityId> {
    let len = visible.len();
    let index = visible.iter().position(|item| &item.id == current)?;
    let target = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    Some(visible[target].id.clone())
}

/// Gallery view state: catalog, active filter chip and lightbox selection.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryBrowser {
    catalog: GalleryCatalog,
    active_filter: EntityId,
    selected: Option<EntityId>,
}

impl Default for GalleryBrowser {
    fn default() -> Self {
        Self::new(GalleryCatalog::default())
    }
}

impl GalleryBrowser {
    pub fn new(catalog: GalleryCatalog) -> Self {
        Self {
            catalog,
            active_filter: EntityId::new(ALL_CATEGORY_ID),
            selected: None,
        }
    }

    pub fn catalog(&self) -> &GalleryCatalog {
        &self.catalog
    }

    /// Swap in a freshly fetched catalog. The filter is kept; the lightbox
    /// selection survives only if its item still exists.
    pub fn replace_catalog(&mut self, catalog: GalleryCatalog) {
        self.catalog = catalog;
        if let Some(id) = &self.selected {
            if !self.catalog.items.iter().any(|item| &item.id == id) {
                self.selected = None;
            }
        }
    }

    pub fn filter_chips(&self) -> Vec<Category> {
        self.catalog.filter_chips()
    }

    pub fn active_filter(&self) -> &EntityId {
        &self.active_filter
    }

    pub fn set_filter(&mut self, filter: EntityId) {
        self.active_filter = filter;
    }

    pub fn is_active(&self, filter: &EntityId) -> bool {
        &self.active_filter == filter
    }

    pub fn visible_items(&self) -> Vec<&GalleryItem> {
        filter_items(&self.catalog.items, &self.active_filter)
    }

    /// Open the lightbox on `id`. Unknown ids are ignored.
    pub fn open(&mut self, id: &EntityId) -> bool {
        if self.catalog.items.iter().any(|item| &item.id == id) {
            self.selected = Some(id.clone());
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&GalleryItem> {
        let id = self.selected.as_ref()?;
        self.catalog.items.iter().find(|item| &item.id == id)
    }

    /// Close the lightbox and hand back the item for "request similar".
    pub fn take_selected(&mut self) -> Option<GalleryItem> {
        let item = self.selected().cloned();
        self.selected = None;
        item
    }

    /// Move to the next visible item. No-op (returns `false`) when nothing is
    /// selected or the selection is hidden by the current filter.
    pub fn next(&mut self) -> bool {
        self.step(true)
    }

    pub fn prev(&mut self) -> bool {
        self.step(false)
    }

    fn step(&mut self, forward: bool) -> bool {
        let Some(current) = self.selected.as_ref() else {
            return false;
        };
        let target = step_circular(&self.visible_items(), current, forward);
        match target {
            Some(id) => {
                self.selected = Some(id);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: Option<&str>) -> GalleryItem {
        GalleryItem {
            id: EntityId::new(id),
            title: format!("item {id}"),
            text: String::new(),
            image: None,
            category: category.map(|c| Category::new(c, c)),
            material: String::new(),
            area: String::new(),
        }
    }

    fn browser() -> GalleryBrowser {
        GalleryBrowser::new(GalleryCatalog {
            items: vec![
                item("1", Some("a")),
                item("2", Some("b")),
                item("3", Some("a")),
                item("4", None),
                item("5", Some("a")),
            ],
            categories: vec![Category::new("a", "a"), Category::new("b", "b")],
        })
    }

    fn ids(items: &[&GalleryItem]) -> Vec<String> {
        items.iter().map(|i| i.id.to_string()).collect()
    }

    #[test]
    fn all_filter_shows_everything() {
        let b = browser();
        assert_eq!(b.visible_items().len(), 5);
        assert_eq!(b.filter_chips()[0], Category::all());
        assert_eq!(b.filter_chips().len(), 3);
    }

    #[test]
    fn category_filter_is_a_subset() {
        let mut b = browser();
        for filter in ["a", "b", "zzz"] {
            b.set_filter(EntityId::new(filter));
            let visible = b.visible_items();
            for v in &visible {
                assert!(b.catalog().items.contains(v));
                assert_eq!(v.category_id().map(EntityId::as_str), Some(filter));
            }
        }
        b.set_filter(EntityId::new("a"));
        assert_eq!(ids(&b.visible_items()), vec!["1", "3", "5"]);
    }

    #[test]
    fn navigation_wraps_within_the_filtered_set() {
        let mut b = browser();
        b.set_filter(EntityId::new("a"));
        assert!(b.open(&EntityId::new("5")));
        assert!(b.next());
        assert_eq!(b.selected().unwrap().id.as_str(), "1");
        assert!(b.prev());
        assert!(b.prev());
        assert_eq!(b.selected().unwrap().id.as_str(), "3");
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for filter in ["all", "a", "b"] {
            let mut b = browser();
            b.set_filter(EntityId::new(filter));
            let start = b.visible_items()[0].id.clone();
            let n = b.visible_items().len();
            b.open(&start);
            for _ in 0..n {
                assert!(b.next());
                let current = b.selected().unwrap();
                assert!(b.visible_items().contains(&current));
            }
            assert_eq!(b.selected().unwrap().id, start);
            for _ in 0..n {
                assert!(b.prev());
            }
            assert_eq!(b.selected().unwrap().id, start);
        }
    }

    #[test]
    fn hidden_selection_makes_navigation_a_no_op() {
        let mut b = browser();
        b.open(&EntityId::new("2"));
        b.set_filter(EntityId::new("a"));
        assert!(!b.next());
        assert!(!b.prev());
        assert_eq!(b.selected().unwrap().id.as_str(), "2");
    }

    #[test]
    fn nothing_selected_is_a_no_op() {
        let mut b = browser();
        assert!(!b.next());
        assert!(!b.open(&EntityId::new("404")));
        assert!(b.selected().is_none());
    }

    #[test]
    fn replace_catalog_drops_vanished_selection() {
        let mut b = browser();
        b.open(&EntityId::new("4"));
        b.set_filter(EntityId::new("b"));
        b.replace_catalog(GalleryCatalog {
            items: vec![item("1", Some("a"))],
            categories: vec![],
        });
        assert!(b.selected().is_none());
        assert_eq!(b.active_filter().as_str(), "b");
        assert!(b.visible_items().is_empty());
    }

    #[test]
    fn take_selected_closes_the_lightbox() {
        let mut b = browser();
        b.open(&EntityId::new("3"));
        let taken = b.take_selected().unwrap();
        assert_eq!(taken.id.as_str(), "3");
        assert!(b.selected().is_none());
    }
}
