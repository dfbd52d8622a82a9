use async_trait::async_trait;
use serde_json::Value;

use crate::domain::a002_product::normalize::{build_catalog, build_catalog_from_products};
use crate::domain::a002_product::GalleryCatalog;
use crate::shared::error::SiteError;
use crate::shared::image::ImageResolver;

/// Where the gallery reads its raw payloads from.
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn fetch_products(&self) -> Result<Value, SiteError>;
    async fn fetch_categories(&self) -> Result<Value, SiteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Both endpoints answered.
    Complete(GalleryCatalog),
    /// The combined load failed; products were refetched on their own and
    /// the categories derived from them.
    ProductsOnly(GalleryCatalog),
    /// The backend answered with no products. The view keeps its showcase.
    Empty,
    /// Nothing could be loaded. The view keeps what it already shows.
    Failed(SiteError),
}

impl LoadOutcome {
    pub fn into_catalog(self) -> Option<GalleryCatalog> {
        match self {
            LoadOutcome::Complete(c) | LoadOutcome::ProductsOnly(c) => Some(c),
            LoadOutcome::Empty | LoadOutcome::Failed(_) => None,
        }
    }
}

/// Load products, then categories (in that order, one after the other), and
/// normalize them into a catalog.
///
/// If either request fails, products are fetched once more on their own.
/// There are no further retries. A load that yields no items reports
/// [`LoadOutcome::Empty`] instead of an empty catalog.
pub async fn fetch_and_normalize<S>(source: &S, resolver: &ImageResolver) -> LoadOutcome
where
    S: CatalogSource + ?Sized,
{
    let outcome = load(source, resolver).await;
    let empty = matches!(
        &outcome,
        LoadOutcome::Complete(c) | LoadOutcome::ProductsOnly(c) if c.items.is_empty()
    );
    if empty {
        log::warn!("backend returned no products, keeping the showcase");
        return LoadOutcome::Empty;
    }
    outcome
}

async fn load<S>(source: &S, resolver: &ImageResolver) -> LoadOutcome
where
    S: CatalogSource + ?Sized,
{
    match fetch_both(source).await {
        Ok((products, categories)) => {
            LoadOutcome::Complete(build_catalog(&products, &categories, resolver))
        }
        Err(e) => {
            log::error!("gallery fetch failed: {}", e);
            match source.fetch_products().await {
                Ok(products) => {
                    LoadOutcome::ProductsOnly(build_catalog_from_products(&products, resolver))
                }
                Err(e2) => {
                    log::error!("gallery products fallback failed: {}", e2);
                    LoadOutcome::Failed(e2)
                }
            }
        }
    }
}

async fn fetch_both<S>(source: &S) -> Result<(Value, Value), SiteError>
where
    S: CatalogSource + ?Sized,
{
    let products = source.fetch_products().await?;
    let categories = source.fetch_categories().await?;
    Ok((products, categories))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Scripted source: each call pops the next canned answer and is logged.
    struct FakeSource {
        products: RefCell<VecDeque<Result<Value, SiteError>>>,
        categories: RefCell<VecDeque<Result<Value, SiteError>>>,
        calls: RefCell<Vec<&'static str>>,
    }

    impl FakeSource {
        fn new(
            products: Vec<Result<Value, SiteError>>,
            categories: Vec<Result<Value, SiteError>>,
        ) -> Self {
            Self {
                products: RefCell::new(products.into()),
                categories: RefCell::new(categories.into()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn next(queue: &RefCell<VecDeque<Result<Value, SiteError>>>) -> Result<Value, SiteError> {
            queue
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(SiteError::Transport("no more answers".into())))
        }
    }

    #[async_trait(?Send)]
    impl CatalogSource for FakeSource {
        async fn fetch_products(&self) -> Result<Value, SiteError> {
            self.calls.borrow_mut().push("products");
            Self::next(&self.products)
        }

        async fn fetch_categories(&self) -> Result<Value, SiteError> {
            self.calls.borrow_mut().push("categories");
            Self::next(&self.categories)
        }
    }

    fn resolver() -> ImageResolver {
        ImageResolver::from_api_base("https://api.test/api")
    }

    fn products() -> Value {
        json!({"data": [
            {"id": 1, "title": "A", "category": {"id": 2, "name": "Modern"}},
            {"id": 2, "title": "B", "category_id": 3}
        ]})
    }

    #[test]
    fn products_are_requested_before_categories() {
        let source = FakeSource::new(vec![Ok(products())], vec![Ok(json!([{"id": 2, "name": "Modern"}]))]);
        let outcome = block_on(fetch_and_normalize(&source, &resolver()));
        assert_eq!(*source.calls.borrow(), vec!["products", "categories"]);
        let catalog = match outcome {
            LoadOutcome::Complete(c) => c,
            other => panic!("unexpected: {other:?}"),
        };
        assert_eq!(catalog.items.len(), 2);
        assert_eq!(catalog.categories.len(), 1);
    }

    #[test]
    fn category_failure_falls_back_to_products_only() {
        let source = FakeSource::new(
            vec![Ok(products()), Ok(products())],
            vec![Err(SiteError::Status { status: 500, message: "boom".into() })],
        );
        let outcome = block_on(fetch_and_normalize(&source, &resolver()));
        assert_eq!(*source.calls.borrow(), vec!["products", "categories", "products"]);
        let catalog = match outcome {
            LoadOutcome::ProductsOnly(c) => c,
            other => panic!("unexpected: {other:?}"),
        };
        let ids: Vec<&str> = catalog.categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn product_failure_skips_categories_and_retries_once() {
        let source = FakeSource::new(
            vec![Err(SiteError::Transport("offline".into())), Ok(products())],
            vec![Ok(json!([]))],
        );
        let outcome = block_on(fetch_and_normalize(&source, &resolver()));
        assert_eq!(*source.calls.borrow(), vec!["products", "products"]);
        assert!(matches!(outcome, LoadOutcome::ProductsOnly(ref c) if c.items.len() == 2));
    }

    #[test]
    fn total_failure_reports_the_fallback_error() {
        let source = FakeSource::new(
            vec![
                Err(SiteError::Transport("offline".into())),
                Err(SiteError::Transport("still offline".into())),
            ],
            vec![],
        );
        let outcome = block_on(fetch_and_normalize(&source, &resolver()));
        assert_eq!(outcome, LoadOutcome::Failed(SiteError::Transport("still offline".into())));
        assert!(outcome.into_catalog().is_none());
    }

    #[test]
    fn empty_category_endpoint_derives_from_products() {
        let source = FakeSource::new(vec![Ok(products())], vec![Ok(json!({"data": []}))]);
        let catalog = block_on(fetch_and_normalize(&source, &resolver()))
            .into_catalog()
            .unwrap();
        let ids: Vec<&str> = catalog.categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn no_products_keeps_the_current_catalog() {
        let source = FakeSource::new(vec![Ok(json!({"data": []}))], vec![Ok(json!([]))]);
        let outcome = block_on(fetch_and_normalize(&source, &resolver()));
        assert_eq!(outcome, LoadOutcome::Empty);
        assert!(outcome.into_catalog().is_none());

        let source = FakeSource::new(
            vec![Err(SiteError::Transport("offline".into())), Ok(json!([]))],
            vec![],
        );
        let outcome = block_on(fetch_and_normalize(&source, &resolver()));
        assert_eq!(outcome, LoadOutcome::Empty);
    }
}
