use async_trait::async_trait;
use contracts::shared::error::SiteError;
use contracts::usecases::u501_load_gallery::CatalogSource;
use serde_json::Value;

use crate::shared::api_utils::get_json;

/// Live catalog backed by `GET /products` and `GET /categories`.
pub struct HttpCatalogSource {
    base_url: String,
}

impl HttpCatalogSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Value, SiteError> {
        get_json(&self.base_url, "products").await
    }

    async fn fetch_categories(&self) -> Result<Value, SiteError> {
        get_json(&self.base_url, "categories").await
    }
}
