//! Catalog backed by the storefront API over Spin outbound HTTP.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::records::{ProductPage, ProductQuery, TaxonomyPayload};
use crate::source::CatalogSource;

/// GETs `<base>/taxonomy` and `<base>/products?limit=N`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);

        let req = spin_sdk::http::Request::get(&url);
        let resp: spin_sdk::http::Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = *resp.status();
        if status >= 400 {
            return Err(FetchError::Http { status, url });
        }

        serde_json::from_slice(resp.body()).map_err(|source| FetchError::Decode { what: url, source })
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalog {
    async fn mega_menu_taxonomy(&self) -> Result<TaxonomyPayload, FetchError> {
        self.get("/taxonomy").await
    }

    async fn products(&self, query: &ProductQuery) -> Result<ProductPage, FetchError> {
        self.get(&format!("/products?limit={}", query.limit)).await
    }
}
