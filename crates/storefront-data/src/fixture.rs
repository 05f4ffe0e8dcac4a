//! Catalog backed by JSON files on disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::records::{ProductPage, ProductQuery, TaxonomyPayload};
use crate::source::CatalogSource;

/// File holding the taxonomy payload.
pub const TAXONOMY_FILE: &str = "taxonomy.json";

/// File holding the product page.
pub const PRODUCTS_FILE: &str = "products.json";

/// Reads `taxonomy.json` and `products.json` from a directory.
///
/// Used by the CLI and by tests. The product list is truncated to the
/// requested limit, the way the backend would page it.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    dir: PathBuf,
}

impl FixtureCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, name: &str) -> Result<T, FetchError> {
        let path = self.dir.join(name);
        let bytes = std::fs::read(&path).map_err(|source| FetchError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| FetchError::Decode {
            what: path.display().to_string(),
            source,
        })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CatalogSource for FixtureCatalog {
    async fn mega_menu_taxonomy(&self) -> Result<TaxonomyPayload, FetchError> {
        self.read(TAXONOMY_FILE)
    }

    async fn products(&self, query: &ProductQuery) -> Result<ProductPage, FetchError> {
        let mut page: ProductPage = self.read(PRODUCTS_FILE)?;
        page.products.truncate(query.limit as usize);
        tracing::debug!(count = page.products.len(), limit = query.limit, "fixture products read");
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).unwrap();
    }

    #[tokio::test]
    async fn test_reads_taxonomy_and_products() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), TAXONOMY_FILE, r#"[{"id": 1, "slug": "audio", "name_fr": "Audio"}]"#);
        write(
            dir.path(),
            PRODUCTS_FILE,
            r#"{"products": [{"id": 1}, {"id": 2}, {"id": 3}]}"#,
        );

        let catalog = FixtureCatalog::new(dir.path());
        let departments = catalog.mega_menu_taxonomy().await.unwrap().into_departments();
        assert_eq!(departments[0].slug, "audio");

        let page = catalog.products(&ProductQuery { limit: 2 }).await.unwrap();
        assert_eq!(page.products.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = FixtureCatalog::new(dir.path());
        let err = catalog.mega_menu_taxonomy().await.unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }

    #[tokio::test]
    async fn test_malformed_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), PRODUCTS_FILE, "{not json");
        let catalog = FixtureCatalog::new(dir.path());
        let err = catalog.products(&ProductQuery::default()).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }
}
