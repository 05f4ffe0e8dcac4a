//! The catalog backend seam.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::records::{ProductPage, ProductQuery, TaxonomyPayload};

/// Read access to the catalog backend.
///
/// Spin's outbound HTTP futures are not `Send`, so the trait drops the `Send`
/// bound on wasm32.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CatalogSource {
    /// The mega-menu taxonomy: departments with their categories.
    async fn mega_menu_taxonomy(&self) -> Result<TaxonomyPayload, FetchError>;

    /// A page of products.
    async fn products(&self, query: &ProductQuery) -> Result<ProductPage, FetchError>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<T> CatalogSource for std::sync::Arc<T>
where
    T: CatalogSource + Send + Sync + ?Sized,
{
    async fn mega_menu_taxonomy(&self) -> Result<TaxonomyPayload, FetchError> {
        (**self).mega_menu_taxonomy().await
    }

    async fn products(&self, query: &ProductQuery) -> Result<ProductPage, FetchError> {
        (**self).products(query).await
    }
}
