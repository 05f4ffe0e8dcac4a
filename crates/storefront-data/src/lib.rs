//! Catalog data access for the storefront home page.
//!
//! - `CatalogSource` - The backend seam: taxonomy and product listing
//! - `FixtureCatalog` - JSON files on disk (CLI, tests)
//! - `HttpCatalog` - Spin outbound HTTP (wasm32 only)
//! - Wire records, tolerant of missing and `null` fields

mod error;
mod fixture;
#[cfg(target_arch = "wasm32")]
mod http;
mod records;
mod source;

pub use error::*;
pub use fixture::*;
#[cfg(target_arch = "wasm32")]
pub use http::*;
pub use records::*;
pub use source::*;
