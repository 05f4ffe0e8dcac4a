//! Core types for the bilingual storefront.
//!
//! This crate provides the fundamental types shared by every section:
//! - `Locale` / `Localized` - French and Arabic text selection
//! - `Translations` - UI string table, passed explicitly to renderers
//! - `RequestContext` - Per-request parameters and locale resolution
//! - `TimingContext` - Section timing marks
//! - `LoadState` - Loading / loaded state of data-backed sections
//! - `StorefrontConfig` - File-based configuration

mod config;
mod context;
mod error;
mod lifecycle;
mod load;
mod locale;
mod translations;

pub use config::*;
pub use context::*;
pub use error::*;
pub use lifecycle::*;
pub use load::*;
pub use locale::*;
pub use translations::{SectionStrings, Translations, TrustStrings};

pub use http::Method;
