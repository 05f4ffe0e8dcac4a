//! Bilingual storefront home page - shell-first streaming workload.
//!
//! Sections, in page order:
//! - Hero slider (four static slides, auto-advancing)
//! - Departments grid (catalog taxonomy)
//! - Curated collections
//! - Featured products (best sellers / new arrivals / deals)
//! - Trust badges
//! - Testimonials
//! - Newsletter and WhatsApp contact
//!
//! On wasm32 the crate is a Spin HTTP component. Natively it exposes the
//! same renderers plus `mount`, which runs sections with live timers and
//! cancellable fetches.

pub mod context;
pub mod data;
pub mod page;
pub mod sections;

#[cfg(not(target_arch = "wasm32"))]
pub mod mount;

#[cfg(target_arch = "wasm32")]
mod handler;

pub use context::PageContext;
pub use page::{home_closing, home_shell, HomePage, SectionId};
