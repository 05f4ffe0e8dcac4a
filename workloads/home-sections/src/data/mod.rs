//! Content and view models for the home sections.

mod collections;
mod products;
mod slides;
mod testimonials;

pub use collections::*;
pub use products::*;
pub use slides::*;
pub use testimonials::*;
