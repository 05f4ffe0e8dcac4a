//! Section renderers for the storefront home page.

mod collections;
mod departments;
mod featured;
mod hero;
mod newsletter;
mod product_card;
mod testimonials;
mod trust;

pub use collections::*;
pub use departments::*;
pub use featured::*;
pub use hero::*;
pub use newsletter::*;
pub use product_card::*;
pub use testimonials::*;
pub use trust::*;
