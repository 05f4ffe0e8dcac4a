//! Shell-first streaming primitives for storefront pages.
//!
//! - `Shell` / `HeadContent` - Document shell with locale and direction
//! - `StreamingSink` - Sends the shell, then named sections, in order
//! - `html` - Escaping helpers for section renderers

pub mod html;
mod shell;
mod sink;

pub use shell::*;
pub use sink::*;
