//! Native runtime for mounted storefront sections.
//!
//! - `Lifecycle` - Owns a section's cancellation token; cancelled on unmount
//! - `PeriodicTask` - Repeating timer stopped on drop
//! - `run_guarded` - Commits a fetch result only if still mounted
//! - `ViewCell` - Private, observable section state

mod guard;
mod lifecycle;
mod periodic;
mod view;

pub use guard::*;
pub use lifecycle::*;
pub use periodic::*;
pub use view::*;

pub use tokio_util::sync::CancellationToken;
