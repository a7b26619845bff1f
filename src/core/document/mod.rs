//! Document Workspace
//!
//! Documents created from a seeded template catalog, edited through a
//! single selection, shared by email, and exported through a pluggable
//! renderer.
//!
//! # Design Principles
//!
//! - **Selection-scoped edits**: updates and saves apply to the selected
//!   document; sharing and deletion address documents by id.
//! - **Explicit versioning**: only an explicit save advances `version`;
//!   every edit refreshes `updated_at`.
//! - **Graceful references**: unknown template or document ids degrade
//!   (category fallback, cleared selection, logged no-op) instead of
//!   erroring.

mod catalog;
mod store;
mod types;

pub use catalog::*;
pub use store::*;
pub use types::*;
