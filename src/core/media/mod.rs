//! Media Library
//!
//! Uploaded images and logos, stored behind a pluggable blob backend and
//! queryable per document. Items are either global (visible everywhere)
//! or owned by a single document.
//!
//! # Design Principles
//!
//! - **Payloads live elsewhere**: the library records locators and
//!   metadata; bytes go to a [`BlobStorage`] backend.
//! - **Upload is the only failure**: a rejected upload propagates and
//!   leaves the library untouched; every other operation degrades to a
//!   logged no-op.
//! - **Upload order everywhere**: listing, filtering, and search never
//!   reorder items.

mod storage;
mod store;
mod types;

pub use storage::*;
pub use store::*;
pub use types::*;
