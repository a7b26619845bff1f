//! Launch Wizard
//!
//! Guides users through assembling a product launch plan in five steps:
//! 1. Product Details - Name, description, category, audience
//! 2. Marketing Strategy - Objective, channels, budget
//! 3. Creative Assets - Logo, images, videos, copy
//! 4. Launch Timeline - Dates and post-launch activities
//! 5. Distribution Plan - Channels, partnerships, pricing
//!
//! # Design Principles
//!
//! - **Derived completion**: A step is complete when its section's gate
//!   passes; nothing is cached, so edits are reflected immediately.
//! - **Whole-section updates**: Edits replace a full section at a time via
//!   typed [`SectionData`] payloads.
//! - **Caller-driven navigation**: The store gates forward movement on the
//!   current step's completion but allows free backward movement and jumps.

mod catalog;
mod store;
mod types;

pub use catalog::*;
pub use store::*;
pub use types::*;
