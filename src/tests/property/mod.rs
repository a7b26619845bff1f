//! Property-based tests for LaunchDesk
//!
//! This module contains property-based tests using the proptest framework.
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! Run all property tests:
//! ```sh
//! cargo test property --release
//! ```
//!
//! Run a specific property test module:
//! ```sh
//! cargo test property::wizard_props --release
//! ```
//!
//! ## Test Modules
//!
//! - `wizard_props`: Tests for the launch wizard state
//!   - Step identifiers and numbers round-trip
//!   - Navigation never leaves the step range
//!   - Advance succeeds exactly when the current gate passes
//!   - Section updates replace exactly one section
//!   - Completion and progress are derived from the plan contents
//!
//! - `document_props`: Tests for the document store
//!   - Field edits never advance the version counter
//!   - The version counter counts explicit saves exactly
//!   - Sharing never duplicates a collaborator email
//!   - The selection always refers to a live document
//!
//! - `media_props`: Tests for the media library
//!   - Recorded size equals the payload length
//!   - Blank queries return the whole library
//!   - Search results are an ordered sublist matching the query
//!   - A document's media is the globals plus its own items
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod document_props;
mod wizard_props;
