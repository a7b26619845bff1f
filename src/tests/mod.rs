//! Internal test suites for LaunchDesk.
//!
//! Unit tests live next to the code they cover in `#[cfg(test)]` modules.
//! This tree holds everything that spans more than one module:
//!
//! - `common`: shared fixtures for building populated stores
//! - `property`: proptest suites for the store invariants
//! - `integration`: cross-store launch workflows

mod property;
