/// LaunchDesk - Product Launch Planning State Engines
///
/// Core library providing the session-scoped state stores behind a product
/// launch planner: the five-step launch wizard, the document studio, and the
/// media library.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
