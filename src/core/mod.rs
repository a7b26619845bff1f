
pub mod logging;

// Session-scoped state stores
pub mod wizard;
pub mod document;
pub mod media;
