pub mod extensions;
pub mod models;
pub mod prelude;

/// Version of the model crate, reported by sources in their `SourceInfo`
pub static LIB_VERSION: &str = env!("CARGO_PKG_VERSION");
