//! Data pipeline for the product-PRODY space network viewer.
//!
//! Everything is a straight line: load the tables once into a
//! [`DatasetStore`], then [`render`] joins, lays out and packages one
//! [`Scene`] per requested period. No caching, no shared mutable state.

pub mod enrich;
pub mod error;
pub mod figure;
pub mod loader;
pub mod palette;
pub mod records;
pub mod render;
pub mod scene;
pub mod store;

pub use error::{Diagnostic, SceneError};
pub use render::{render, Scene};
pub use store::DatasetStore;

/// Initialize a tracing subscriber for tests. Safe to call multiple times.
pub fn init_test_tracing() {
    use std::sync::Once;
    static START: Once = Once::new();
    START.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}
