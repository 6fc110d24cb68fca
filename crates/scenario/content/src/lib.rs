//! Data-driven scenario content loading.
//!
//! This crate reads scenario documents (JSON) from disk and converts them
//! into `scenario-core` types. It owns the load-error taxonomy: a failed
//! load is terminal for the scenario but never fatal to the host, and
//! nothing from a failed document is ever partially applied.
pub mod error;
pub mod loaders;

pub use error::{LoadError, LoadResult};
pub use loaders::ScenarioLoader;
