//! Public API surface shared by runtime consumers.
mod errors;

pub use errors::{DecisionError, LoadError, Result, RuntimeError};
