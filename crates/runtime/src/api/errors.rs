//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the content loader and the decision flow so hosts
//! can bubble them up with consistent context.
use thiserror::Error;

pub use scenario_content::LoadError;
pub use scenario_core::DecisionError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The director requires a host effect handler before building.
    #[error("effect handler not set")]
    MissingHandler,

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Decision(#[from] DecisionError),
}
