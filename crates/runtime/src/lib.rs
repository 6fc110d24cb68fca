//! Runtime orchestration for scenario playback.
//!
//! This crate wires the scenario loader, the effect interpreter, and a
//! host-supplied effect handler into a cohesive API. Hosts embed
//! [`ScenarioDirector`] to start scenarios, forward user selections, and
//! subscribe to decision events.
//!
//! Modules are organized by responsibility:
//! - [`director`] hosts the orchestrator and builder
//! - [`api`] exposes the error types downstream hosts interact with
//! - [`executor`] defines the effect-consumption seam hosts implement
pub mod api;
pub mod director;
pub mod executor;

pub use api::{DecisionError, LoadError, Result, RuntimeError};
pub use director::{DEFAULT_SCENARIO_DIR, DirectorBuilder, RunReport, ScenarioDirector};
pub use executor::EffectHandler;
