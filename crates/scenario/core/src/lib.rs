//! Deterministic scenario logic and data types shared across hosts.
//!
//! `scenario-core` defines the canonical scenario model (description,
//! effects, decision flow) and exposes pure APIs that can be reused by the
//! runtime and offline tools. Interpretation never performs I/O or holds
//! references to host objects: it emits plain [`effect::Effect`] data and
//! the host owns everything it creates while executing them.
pub mod decision;
pub mod description;
pub mod effect;
pub mod interpreter;
pub mod tags;

pub use decision::{DecisionError, DecisionFlow, DecisionObserver, DecisionState, SubscriberId};
pub use description::{
    ActorSpawnSpec, BuildingSpec, DecisionSpec, Orientation, ScenarioDescription, Stage,
    WorldPosition,
};
pub use effect::{DecisionOption, Effect};
pub use interpreter::interpret;
pub use tags::{ActorKind, EnvironmentKind};
