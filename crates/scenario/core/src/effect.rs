//! Effect descriptions emitted by the interpreter.
//!
//! Effects are ephemeral: produced once per load, dispatched to the host in
//! order, never persisted. They carry no references to host objects; the
//! host owns whatever it creates while executing them.
use crate::description::WorldPosition;
use crate::tags::{ActorKind, EnvironmentKind};

/// One selectable choice within a presented decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecisionOption {
    pub key: String,
    pub description: String,
}

impl DecisionOption {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }

    /// Display label shown to the user: `key: description`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.key, self.description)
    }
}

/// Declarative world-construction or UI instruction for the host executor.
///
/// Consumption order matters: hosts must execute effects in the exact
/// sequence produced, since later effects may assume earlier ones already
/// ran (actors spawn into an already-placed environment).
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Place a prefabricated structure.
    PlaceEnvironment {
        kind: EnvironmentKind,
        location: WorldPosition,
        yaw: f32,
    },

    /// Spawn one actor.
    SpawnActor {
        kind: ActorKind,
        position: WorldPosition,
    },

    /// Present a single-select decision for the named stage.
    PresentDecision {
        stage: String,
        options: Vec<DecisionOption>,
    },
}
