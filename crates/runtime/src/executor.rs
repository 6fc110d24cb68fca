//! Effect-consumption seam implemented by host executors.
use scenario_core::{ActorKind, DecisionOption, EnvironmentKind, WorldPosition};

/// Host-side executor for interpreter effects.
///
/// The director never holds references to objects the host creates: it
/// hands over plain effect data, and the host owns (and later destroys)
/// the results. Handlers are invoked synchronously, in effect order, on
/// the caller's thread.
pub trait EffectHandler {
    /// Place a prefabricated structure in the world.
    fn place_environment(&mut self, kind: EnvironmentKind, location: WorldPosition, yaw: f32);

    /// Spawn one actor at the given position.
    fn spawn_actor(&mut self, kind: ActorKind, position: WorldPosition);

    /// Present a single-select decision to the user.
    ///
    /// The host renders the options and later reports the user's choice
    /// through [`crate::ScenarioDirector::select_option`].
    fn present_decision(&mut self, stage: &str, options: &[DecisionOption]);
}
