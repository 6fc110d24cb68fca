//! Console effect handler rendering effects as text.
use scenario_core::{ActorKind, DecisionOption, EnvironmentKind, WorldPosition};
use scenario_runtime::EffectHandler;

/// Host executor that prints world construction and decision prompts to
/// stdout. Stands in for the engine-side spawning and widget layers.
#[derive(Debug, Default)]
pub struct ConsoleHandler;

impl EffectHandler for ConsoleHandler {
    fn place_environment(&mut self, kind: EnvironmentKind, location: WorldPosition, yaw: f32) {
        println!("[world] placed {kind} at {location}, yaw {yaw}");
    }

    fn spawn_actor(&mut self, kind: ActorKind, position: WorldPosition) {
        println!("[world] spawned {kind} at {position}");
    }

    fn present_decision(&mut self, stage: &str, options: &[DecisionOption]) {
        println!();
        println!("=== {stage} ===");
        for option in options {
            println!("  {}", option.label());
        }
        println!("Type an option key and press enter.");
    }
}
