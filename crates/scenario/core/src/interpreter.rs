//! Pure transform from a parsed description to an ordered effect sequence.
use crate::description::ScenarioDescription;
use crate::effect::{DecisionOption, Effect};
use crate::tags::{ActorKind, EnvironmentKind};

/// Walks the description and emits effects in consumption order: the
/// environment placement (if any), then actor spawns in source order, then
/// at most one decision presentation built from the first stage.
///
/// Unrecognized building or actor tags produce no effect and no error:
/// they are logged and skipped so older hosts tolerate newer content.
/// Stages past the first are left uninterpreted.
pub fn interpret(description: &ScenarioDescription) -> Vec<Effect> {
    let mut effects = Vec::new();

    if let Some(building) = &description.building {
        match building.tag.parse::<EnvironmentKind>() {
            Ok(kind) => effects.push(Effect::PlaceEnvironment {
                kind,
                location: building.location,
                yaw: building.rotation.yaw,
            }),
            Err(_) => {
                tracing::warn!(tag = %building.tag, "skipping unrecognized environment tag");
            }
        }
    }

    if let Some(actors) = &description.actors {
        for actor in actors {
            match actor.tag.parse::<ActorKind>() {
                Ok(kind) => effects.push(Effect::SpawnActor {
                    kind,
                    position: actor.spawn,
                }),
                Err(_) => {
                    tracing::warn!(tag = %actor.tag, "skipping unrecognized actor tag");
                }
            }
        }
    }

    if let Some(stage) = description.first_stage() {
        let options = stage
            .decisions
            .iter()
            .map(|(key, spec)| DecisionOption::new(key.clone(), spec.description.clone()))
            .collect();
        effects.push(Effect::PresentDecision {
            stage: stage.name.clone(),
            options,
        });
    }

    effects
}
