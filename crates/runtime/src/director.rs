//! High-level scenario orchestrator.
//!
//! The director owns the decision flow, resolves scenario file names
//! against a content directory, and dispatches interpreter effects to the
//! injected host handler in the exact order produced.
use std::path::PathBuf;

use scenario_content::ScenarioLoader;
use scenario_core::{
    DecisionFlow, DecisionOption, DecisionState, Effect, SubscriberId, interpret,
};

use crate::api::{Result, RuntimeError};
use crate::executor::EffectHandler;

/// Default location of scenario documents, relative to the working
/// directory.
pub const DEFAULT_SCENARIO_DIR: &str = "content/scenarios";

/// Summary of one scenario run, returned by [`ScenarioDirector::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub environments_placed: usize,
    pub actors_spawned: usize,
    pub decision_pending: bool,
}

/// Orchestrates load → interpret → dispatch for one scenario at a time.
///
/// At most one scenario is active per director. Running another while a
/// decision is pending replaces it: the decision flow clears installed
/// options before re-presenting. All work happens inline on the caller's
/// thread; there are no background tasks and no suspension points.
pub struct ScenarioDirector {
    scenario_dir: PathBuf,
    handler: Box<dyn EffectHandler>,
    decisions: DecisionFlow,
}

impl ScenarioDirector {
    /// Create a new director builder.
    pub fn builder() -> DirectorBuilder {
        DirectorBuilder::new()
    }

    /// Load the named scenario file and execute its effects.
    ///
    /// A failed load is terminal but non-fatal: the error is logged, zero
    /// effects reach the handler, and the director stays usable.
    pub fn run(&mut self, file_name: &str) -> Result<RunReport> {
        let path = self.scenario_dir.join(file_name);
        let description = match ScenarioLoader::load(&path) {
            Ok(description) => description,
            Err(error) => {
                tracing::error!(%error, path = %path.display(), "failed to load scenario");
                return Err(error.into());
            }
        };

        let effects = interpret(&description);
        tracing::info!(path = %path.display(), effects = effects.len(), "scenario loaded");

        let mut report = RunReport::default();
        for effect in effects {
            match effect {
                Effect::PlaceEnvironment {
                    kind,
                    location,
                    yaw,
                } => {
                    tracing::debug!(%kind, %location, yaw, "placing environment");
                    self.handler.place_environment(kind, location, yaw);
                    report.environments_placed += 1;
                }
                Effect::SpawnActor { kind, position } => {
                    tracing::debug!(%kind, %position, "spawning actor");
                    self.handler.spawn_actor(kind, position);
                    report.actors_spawned += 1;
                }
                Effect::PresentDecision { stage, options } => {
                    tracing::debug!(stage = %stage, options = options.len(), "presenting decision");
                    self.decisions.present(stage.clone(), options.clone());
                    self.handler.present_decision(&stage, &options);
                    report.decision_pending = true;
                }
            }
        }

        Ok(report)
    }

    /// Forward the user's selection to the decision flow.
    ///
    /// Observers receive the chosen key before this returns.
    pub fn select_option(&mut self, key: &str) -> Result<()> {
        self.decisions.select(key)?;
        Ok(())
    }

    /// Register an observer for chosen decision keys.
    pub fn subscribe_decisions(&mut self, observer: impl FnMut(&str) + 'static) -> SubscriberId {
        self.decisions.subscribe(observer)
    }

    /// Remove a previously registered observer.
    pub fn unsubscribe_decisions(&mut self, id: SubscriberId) -> bool {
        self.decisions.unsubscribe(id)
    }

    pub fn decision_state(&self) -> DecisionState {
        self.decisions.state()
    }

    /// Stage name of the pending decision, if one is awaiting selection.
    pub fn pending_stage(&self) -> Option<&str> {
        self.decisions.stage()
    }

    /// Options currently visible to the user (empty while hidden).
    pub fn visible_options(&self) -> &[DecisionOption] {
        self.decisions.options()
    }
}

/// Builder for [`ScenarioDirector`].
///
/// The effect handler is a required dependency: [`DirectorBuilder::build`]
/// fails with [`RuntimeError::MissingHandler`] when none was injected.
#[derive(Default)]
pub struct DirectorBuilder {
    scenario_dir: Option<PathBuf>,
    handler: Option<Box<dyn EffectHandler>>,
}

impl DirectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory scenario file names are resolved against.
    pub fn scenario_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scenario_dir = Some(dir.into());
        self
    }

    /// Host executor receiving the interpreted effects.
    pub fn handler(mut self, handler: Box<dyn EffectHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn build(self) -> Result<ScenarioDirector> {
        let handler = self.handler.ok_or(RuntimeError::MissingHandler)?;

        let mut decisions = DecisionFlow::new();
        // Chosen keys always land in the operator log, observer or not.
        decisions.subscribe(|key| tracing::info!(key, "user selected decision"));

        Ok(ScenarioDirector {
            scenario_dir: self
                .scenario_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SCENARIO_DIR)),
            handler,
            decisions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_without_handler_fails() {
        let result = ScenarioDirector::builder().scenario_dir("content").build();
        assert!(matches!(result, Err(RuntimeError::MissingHandler)));
    }
}
