//! End-to-end scenario playback: load → interpret → dispatch → select.
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use scenario_core::{
    ActorKind, DecisionOption, DecisionState, EnvironmentKind, WorldPosition,
};
use scenario_runtime::{EffectHandler, LoadError, RuntimeError, ScenarioDirector};
use tempfile::TempDir;

/// Handler that records every dispatched effect as a line, so ordering can
/// be asserted across effect kinds.
struct RecordingHandler {
    log: Rc<RefCell<Vec<String>>>,
}

impl EffectHandler for RecordingHandler {
    fn place_environment(&mut self, kind: EnvironmentKind, location: WorldPosition, yaw: f32) {
        self.log
            .borrow_mut()
            .push(format!("environment {kind} at {location} yaw {yaw}"));
    }

    fn spawn_actor(&mut self, kind: ActorKind, position: WorldPosition) {
        self.log.borrow_mut().push(format!("actor {kind} at {position}"));
    }

    fn present_decision(&mut self, stage: &str, options: &[DecisionOption]) {
        let labels: Vec<_> = options.iter().map(DecisionOption::label).collect();
        self.log
            .borrow_mut()
            .push(format!("decision {stage}: [{}]", labels.join(", ")));
    }
}

fn write_scenario(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).unwrap();
}

fn director_with_log(dir: &TempDir) -> (ScenarioDirector, Rc<RefCell<Vec<String>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let director = ScenarioDirector::builder()
        .scenario_dir(dir.path())
        .handler(Box::new(RecordingHandler {
            log: Rc::clone(&log),
        }))
        .build()
        .unwrap();
    (director, log)
}

const ENTRY_SCENARIO: &str = r#"{
    "scenario": {
        "building": {
            "type": "Townhouse_3Floor",
            "location": { "x": 0.0, "y": 0.0, "z": 0.0 },
            "rotation": { "yaw": 90.0 }
        },
        "actors": [
            { "type": "Friendly", "spawn": { "x": -400.0, "y": 150.0, "z": 0.0 } },
            { "type": "Civilian", "spawn": { "x": 0.0, "y": 0.0, "z": 0.0 } },
            { "type": "Enemy", "spawn": { "x": 350.0, "y": 0.0, "z": 300.0 } }
        ],
        "stages": [
            {
                "name": "Initial Entry",
                "decisions": {
                    "breach_front": { "description": "Breach the front door" },
                    "hold_perimeter": { "description": "Hold and wait" }
                }
            },
            {
                "name": "Second Floor Sweep",
                "decisions": { "clear_left": { "description": "Clear left" } }
            }
        ]
    }
}"#;

#[test]
fn full_scenario_dispatches_effects_in_order() {
    let dir = TempDir::new().unwrap();
    write_scenario(&dir, "entry.json", ENTRY_SCENARIO);
    let (mut director, log) = director_with_log(&dir);

    let report = director.run("entry.json").unwrap();

    // Environment first, recognized actors in source order (the civilian
    // entry is skipped), decision last and built from the first stage only.
    assert_eq!(
        *log.borrow(),
        vec![
            "environment Townhouse_3Floor at (0, 0, 0) yaw 90".to_string(),
            "actor Friendly at (-400, 150, 0)".to_string(),
            "actor Enemy at (350, 0, 300)".to_string(),
            "decision Initial Entry: [breach_front: Breach the front door, \
             hold_perimeter: Hold and wait]"
                .to_string(),
        ]
    );

    assert_eq!(report.environments_placed, 1);
    assert_eq!(report.actors_spawned, 2);
    assert!(report.decision_pending);

    assert_eq!(director.decision_state(), DecisionState::AwaitingSelection);
    assert_eq!(director.pending_stage(), Some("Initial Entry"));
    let keys: Vec<_> = director
        .visible_options()
        .iter()
        .map(|option| option.key.clone())
        .collect();
    assert_eq!(keys, vec!["breach_front", "hold_perimeter"]);
}

#[test]
fn selection_notifies_subscribers_and_hides_the_decision() {
    let dir = TempDir::new().unwrap();
    write_scenario(&dir, "entry.json", ENTRY_SCENARIO);
    let (mut director, _log) = director_with_log(&dir);

    let chosen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&chosen);
    director.subscribe_decisions(move |key| sink.borrow_mut().push(key.to_string()));

    director.run("entry.json").unwrap();
    director.select_option("breach_front").unwrap();

    assert_eq!(*chosen.borrow(), vec!["breach_front".to_string()]);
    assert_eq!(director.decision_state(), DecisionState::Hidden);
    assert!(director.visible_options().is_empty());

    // A second selection has nothing to resolve.
    assert!(matches!(
        director.select_option("hold_perimeter"),
        Err(RuntimeError::Decision(_))
    ));
    assert_eq!(chosen.borrow().len(), 1);
}

#[test]
fn rerunning_replaces_the_pending_decision() {
    let dir = TempDir::new().unwrap();
    write_scenario(&dir, "entry.json", ENTRY_SCENARIO);
    write_scenario(
        &dir,
        "sweep.json",
        r#"{ "scenario": { "stages": [ { "name": "Sweep", "decisions": {
            "clear_left": { "description": "Clear left" }
        } } ] } }"#,
    );
    let (mut director, _log) = director_with_log(&dir);

    director.run("entry.json").unwrap();
    director.run("sweep.json").unwrap();

    assert_eq!(director.pending_stage(), Some("Sweep"));
    let keys: Vec<_> = director
        .visible_options()
        .iter()
        .map(|option| option.key.clone())
        .collect();
    assert_eq!(keys, vec!["clear_left"]);
}

#[test]
fn failed_load_produces_zero_effects() {
    let dir = TempDir::new().unwrap();
    write_scenario(&dir, "rootless.json", r#"{ "mission": {} }"#);
    let (mut director, log) = director_with_log(&dir);

    assert!(matches!(
        director.run("missing.json"),
        Err(RuntimeError::Load(LoadError::FileNotFound { .. }))
    ));
    assert!(matches!(
        director.run("rootless.json"),
        Err(RuntimeError::Load(LoadError::Schema { .. }))
    ));

    assert!(log.borrow().is_empty());
    assert_eq!(director.decision_state(), DecisionState::Hidden);
}
