//! String-tagged content identifiers resolved at interpretation time.
//!
//! Scenario documents carry raw tag strings so that new content can ship
//! before every host understands it. Tags that fail to resolve here are
//! skipped by the interpreter, never treated as errors.

/// Prefabricated environment structures a host can place.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnvironmentKind {
    /// Three-floor townhouse shell used by breach-and-clear drills.
    #[strum(serialize = "Townhouse_3Floor")]
    #[cfg_attr(feature = "serde", serde(rename = "Townhouse_3Floor"))]
    Townhouse3Floor,
}

/// Spawnable actor archetypes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorKind {
    /// Member of the trainee's own team.
    Friendly,
    /// Hostile combatant.
    Enemy,
}
