//! Immutable scenario description model.
//!
//! A [`ScenarioDescription`] is produced once per load, interpreted, and
//! discarded. The three sections are independently optional: absence means
//! "no building" / "no actors" / "no stages" and is preserved as-is on
//! re-serialization rather than being defaulted to empty.
use std::fmt;

use indexmap::IndexMap;

/// 3D world-space point in host units.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPosition {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for WorldPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Yaw-only rotation in degrees.
///
/// Buildings are placed upright; pitch and roll never appear in scenario
/// documents.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orientation {
    pub yaw: f32,
}

impl Orientation {
    pub fn new(yaw: f32) -> Self {
        Self { yaw }
    }
}

/// Placement of a prefabricated structure, parsed from the `building`
/// section.
///
/// The tag is kept verbatim; recognition against [`crate::EnvironmentKind`]
/// happens at interpretation so descriptions round-trip without loss.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingSpec {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub tag: String,
    pub location: WorldPosition,
    pub rotation: Orientation,
}

/// One entry of the `actors` section.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorSpawnSpec {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub tag: String,
    pub spawn: WorldPosition,
}

/// Display text for one decision option.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionSpec {
    pub description: String,
}

/// A named decision point within a scenario.
///
/// Option keys are unique by map semantics; iteration order follows the
/// source document.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stage {
    pub name: String,
    pub decisions: IndexMap<String, DecisionSpec>,
}

/// Root of a parsed scenario document.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioDescription {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub building: Option<BuildingSpec>,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub actors: Option<Vec<ActorSpawnSpec>>,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub stages: Option<Vec<Stage>>,
}

impl ScenarioDescription {
    /// The active decision point: only the first stage is ever interpreted.
    pub fn first_stage(&self) -> Option<&Stage> {
        self.stages.as_deref().and_then(|stages| stages.first())
    }
}
