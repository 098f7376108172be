use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a registered drill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DrillId {
    SeqTurtleHare,
    HipEarlyStart,
    PostureWall,
    Hinge90Check,
}

impl DrillId {
    /// Every drill, in catalog order
    pub const ALL: [DrillId; 4] = [
        DrillId::SeqTurtleHare,
        DrillId::HipEarlyStart,
        DrillId::PostureWall,
        DrillId::Hinge90Check,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DrillId::SeqTurtleHare => "SEQ_TURTLE_HARE",
            DrillId::HipEarlyStart => "HIP_EARLY_START",
            DrillId::PostureWall => "POSTURE_WALL",
            DrillId::Hinge90Check => "HINGE_90_CHECK",
        }
    }

    /// Resolve a drill key, `None` if it is not registered
    pub fn from_key(key: &str) -> Option<Self> {
        DrillId::ALL.into_iter().find(|id| id.key() == key)
    }
}

impl fmt::Display for DrillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A practice exercise (statically registered, never mutated)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drill {
    /// Unique drill identifier
    pub id: DrillId,

    /// Display name
    pub title: &'static str,

    /// Ordered instruction steps
    pub how: &'static [&'static str],

    /// Reps/sets prescription
    pub reps: &'static str,

    /// Single cue to carry onto the course
    pub on_course_cue: &'static str,
}
