use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A detected swing flaw from the closed fault set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fault {
    /// Lead hip starts the downswing too late
    LateHips,

    /// Arms fire from the top before the body leads
    ArmsStartDown,

    /// Hips move toward the ball and posture stands up early
    EarlyExtension,

    /// Lead-hand grip sits in the palm so the club cannot hinge
    GripInPalmHingeLimited,
}

/// Error returned when an untyped fault key is not in the closed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FaultParseError {
    #[error("unknown fault key: {0:?}")]
    Unknown(String),
}

impl Fault {
    /// Every fault, in catalog order
    pub const ALL: [Fault; 4] = [
        Fault::LateHips,
        Fault::ArmsStartDown,
        Fault::EarlyExtension,
        Fault::GripInPalmHingeLimited,
    ];

    /// Stable snake_case key used in intake and report documents
    pub fn key(&self) -> &'static str {
        match self {
            Fault::LateHips => "late_hips",
            Fault::ArmsStartDown => "arms_start_down",
            Fault::EarlyExtension => "early_extension",
            Fault::GripInPalmHingeLimited => "grip_in_palm_hinge_limited",
        }
    }

    /// Get human-readable fault name
    pub fn title(&self) -> &'static str {
        match self {
            Fault::LateHips => "Late hips",
            Fault::ArmsStartDown => "Arms start down first",
            Fault::EarlyExtension => "Early extension",
            Fault::GripInPalmHingeLimited => "Grip in palm (hinge limited)",
        }
    }

    /// Sequencing faults change the feel of the whole transition
    pub fn is_sequencing(&self) -> bool {
        matches!(self, Fault::LateHips | Fault::ArmsStartDown)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Fault {
    type Err = FaultParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Fault::ALL
            .into_iter()
            .find(|fault| fault.key() == normalized)
            .ok_or_else(|| FaultParseError::Unknown(s.to_string()))
    }
}
