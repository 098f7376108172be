use serde::{Deserialize, Serialize};

/// Direction of the confidence curve for the current session regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Dip,
    Exit,
    Climb,
}

impl Trend {
    /// Short tag shown next to the confidence meter
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Dip => "Dip",
            Trend::Exit => "Gap Exit",
            Trend::Climb => "Climb",
        }
    }
}

/// Confidence signal for a fault set at a given session count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfidenceResult {
    /// Always within `[CONFIDENCE_MIN, CONFIDENCE_MAX]`
    pub score: u8,

    /// Phase label, e.g. "Dip (normal)"
    pub phase: &'static str,

    pub trend: Trend,

    /// Short motivational note for the phase
    pub note: &'static str,
}

/// Lowest confidence score ever reported
pub const CONFIDENCE_MIN: u8 = 10;

/// Highest confidence score ever reported
pub const CONFIDENCE_MAX: u8 = 98;
