use crate::coach::PracticePlan;
use crate::model::{ConfidenceResult, Level, Prescription};
use serde::Serialize;

/// Complete coaching report for one swing
#[derive(Debug, Clone, Serialize)]
pub struct CoachingReport {
    pub player: Option<String>,
    pub level: Level,
    pub junior: bool,

    /// Session count as supplied by the caller
    pub sessions: i64,

    /// Prescriptions in priority order (1 or 2)
    pub prescriptions: Vec<Prescription>,

    pub confidence: ConfidenceResult,

    pub practice_plan: PracticePlan,

    /// Raw fault keys that were not recognized and skipped
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dropped_faults: Vec<String>,

    /// Local time the report was generated (RFC 3339)
    pub generated_at: String,
}
