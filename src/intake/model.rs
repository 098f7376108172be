//! Raw intake document shape (as stored in intake JSON files)

use serde::Deserialize;

/// Intake record as written by the upload form; every field optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntakeRecord {
    pub player: Option<String>,
    pub level: Option<String>,
    pub junior: Option<bool>,
    pub sessions: Option<i64>,
    #[serde(default)]
    pub faults: Vec<String>,
}
