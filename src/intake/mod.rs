//! Intake parsing
//!
//! Reads the JSON intake document produced alongside an uploaded swing
//! and converts untyped fault keys into the closed `Fault` set.

mod faults;
mod model;

pub use faults::{parse_faults, ParsedFaults, UnknownFaultPolicy};
pub use model::IntakeRecord;

use crate::model::Level;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Intake with typed level; fault keys stay raw until the pipeline parses them
#[derive(Debug, Clone, Default)]
pub struct Intake {
    pub player: Option<String>,
    pub level: Option<Level>,
    pub junior: Option<bool>,
    pub sessions: Option<i64>,
    pub faults: Vec<String>,
}

/// Load an intake document from a JSON file
pub fn load_intake(path: &Path) -> Result<Intake> {
    log::info!("Loading intake from {:?}", path);
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read intake file: {:?}", path))?;
    let intake = parse_intake(&text)
        .with_context(|| format!("Invalid intake file: {:?}", path))?;

    log::info!(
        "Intake loaded: {} fault key(s), level {}",
        intake.faults.len(),
        intake.level.map(|l| l.key()).unwrap_or("unset")
    );
    Ok(intake)
}

/// Parse an intake document from JSON text
pub fn parse_intake(text: &str) -> Result<Intake> {
    let record: IntakeRecord = serde_json::from_str(text).context("Malformed intake JSON")?;

    let level = record
        .level
        .as_deref()
        .map(str::parse::<Level>)
        .transpose()?;

    Ok(Intake {
        player: record.player,
        level,
        junior: record.junior,
        sessions: record.sessions,
        faults: record.faults,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_intake() {
        let intake = parse_intake(
            r#"{"player":"Sam","level":"advanced","junior":true,"sessions":4,
                "faults":["early_extension","late_hips"]}"#,
        )
        .unwrap();
        assert_eq!(intake.player.as_deref(), Some("Sam"));
        assert_eq!(intake.level, Some(Level::Advanced));
        assert_eq!(intake.junior, Some(true));
        assert_eq!(intake.sessions, Some(4));
        assert_eq!(intake.faults, vec!["early_extension", "late_hips"]);
    }

    #[test]
    fn test_parse_empty_intake() {
        let intake = parse_intake("{}").unwrap();
        assert!(intake.player.is_none());
        assert!(intake.level.is_none());
        assert!(intake.faults.is_empty());
    }

    #[test]
    fn test_bad_level_is_an_error() {
        let err = parse_intake(r#"{"level":"pro"}"#).unwrap_err();
        assert!(err.to_string().contains("pro"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(parse_intake("{faults:").is_err());
    }
}
