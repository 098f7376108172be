//! Re-read a written report and check its invariants

use crate::catalog::drill_id_for;
use crate::coach::{compute_confidence, trend_for_sessions, MAX_PRESCRIPTIONS, PLAN_DAYS};
use crate::model::{DrillId, Fault, Trend, CONFIDENCE_MAX, CONFIDENCE_MIN};
use crate::report::writer::report_path;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Independent read-side shape of report.json
#[derive(Debug, Deserialize)]
struct ReportSnapshot {
    sessions: i64,
    prescriptions: Vec<PrescriptionSnapshot>,
    confidence: ConfidenceSnapshot,
    practice_plan: PlanSnapshot,
}

#[derive(Debug, Deserialize)]
struct PrescriptionSnapshot {
    fault: String,
    drill: DrillSnapshot,
}

#[derive(Debug, Deserialize)]
struct DrillSnapshot {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ConfidenceSnapshot {
    score: i64,
    phase: String,
    trend: Trend,
}

#[derive(Debug, Deserialize)]
struct PlanSnapshot {
    days: Vec<DaySnapshot>,
}

#[derive(Debug, Deserialize)]
struct DaySnapshot {
    day: u32,
}

/// Validate the report written to an output directory
///
/// # Arguments
/// * `output_dir` - Directory holding report.json
///
/// # Returns
/// Ok(()) if validation passes, Err otherwise
pub fn validate_report(output_dir: &Path) -> Result<()> {
    let path = report_path(output_dir);
    log::info!("Validating report at: {:?}", path);

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Report not found at: {:?}", path))?;
    let snapshot: ReportSnapshot =
        serde_json::from_str(&text).with_context(|| format!("Unreadable report: {:?}", path))?;

    check_prescriptions(&snapshot.prescriptions)?;
    check_confidence(&snapshot.confidence, snapshot.sessions)?;
    check_plan(&snapshot.practice_plan)?;

    log::info!(
        "Report OK: {} prescription(s), confidence {}",
        snapshot.prescriptions.len(),
        snapshot.confidence.score
    );
    Ok(())
}

fn check_prescriptions(prescriptions: &[PrescriptionSnapshot]) -> Result<()> {
    if prescriptions.is_empty() || prescriptions.len() > MAX_PRESCRIPTIONS {
        bail!(
            "Expected 1-{} prescriptions, found {}",
            MAX_PRESCRIPTIONS,
            prescriptions.len()
        );
    }

    let mut seen: Vec<Fault> = Vec::new();
    for p in prescriptions {
        let fault: Fault = p.fault.parse()?;
        if seen.contains(&fault) {
            bail!("Fault {} prescribed twice", fault);
        }
        seen.push(fault);

        let expected = drill_id_for(fault);
        match DrillId::from_key(&p.drill.id) {
            Some(id) if id == expected => {}
            Some(id) => bail!("Fault {} has drill {}, expected {}", fault, id, expected),
            None => bail!("Unknown drill id {:?} for fault {}", p.drill.id, fault),
        }
    }
    Ok(())
}

fn check_confidence(confidence: &ConfidenceSnapshot, sessions: i64) -> Result<()> {
    let bounds = i64::from(CONFIDENCE_MIN)..=i64::from(CONFIDENCE_MAX);
    if !bounds.contains(&confidence.score) {
        bail!(
            "Confidence score {} outside [{}, {}]",
            confidence.score,
            CONFIDENCE_MIN,
            CONFIDENCE_MAX
        );
    }

    if !confidence.phase.starts_with(confidence.trend.label()) {
        bail!(
            "Confidence phase {:?} does not match trend {:?}",
            confidence.phase,
            confidence.trend
        );
    }

    let expected_trend = trend_for_sessions(sessions);
    if confidence.trend != expected_trend {
        bail!(
            "Confidence trend {:?} does not match {} session(s), expected {:?}",
            confidence.trend,
            sessions,
            expected_trend
        );
    }

    // The fault set only picks the baseline, so the score is one of two values
    let candidates = [
        compute_confidence(&[], sessions).score,
        compute_confidence(&[Fault::LateHips], sessions).score,
    ];
    if !candidates.iter().any(|&c| i64::from(c) == confidence.score) {
        bail!(
            "Confidence score {} impossible at {} session(s), expected one of {:?}",
            confidence.score,
            sessions,
            candidates
        );
    }
    Ok(())
}

fn check_plan(plan: &PlanSnapshot) -> Result<()> {
    let days: Vec<u32> = plan.days.iter().map(|d| d.day).collect();
    let expected: Vec<u32> = (1..=PLAN_DAYS).collect();
    if days != expected {
        bail!("Practice plan days out of order or incomplete: {:?}", days);
    }
    Ok(())
}
