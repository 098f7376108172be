//! Report pipeline orchestration

use super::config::ReportConfig;
use super::model::CoachingReport;
use super::writer::ReportWriter;
use crate::coach::{compute_confidence, PracticePlan, Prescriber};
use crate::intake::parse_faults;
use crate::source::FaultSource;
use anyhow::{Context, Result};

/// Main report pipeline
pub struct ReportPipeline<S: FaultSource> {
    config: ReportConfig,
    prescriber: Prescriber,
    source: S,
}

impl<S: FaultSource> ReportPipeline<S> {
    /// Create a new report pipeline
    pub fn new(config: ReportConfig, source: S) -> Self {
        let prescriber = Prescriber::new().with_beginner_ordering(config.beginner_ordering);

        Self {
            config,
            prescriber,
            source,
        }
    }

    /// Build the coaching report
    pub fn run(&self) -> Result<CoachingReport> {
        log::info!(
            "Building report (source: {}, level: {}, sessions: {})",
            self.source.name(),
            self.config.level,
            self.config.sessions
        );

        // Step 1: Collect raw fault keys
        let raw = self
            .source
            .faults()
            .with_context(|| format!("Failed to read faults from {} source", self.source.name()))?;

        // Step 2: Parse at the boundary
        let parsed = parse_faults(&raw, self.config.unknown_faults)
            .context("Unrecognized fault in input")?;
        if !parsed.dropped.is_empty() {
            log::info!(
                "Dropped {} unrecognized fault key(s): {:?}",
                parsed.dropped.len(),
                parsed.dropped
            );
        }

        // Step 3: Prescription and confidence run independently on the same faults
        let prescriptions =
            self.prescriber.prescribe(&parsed.faults, self.config.level, self.config.junior);
        let confidence = compute_confidence(&parsed.faults, self.config.sessions);
        log::info!(
            "Prescribed {} drill(s); confidence {} ({})",
            prescriptions.len(),
            confidence.score,
            confidence.phase
        );

        // Step 4: Practice plan from the prescriptions
        let practice_plan = PracticePlan::from_prescriptions(&prescriptions);

        Ok(CoachingReport {
            player: self.config.player.clone(),
            level: self.config.level,
            junior: self.config.junior,
            sessions: self.config.sessions,
            prescriptions,
            confidence,
            practice_plan,
            dropped_faults: parsed.dropped,
            generated_at: chrono::Local::now().to_rfc3339(),
        })
    }

    /// Build the report and write it to the configured output directory
    pub fn run_and_write(&self) -> Result<CoachingReport> {
        let output_dir = self
            .config
            .output_dir
            .clone()
            .context("No output directory configured")?;

        let report = self.run()?;
        ReportWriter::new(output_dir).write(&report)?;
        Ok(report)
    }
}
