//! Report file output

use super::model::CoachingReport;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// JSON report file name
pub const REPORT_FILE: &str = "report.json";

/// Plain-text plan file name
pub const PLAN_FILE: &str = "plan.txt";

/// Writes report files into an output directory
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Create a new writer for the given output directory
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Create the output directory if needed
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory {:?}", self.output_dir)
        })?;
        Ok(())
    }

    /// Path of the JSON report
    pub fn report_path(&self) -> PathBuf {
        report_path(&self.output_dir)
    }

    /// Path of the plain-text plan
    pub fn plan_path(&self) -> PathBuf {
        self.output_dir.join(PLAN_FILE)
    }

    /// Write report.json and plan.txt
    pub fn write(&self, report: &CoachingReport) -> Result<()> {
        self.init()?;

        let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        let report_path = self.report_path();
        fs::write(&report_path, json)
            .with_context(|| format!("Failed to write {:?}", report_path))?;
        log::debug!("Wrote {:?}", report_path);

        let plan_path = self.plan_path();
        fs::write(&plan_path, report.practice_plan.to_text())
            .with_context(|| format!("Failed to write {:?}", plan_path))?;
        log::debug!("Wrote {:?}", plan_path);

        log::info!("Report written to {:?}", self.output_dir);
        Ok(())
    }
}

/// Path of the JSON report inside an output directory
pub fn report_path(output_dir: &Path) -> PathBuf {
    output_dir.join(REPORT_FILE)
}
