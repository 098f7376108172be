//! Demo fault source
//!
//! Stands in for a fault detector when no swing has been analyzed yet.
//! Returns the fault pair used by the demo report.

use super::traits::FaultSource;
use crate::coach::DEFAULT_FAULTS;
use anyhow::Result;

/// Demo source returning the sequencing fault pair
pub struct DemoSource;

impl DemoSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DemoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FaultSource for DemoSource {
    fn faults(&self) -> Result<Vec<String>> {
        log::debug!("Demo source: no detector attached, using demo faults");
        Ok(DEFAULT_FAULTS.iter().map(|f| f.key().to_string()).collect())
    }

    fn name(&self) -> &'static str {
        "demo"
    }
}
