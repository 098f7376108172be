//! Fault source trait definition

use anyhow::Result;

/// Fault source trait - allows swapping between demo and caller-supplied faults
///
/// Sources hand back raw keys; the report pipeline owns parsing them into
/// the closed `Fault` set.
pub trait FaultSource {
    /// Raw fault keys in detection priority order
    fn faults(&self) -> Result<Vec<String>>;

    /// Short name for logging
    fn name(&self) -> &'static str;
}
