//! Static fault and drill catalogs
//!
//! Read-only lookups keyed by the closed `Fault` and `DrillId` enums.
//! Lookup is total: every fault maps to exactly one drill.

mod drills;
mod faults;

pub use drills::drill;
pub use faults::{body_requirement, drill_for, drill_id_for};
