//! Coaching data model
//!
//! Closed domain types shared by the catalogs, the coaching engines and
//! the report layer. None of these are created from untyped input except
//! through the fallible `FromStr` boundaries on `Fault` and `Level`.

mod confidence;
mod drill;
mod fault;
mod level;
mod prescription;

pub use confidence::{ConfidenceResult, Trend, CONFIDENCE_MAX, CONFIDENCE_MIN};
pub use drill::{Drill, DrillId};
pub use fault::{Fault, FaultParseError};
pub use level::{Level, LevelParseError};
pub use prescription::Prescription;
