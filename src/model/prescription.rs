use super::{Drill, Fault};
use serde::Serialize;

/// A detected fault paired with the body requirement that fixes it and its drill
///
/// Created fresh per prescription call; borrows the drill from the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prescription {
    pub fault: Fault,

    /// Biomechanical requirement that fixes the fault
    pub body_requirement: &'static str,

    pub drill: &'static Drill,
}
