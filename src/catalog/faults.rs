//! Fault registry: body requirement and assigned drill per fault

use super::drills::drill;
use crate::model::{Drill, DrillId, Fault};

/// One-sentence biomechanical requirement that fixes the fault
pub fn body_requirement(fault: Fault) -> &'static str {
    match fault {
        Fault::LateHips => {
            "Lead hip starts down early (lateral + unwind) before the arms fire."
        }
        Fault::ArmsStartDown => "Arms wait ~0.08-0.12s so the body can lead the race.",
        Fault::EarlyExtension => "Maintain hip hinge longer; extend late (right before impact).",
        Fault::GripInPalmHingeLimited => {
            "Lead hand more in fingers so the club can hinge to ~90°."
        }
    }
}

/// Drill id assigned to a fault
pub fn drill_id_for(fault: Fault) -> DrillId {
    match fault {
        Fault::LateHips => DrillId::HipEarlyStart,
        Fault::ArmsStartDown => DrillId::SeqTurtleHare,
        Fault::EarlyExtension => DrillId::PostureWall,
        Fault::GripInPalmHingeLimited => DrillId::Hinge90Check,
    }
}

/// Drill assigned to a fault
pub fn drill_for(fault: Fault) -> &'static Drill {
    drill(drill_id_for(fault))
}
