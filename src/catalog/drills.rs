//! Drill registry

use crate::model::{Drill, DrillId};

static SEQ_TURTLE_HARE: Drill = Drill {
    id: DrillId::SeqTurtleHare,
    title: "Turtle + Hare Transition (arms give the body a head start)",
    how: &[
        "Make a backswing to lead-arm-parallel (P3) and pause for 1 beat.",
        "Start the downswing by shifting pressure left and bumping the lead hip 1-2 inches.",
        "Keep the arms 'quiet' for a split second while the lower body starts turning.",
        "Then let the arms fall-feel like they're arriving late on purpose.",
    ],
    reps: "3 sets x 12 slow reps (mirror), then 20 balls at 60% speed.",
    on_course_cue: "Bump-left… THEN drop the arms.",
};

static HIP_EARLY_START: Drill = Drill {
    id: DrillId::HipEarlyStart,
    title: "Left Hip Starts Before Arms Finish (the elite move)",
    how: &[
        "Swing to the top at 70% speed.",
        "Before the backswing finishes, feel the lead hip glide slightly toward target.",
        "Hold the arms 'up' for a micro-beat while the pelvis begins to unwind.",
        "Hit punch shots first-then build to full swings.",
    ],
    reps: "10 rehearsal swings + 15 punch balls + 15 full balls.",
    on_course_cue: "Lead hip starts while club is still going back.",
};

static POSTURE_WALL: Drill = Drill {
    id: DrillId::PostureWall,
    title: "Posture Reset (fast win if posture is the limiter)",
    how: &[
        "Stand with your butt 3-4 inches from a wall.",
        "Hinge at the hips until your glutes gently touch the wall-keep chest proud.",
        "Maintain that hip hinge and rotate slowly without losing the wall contact.",
        "Then do 10 slow swings keeping the hinge (no 'stand-up').",
    ],
    reps: "Daily: 5 minutes. Before practice: 2 minutes.",
    on_course_cue: "Stay hinged-rotate, don't pop.",
};

static HINGE_90_CHECK: Drill = Drill {
    id: DrillId::Hinge90Check,
    title: "90° Hinge Check at P3 (fix grip-in-palm speed leak)",
    how: &[
        "Grip check: lead hand more in fingers than palm (knuckles visible).",
        "Swing to lead-arm-parallel and STOP.",
        "Look for ~90° angle between lead forearm and shaft (hinge).",
        "If it's ~45°, reset grip and repeat until the hinge shows up.",
    ],
    reps: "3 sets x 10 mirror reps + 20 balls focusing only on hinge.",
    on_course_cue: "Fingers grip… hinge early.",
};

/// Look up a drill by id
pub fn drill(id: DrillId) -> &'static Drill {
    match id {
        DrillId::SeqTurtleHare => &SEQ_TURTLE_HARE,
        DrillId::HipEarlyStart => &HIP_EARLY_START,
        DrillId::PostureWall => &POSTURE_WALL,
        DrillId::Hinge90Check => &HINGE_90_CHECK,
    }
}
