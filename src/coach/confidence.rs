//! Confidence curve for a motor-pattern change
//!
//! Session count alone picks one of three regimes (Dip, Gap Exit, Climb).
//! Nothing is stored between calls; the caller owns the session counter.

use crate::model::{ConfidenceResult, Fault, Trend, CONFIDENCE_MAX, CONFIDENCE_MIN};

/// Baseline when a sequencing fault is being reworked
const SEQUENCING_BASE: i64 = 42;

/// Baseline for every other fault set
const DEFAULT_BASE: i64 = 55;

/// Last session of the Dip regime
const DIP_LAST_SESSION: i64 = 2;

/// Last session of the Gap Exit regime
const EXIT_LAST_SESSION: i64 = 6;

const DIP_NOTE: &str = "Feeling awkward is expected. The new pattern is replacing an old one, \
     so contact and confidence dip before they come back.";

const EXIT_NOTE: &str = "You're leaving the gap. Keep grooving the new pattern at controlled \
     speed; don't drift back to the old feel.";

const CLIMB_NOTE: &str = "The new pattern is consolidating. Add speed and on-course reps while \
     keeping the same cue.";

/// Regime for a session count (negative counts as zero)
pub fn trend_for_sessions(sessions: i64) -> Trend {
    match sessions.max(0) {
        s if s <= DIP_LAST_SESSION => Trend::Dip,
        s if s <= EXIT_LAST_SESSION => Trend::Exit,
        _ => Trend::Climb,
    }
}

/// Compute the confidence score, phase and trend for a fault set
///
/// Negative `sessions` are treated as zero. The score is clamped to
/// `[CONFIDENCE_MIN, CONFIDENCE_MAX]`.
pub fn compute_confidence(faults: &[Fault], sessions: i64) -> ConfidenceResult {
    let s = sessions.max(0);
    let has_seq = faults.iter().any(Fault::is_sequencing);
    let base = if has_seq { SEQUENCING_BASE } else { DEFAULT_BASE };

    let trend = trend_for_sessions(s);
    let (raw, phase, note) = match trend {
        Trend::Dip => (base - 8 + 2 * s, "Dip (normal)", DIP_NOTE),
        Trend::Exit => (base + 5 + 4 * (s - 3), "Gap Exit", EXIT_NOTE),
        Trend::Climb => {
            let climb = (s - 7).saturating_mul(3);
            ((base + 25).saturating_add(climb), "Climb", CLIMB_NOTE)
        }
    };

    let score = raw.clamp(i64::from(CONFIDENCE_MIN), i64::from(CONFIDENCE_MAX)) as u8;
    log::debug!(
        "Confidence: sessions={} seq={} raw={} score={} ({})",
        s,
        has_seq,
        raw,
        score,
        phase
    );

    ConfidenceResult {
        score,
        phase,
        trend,
        note,
    }
}
