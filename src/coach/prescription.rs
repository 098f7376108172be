//! Fault-driven drill prescription

use crate::catalog::{body_requirement, drill_for};
use crate::model::{Fault, Level, Prescription};

/// Most prescriptions handed out per call
pub const MAX_PRESCRIPTIONS: usize = 2;

/// Fault pair substituted when nothing was detected, and front-loaded for beginners
pub const DEFAULT_FAULTS: [Fault; 2] = [Fault::LateHips, Fault::ArmsStartDown];

/// How the beginner branch combines the sequencing pair with detected faults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BeginnerOrdering {
    /// Sequencing pair concatenated in front of the detected top-2, then truncated.
    /// Beginners therefore always get `[late_hips, arms_start_down]`; their own
    /// detected faults never surface.
    #[default]
    Legacy,

    /// `late_hips` first, then the player's own top fault, then `arms_start_down`,
    /// deduplicated before truncation
    SequencingFirst,
}

/// Prescription engine with its ordering policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Prescriber {
    beginner_ordering: BeginnerOrdering,
}

impl Prescriber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the beginner ordering policy
    pub fn with_beginner_ordering(mut self, ordering: BeginnerOrdering) -> Self {
        self.beginner_ordering = ordering;
        self
    }

    /// Select at most two faults and pair each with its body requirement and drill
    ///
    /// `faults` may be empty or contain duplicates. The result always holds one
    /// or two prescriptions. `junior` is accepted for callers but does not change
    /// the selection yet.
    pub fn prescribe(&self, faults: &[Fault], level: Level, junior: bool) -> Vec<Prescription> {
        if junior {
            log::debug!("Junior player: using standard prescription rules");
        }

        let uniq = dedup(faults.iter().copied());
        let candidates = if uniq.is_empty() {
            log::debug!("No faults detected, substituting default sequencing pair");
            DEFAULT_FAULTS.to_vec()
        } else {
            uniq
        };
        let top: Vec<Fault> = candidates.into_iter().take(MAX_PRESCRIPTIONS).collect();

        let ordered: Vec<Fault> = match (level, self.beginner_ordering) {
            (Level::Beginner, BeginnerOrdering::Legacy) => DEFAULT_FAULTS
                .into_iter()
                .chain(top)
                .take(MAX_PRESCRIPTIONS)
                .collect(),
            (Level::Beginner, BeginnerOrdering::SequencingFirst) => {
                let own = top.first().copied();
                dedup(
                    [Some(Fault::LateHips), own, Some(Fault::ArmsStartDown)]
                        .into_iter()
                        .flatten(),
                )
                .into_iter()
                .take(MAX_PRESCRIPTIONS)
                .collect()
            }
            (Level::Intermediate | Level::Advanced, _) => top,
        };

        ordered
            .into_iter()
            .map(|fault| Prescription {
                fault,
                body_requirement: body_requirement(fault),
                drill: drill_for(fault),
            })
            .collect()
    }
}

/// Prescribe with the default (legacy) ordering policy
pub fn prescribe(faults: &[Fault], level: Level, junior: bool) -> Vec<Prescription> {
    Prescriber::new().prescribe(faults, level, junior)
}

/// Remove duplicates, keeping first-occurrence order
fn dedup(faults: impl IntoIterator<Item = Fault>) -> Vec<Fault> {
    let mut out: Vec<Fault> = Vec::new();
    for fault in faults {
        if !out.contains(&fault) {
            out.push(fault);
        }
    }
    out
}
