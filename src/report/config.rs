//! Report configuration

use crate::coach::BeginnerOrdering;
use crate::intake::UnknownFaultPolicy;
use crate::model::Level;
use std::path::PathBuf;

/// Configuration for a report run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Player skill level (affects prescription ordering only)
    pub level: Level,

    /// Junior player flag, carried into the report
    pub junior: bool,

    /// Practice sessions completed so far (negative values count as zero)
    pub sessions: i64,

    /// Player name shown in the report (optional)
    pub player: Option<String>,

    /// What to do with fault keys outside the closed set
    pub unknown_faults: UnknownFaultPolicy,

    /// Beginner ordering policy for the prescription engine
    pub beginner_ordering: BeginnerOrdering,

    /// Directory to write report.json and plan.txt into (None = don't write)
    pub output_dir: Option<PathBuf>,
}

impl ReportConfig {
    /// Create a new report configuration
    pub fn new(level: Level) -> Self {
        Self {
            level,
            junior: false,
            sessions: 0,
            player: None,
            unknown_faults: UnknownFaultPolicy::Drop,
            beginner_ordering: BeginnerOrdering::Legacy,
            output_dir: None,
        }
    }

    /// Set the session count
    pub fn with_sessions(mut self, sessions: i64) -> Self {
        self.sessions = sessions;
        self
    }

    /// Mark as a junior player
    pub fn with_junior(mut self, junior: bool) -> Self {
        self.junior = junior;
        self
    }

    /// Set player name
    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }

    /// Set unknown fault handling
    pub fn with_unknown_faults(mut self, policy: UnknownFaultPolicy) -> Self {
        self.unknown_faults = policy;
        self
    }

    /// Set beginner ordering policy
    pub fn with_beginner_ordering(mut self, ordering: BeginnerOrdering) -> Self {
        self.beginner_ordering = ordering;
        self
    }

    /// Write report files into this directory
    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = Some(dir);
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(Level::default())
    }
}
