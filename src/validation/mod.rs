//! Validation utilities
//!
//! Re-reads written reports and checks the coaching invariants

mod report_check;

pub use report_check::validate_report;
