//! Virtual Coach - golf swing coaching report engine
//!
//! This library turns a set of detected swing faults and a practice-session
//! count into a coaching report: prescribed drills, a confidence signal and
//! a 14-day practice plan.

pub mod catalog;
pub mod coach;
pub mod intake;
pub mod model;
pub mod report;
pub mod source;
pub mod validation;

pub use coach::{compute_confidence, prescribe, Prescriber};
pub use report::config::ReportConfig;
pub use report::pipeline::ReportPipeline;
