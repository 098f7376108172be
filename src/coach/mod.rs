//! Coaching engines
//!
//! Prescription and confidence are pure functions over the closed model
//! types. They share no state and can be called independently from any
//! thread. The practice plan is derived from the prescriptions.

mod confidence;
mod plan;
mod prescription;

pub use confidence::{compute_confidence, trend_for_sessions};
pub use plan::{PlanDay, PracticePlan, PLAN_DAYS};
pub use prescription::{
    prescribe, BeginnerOrdering, Prescriber, DEFAULT_FAULTS, MAX_PRESCRIPTIONS,
};
