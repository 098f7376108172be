//! 14-day practice plan built from the prescribed drills

use crate::model::Prescription;
use serde::Serialize;

/// Number of days in a plan
pub const PLAN_DAYS: u32 = 14;

/// Every n-th day is a filmed test day
const TEST_DAY_EVERY: u32 = 7;

/// Last day of the primary-drill block
const PRIMARY_LAST_DAY: u32 = 5;

/// Last day of the blend block
const BLEND_LAST_DAY: u32 = 10;

/// One day of practice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanDay {
    /// 1-based day number
    pub day: u32,
    pub focus: String,
    pub reps: String,
}

/// Two-week practice plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PracticePlan {
    pub headline: String,
    pub days: Vec<PlanDay>,
}

impl PracticePlan {
    /// Build the plan from prescriptions in priority order
    ///
    /// Days 1-5 work the first drill, 6-10 blend both drills, 11-13 shift to
    /// performance work; days 7 and 14 are filmed test days. With a single
    /// prescription every drill block works that one drill.
    pub fn from_prescriptions(prescriptions: &[Prescription]) -> Self {
        let primary = prescriptions.first().map(|p| p.drill.title).unwrap_or("Priority");
        let secondary = prescriptions.get(1).map(|p| p.drill.title);

        let headline = if prescriptions.is_empty() {
            format!("{}-day plan", PLAN_DAYS)
        } else {
            let faults: Vec<&str> = prescriptions.iter().map(|p| p.fault.title()).collect();
            format!("{}-day plan: {}", PLAN_DAYS, faults.join(" + "))
        };

        let days = (1..=PLAN_DAYS)
            .map(|day| {
                let (focus, reps) = if day % TEST_DAY_EVERY == 0 {
                    (
                        "Test Day (film 2 swings + 10 balls)".to_string(),
                        "2 filmed swings, then 10 balls at 70% speed",
                    )
                } else if day <= PRIMARY_LAST_DAY {
                    (
                        format!("Primary: {}", primary),
                        if secondary.is_some() {
                            "10 reps drill A + 10 reps drill B + 8 balls"
                        } else {
                            "20 reps drill A + 8 balls"
                        },
                    )
                } else if day <= BLEND_LAST_DAY {
                    match secondary {
                        Some(secondary) => (
                            format!("Blend: {} + {}", primary, secondary),
                            "8 reps each drill + 12 balls",
                        ),
                        None => (
                            format!("Consolidate: {}", primary),
                            "16 reps drill A + 12 balls",
                        ),
                    }
                } else {
                    (
                        "Performance: tempo + finish".to_string(),
                        "3-2-1 tempo for 8 balls + hold finish for 8 balls",
                    )
                };
                PlanDay {
                    day,
                    focus,
                    reps: reps.to_string(),
                }
            })
            .collect();

        Self { headline, days }
    }

    /// Render as plain text, one line per day
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n", self.headline);
        for d in &self.days {
            out.push_str(&format!("Day {:>2}: {} ({})\n", d.day, d.focus, d.reps));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coach::prescribe;
    use crate::model::{Fault, Level};

    #[test]
    fn test_plan_has_fourteen_ordered_days() {
        let plan = PracticePlan::from_prescriptions(&prescribe(&[], Level::Advanced, false));
        let days: Vec<u32> = plan.days.iter().map(|d| d.day).collect();
        assert_eq!(days, (1..=14).collect::<Vec<_>>());
    }

    #[test]
    fn test_plan_blocks() {
        let rx = prescribe(&[], Level::Intermediate, false);
        let plan = PracticePlan::from_prescriptions(&rx);

        assert_eq!(plan.headline, "14-day plan: Late hips + Arms start down first");
        assert_eq!(
            plan.days[0].focus,
            format!("Primary: {}", rx[0].drill.title)
        );
        assert_eq!(
            plan.days[5].focus,
            format!("Blend: {} + {}", rx[0].drill.title, rx[1].drill.title)
        );
        assert!(plan.days[6].focus.starts_with("Test Day"));
        assert_eq!(plan.days[10].focus, "Performance: tempo + finish");
        assert!(plan.days[13].focus.starts_with("Test Day"));
    }

    #[test]
    fn test_single_prescription_consolidates() {
        let rx = prescribe(&[Fault::EarlyExtension], Level::Advanced, false);
        let plan = PracticePlan::from_prescriptions(&rx);
        assert_eq!(
            plan.days[7].focus,
            format!("Consolidate: {}", rx[0].drill.title)
        );
        assert_eq!(plan.days[0].reps, "20 reps drill A + 8 balls");
        assert_eq!(plan.days[7].reps, "16 reps drill A + 12 balls");
        assert!(plan.days.iter().all(|d| !d.reps.contains("drill B")));
        assert!(plan.days.iter().all(|d| !d.reps.contains("each drill")));
    }

    #[test]
    fn test_two_prescriptions_name_both_drills() {
        let plan = PracticePlan::from_prescriptions(&prescribe(&[], Level::Advanced, false));
        assert_eq!(plan.days[0].reps, "10 reps drill A + 10 reps drill B + 8 balls");
        assert_eq!(plan.days[5].reps, "8 reps each drill + 12 balls");
    }

    #[test]
    fn test_text_rendering() {
        let plan = PracticePlan::from_prescriptions(&prescribe(&[], Level::Advanced, false));
        let text = plan.to_text();
        assert_eq!(text.lines().count(), 15);
        assert!(text.contains("Day  7: Test Day"));
    }
}
