//! Fault sources
//!
//! Faults arrive from outside the coaching core as untyped keys. This
//! module provides a trait-based abstraction over where they come from:
//! a caller-supplied list or the demo set.

mod demo;
mod list;
mod traits;

pub use demo::DemoSource;
pub use list::ListSource;
pub use traits::FaultSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_source() {
        let keys = DemoSource::new().faults().unwrap();
        assert_eq!(keys, vec!["late_hips", "arms_start_down"]);
    }

    #[test]
    fn test_list_source_keeps_order() {
        let source = ListSource::new(["grip_in_palm_hinge_limited", "bogus"]);
        assert_eq!(
            source.faults().unwrap(),
            vec!["grip_in_palm_hinge_limited", "bogus"]
        );
        assert_eq!(source.name(), "list");
    }
}
