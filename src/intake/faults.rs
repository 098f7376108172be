//! Untyped fault keys to the closed `Fault` set

use crate::model::{Fault, FaultParseError};

/// What to do with a fault key that is not in the closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFaultPolicy {
    /// Fail on the first unknown key
    Reject,

    /// Skip unknown keys and record them in `ParsedFaults::dropped`
    #[default]
    Drop,
}

/// Result of parsing raw fault keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFaults {
    /// Recognized faults in input order (duplicates kept)
    pub faults: Vec<Fault>,

    /// Raw keys that were dropped under `UnknownFaultPolicy::Drop`
    pub dropped: Vec<String>,
}

/// Parse raw fault keys under the given policy
pub fn parse_faults<S: AsRef<str>>(
    raw: &[S],
    policy: UnknownFaultPolicy,
) -> Result<ParsedFaults, FaultParseError> {
    let mut parsed = ParsedFaults::default();

    for key in raw {
        match key.as_ref().parse::<Fault>() {
            Ok(fault) => parsed.faults.push(fault),
            Err(e) => match policy {
                UnknownFaultPolicy::Reject => return Err(e),
                UnknownFaultPolicy::Drop => {
                    log::warn!("Dropping {}", e);
                    parsed.dropped.push(key.as_ref().to_string());
                }
            },
        }
    }

    Ok(parsed)
}
