//! Caller-supplied fault keys (intake documents, CLI flags)

use super::traits::FaultSource;
use anyhow::Result;

/// Fault source backed by a fixed list of raw keys
#[derive(Debug, Clone, Default)]
pub struct ListSource {
    keys: Vec<String>,
}

impl ListSource {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

impl FaultSource for ListSource {
    fn faults(&self) -> Result<Vec<String>> {
        log::debug!("Using {} caller-supplied fault key(s)", self.keys.len());
        Ok(self.keys.clone())
    }

    fn name(&self) -> &'static str {
        "list"
    }
}
