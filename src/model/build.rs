//! Build handle owning a change log

use std::fmt;

/// Identifies the build a change log belongs to
///
/// Opaque to this crate: it is only carried along as attribution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildHandle {
    /// Job (track) name
    pub job: String,
    /// Build number within the job
    pub number: u32,
}

impl BuildHandle {
    pub fn new(job: impl Into<String>, number: u32) -> Self {
        Self {
            job: job.into(),
            number,
        }
    }
}

impl fmt::Display for BuildHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.job, self.number)
    }
}
