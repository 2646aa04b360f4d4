//! Activity model supplied by the DTR browser

use chrono::NaiveDateTime;

/// An activity discovered in the DTR for a build
///
/// Activities are mapped 1:1 into change log entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Version identifier of the activity
    pub version: String,
    /// Check-in time
    pub check_in_time: NaiveDateTime,
    /// User who checked the activity in
    pub principal: String,
    /// Activity description
    pub description: String,
    /// Resources (repository paths) touched by the activity
    pub resources: Vec<String>,
}
