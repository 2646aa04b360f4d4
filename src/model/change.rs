//! Change log entry data model

use chrono::NaiveDateTime;

use super::Activity;

/// Date pattern of the check-in time in a persisted change log.
///
/// Shared between [`ChangeLogEntry`] and the change log writer so the parser
/// can invert the formatting exactly.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One DTR activity as recorded in a build's change log
///
/// Text fields are persisted as XML: control characters other than tab,
/// line feed and carriage return are written as U+FFFD, and surrounding
/// whitespace is not preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeLogEntry {
    /// Activity version (opaque DTR identifier)
    pub version: String,

    /// Check-in time; entries of a change log are ordered by it
    pub check_in_time: NaiveDateTime,

    /// User who checked the activity in
    pub author: String,

    /// Activity description (may be empty)
    pub message: String,

    /// Repository paths touched by the activity, in recorded order
    pub affected_paths: Vec<String>,
}

impl ChangeLogEntry {
    /// Create an entry with no author, message or affected paths yet
    pub fn new(version: impl Into<String>, check_in_time: NaiveDateTime) -> Self {
        Self {
            version: version.into(),
            check_in_time,
            author: String::new(),
            message: String::new(),
            affected_paths: Vec::new(),
        }
    }

    /// Append a path touched by this activity (duplicates are kept)
    pub fn add_affected_path(&mut self, path: impl Into<String>) {
        self.affected_paths.push(path.into());
    }

    /// Check-in time rendered with [`DATE_FORMAT`]
    pub fn formatted_check_in_time(&self) -> String {
        self.check_in_time.format(DATE_FORMAT).to_string()
    }

    /// Parse a check-in time rendered with [`DATE_FORMAT`]
    pub fn parse_check_in_time(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(text, DATE_FORMAT)
    }

    /// Get a display string for the message
    pub fn display_message(&self) -> &str {
        if self.message.is_empty() {
            "(no description)"
        } else {
            &self.message
        }
    }
}

impl From<Activity> for ChangeLogEntry {
    fn from(activity: Activity) -> Self {
        Self {
            version: activity.version,
            check_in_time: activity.check_in_time,
            author: activity.principal,
            message: activity.description,
            affected_paths: activity.resources,
        }
    }
}
