//! Change log set: the ordered activities of one build

use std::slice;

use super::{Activity, BuildHandle, ChangeLogEntry};

/// The change log of a single build
///
/// Built either from discovered activities (sorted by check-in time) or
/// empty and then populated in document order by the change log parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeLogSet {
    build: BuildHandle,
    entries: Vec<ChangeLogEntry>,
}

impl ChangeLogSet {
    /// Create an empty change log for the given build
    pub fn new(build: BuildHandle) -> Self {
        Self {
            build,
            entries: Vec::new(),
        }
    }

    /// Create a change log from activities, ascending by check-in time
    pub fn from_activities<I>(build: BuildHandle, activities: I) -> Self
    where
        I: IntoIterator<Item = Activity>,
    {
        let mut set = Self::new(build);

        for activity in activities {
            set.add(ChangeLogEntry::from(activity));
        }

        set.sort();
        set
    }

    /// Append an entry (no re-sorting)
    pub(crate) fn add(&mut self, entry: ChangeLogEntry) {
        self.entries.push(entry);
    }

    /// Stable sort by check-in time
    fn sort(&mut self) {
        self.entries.sort_by_key(|entry| entry.check_in_time);
    }

    /// Build this change log belongs to
    pub fn build(&self) -> &BuildHandle {
        &self.build
    }

    /// Whether the change log has no entries
    pub fn is_empty_set(&self) -> bool {
        self.entries.is_empty()
    }

    /// Same as [`is_empty_set`](Self::is_empty_set)
    pub fn is_empty(&self) -> bool {
        self.is_empty_set()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in change log order
    pub fn entries(&self) -> &[ChangeLogEntry] {
        &self.entries
    }

    /// Iterate over the entries in change log order
    pub fn iter(&self) -> slice::Iter<'_, ChangeLogEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ChangeLogSet {
    type Item = &'a ChangeLogEntry;
    type IntoIter = slice::Iter<'a, ChangeLogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
