//! Element, attribute and value names of the change log document

pub use crate::model::DATE_FORMAT;

/// XML declaration opening every change log
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Element names
pub mod elements {
    pub const CHANGELOG: &str = "changelog";
    pub const CHANGESET: &str = "changeset";
    pub const DATE: &str = "date";
    pub const USER: &str = "user";
    pub const COMMENT: &str = "comment";
    pub const ITEMS: &str = "items";
    pub const ITEM: &str = "item";
}

/// Attribute names
pub mod attributes {
    pub const VERSION: &str = "version";
    pub const ACTION: &str = "action";
}

/// Action recorded for every item.
///
/// Additions and deletions are not distinguished.
pub const EDIT_ACTION: &str = "EDIT";
