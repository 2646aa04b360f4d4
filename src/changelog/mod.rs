//! Persisted change log format
//!
//! A build's change log is written to XML once and read back whenever the
//! build's changes are displayed:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <changelog>
//! 	<changeset version="VERSION">
//! 		<date>2011-03-14 09:26:53</date>
//! 		<user>AUTHOR</user>
//! 		<comment>MESSAGE</comment>
//! 		<items>
//! 			<item action="EDIT">PATH</item>
//! 		</items>
//! 	</changeset>
//! </changelog>
//! ```

pub mod constants;
mod parser;
mod writer;


pub use parser::ChangeLogParser;
pub use writer::ChangeLogWriter;

use std::io;
use std::path::PathBuf;

use quick_xml::encoding::EncodingError;
use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Errors that can occur when writing or parsing a change log
#[derive(Error, Debug)]
pub enum ChangeLogError {
    #[error("Cannot open change log {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed change log: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed attribute in change log: {0}")]
    Attribute(#[from] AttrError),

    #[error("Change log is not valid UTF-8: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Invalid check-in time '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("<changeset> without version attribute")]
    MissingVersion,

    #[error("Changeset {version} has no <date>")]
    MissingCheckInTime { version: String },

    #[error("<{element}> outside of a <changeset>")]
    OutsideChangeset { element: String },

    #[error("Unknown entity reference &{0};")]
    UnknownEntity(String),

    #[error("Character reference &{0}; is not allowed in XML")]
    InvalidCharacterReference(String),

    #[error("Change log ends inside an open element")]
    UnexpectedEof,

    #[error("Change log has no root element")]
    MissingRoot,

    #[error("Content outside the change log's root element")]
    ContentOutsideRoot,

    #[error("Change log writer already used; it closes its sink after the first write")]
    WriterClosed,
}

/// Whether `ch` may appear in an XML 1.0 document
pub(crate) fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\u{9}'
            | '\u{A}'
            | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}
