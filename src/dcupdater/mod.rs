//! Development component configuration readers
//!
//! Development components may declare dependencies on public parts of other
//! components outside of their `.dcdef`, e.g. sharing references of a portal
//! application. The readers in this module locate such a configuration file
//! below a component's base directory and turn the references it declares
//! into [`PublicPartReference`]s.
//!
//! Reading is best effort: a missing file means "no references", and a file
//! that cannot be read or parsed is reported as a warning and also yields no
//! references.

mod line;
mod xml;


pub use line::{LEGACY_REFERENCES_LOCATION, LineConfigurationReader};
pub use xml::{PORTAL_APPLICATION_LOCATION, XmlConfigurationReader};

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

use crate::model::PublicPartReference;

/// Property names whose values list public part references
pub const REFERENCE_PROPERTIES: [&str; 2] = ["SharingReference", "ServicesReference"];

/// Errors that can occur while reading a configuration file
///
/// Never surfaced by [`ComponentConfigurationReader::read`], which logs them.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed configuration: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed attribute in configuration: {0}")]
    Attribute(#[from] AttrError),

    #[error("Configuration ends inside an open element")]
    UnexpectedEof,

    #[error("Configuration has no root element")]
    MissingRoot,
}

/// Reader for one kind of development component configuration file
pub trait ComponentConfigurationReader {
    /// Location of the configuration file relative to the component base
    fn configuration_location(&self) -> &str;

    /// Extract the raw reference strings declared in the file's content
    fn raw_references(&self, content: &str) -> Result<Vec<String>, ConfigurationError>;

    /// Read the public part references declared by the component
    fn read(&self, component_base: &Path) -> HashSet<PublicPartReference> {
        let location = self.configuration_location();
        let source = component_base.join(location);

        if !source.exists() {
            return HashSet::new();
        }

        let raw = fs::read_to_string(&source)
            .map_err(ConfigurationError::from)
            .and_then(|content| self.raw_references(&content));

        match raw {
            Ok(raw) => collect_references(raw.iter().map(String::as_str)),
            Err(ConfigurationError::Io(error)) => {
                tracing::warn!(
                    location,
                    %error,
                    "There was a problem reading the component configuration"
                );
                HashSet::new()
            }
            Err(error) => {
                tracing::warn!(
                    location,
                    %error,
                    "There was a problem parsing the component configuration"
                );
                HashSet::new()
            }
        }
    }
}

/// Turn raw reference strings into a deduplicated set
///
/// References without a recognizable vendor separator are skipped.
pub fn collect_references<'a, I>(raw: I) -> HashSet<PublicPartReference>
where
    I: IntoIterator<Item = &'a str>,
{
    raw.into_iter()
        .filter_map(parse_public_part_reference)
        .collect()
}

/// Split a raw reference into vendor and library reference
///
/// `~` in the library part is normalized to `/`. Returns `None` when no
/// vendor separator can be found; such references are not supported yet.
pub fn parse_public_part_reference(reference: &str) -> Option<PublicPartReference> {
    let Some(index) = vendor_separation_index(reference) else {
        tracing::debug!(reference, "dropping public part reference without vendor");
        return None;
    };

    let vendor = &reference[..index];
    let library_reference = reference[index + 1..].replace('~', "/");

    Some(PublicPartReference::new(vendor, library_reference).at_runtime())
}

/// Index of the character separating the vendor from the component name
///
/// - a single `/` in the whole reference is the separator
/// - otherwise, if only one of `~` and `/` occurs, its first occurrence is
/// - otherwise, if both occur, the earlier one is
/// - with neither present there is no separator
pub fn vendor_separation_index(reference: &str) -> Option<usize> {
    let tilde = reference.find('~');
    let slash = reference.find('/');

    match (tilde, slash) {
        (_, Some(slash)) if reference.rfind('/') == Some(slash) => Some(slash),
        (Some(tilde), Some(slash)) => Some(tilde.min(slash)),
        // `None` orders before any index, so this picks whichever is present
        (tilde, slash) => tilde.max(slash),
    }
}

/// Split a comma separated property value into trimmed, non-empty tokens
pub(crate) fn split_reference_list(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
