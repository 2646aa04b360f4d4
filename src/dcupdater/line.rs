//! Legacy line based configuration files (`key = value` per line)

use std::sync::LazyLock;

use regex::Regex;

use super::{
    ComponentConfigurationReader, ConfigurationError, REFERENCE_PROPERTIES, split_reference_list,
};

/// Default location of the legacy reference declaration
pub const LEGACY_REFERENCES_LOCATION: &str = "src/configuration/references.properties";

/// Matches `key = value` or `key: value`
///
/// Groups:
/// 1. key
/// 2. value (surrounding whitespace stripped)
static PROPERTY_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z][\w.-]*)\s*[=:]\s*(.*?)\s*$").expect("Invalid property line regex")
});

/// Reads references from a line based properties file
///
/// Blank lines and lines starting with `#` or `!` are ignored.
#[derive(Debug, Clone)]
pub struct LineConfigurationReader {
    location: String,
}

impl Default for LineConfigurationReader {
    fn default() -> Self {
        Self::new(LEGACY_REFERENCES_LOCATION)
    }
}

impl LineConfigurationReader {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

impl ComponentConfigurationReader for LineConfigurationReader {
    fn configuration_location(&self) -> &str {
        &self.location
    }

    fn raw_references(&self, content: &str) -> Result<Vec<String>, ConfigurationError> {
        let references = content
            .lines()
            .map(str::trim_start)
            .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
            .filter_map(|line| PROPERTY_LINE_REGEX.captures(line))
            .filter(|caps| REFERENCE_PROPERTIES.contains(&&caps[1]))
            .flat_map(|caps| split_reference_list(&caps[2]).collect::<Vec<_>>())
            .collect();

        Ok(references)
    }
}
