//! Runtime settings for the `dtrlog` binary

use std::env;

use crate::dcupdater::{LEGACY_REFERENCES_LOCATION, PORTAL_APPLICATION_LOCATION};

/// Environment variables read by [`AppConfig::load`]
pub mod keys {
    /// `tracing` filter directive (e.g. "warn", "dtrlog=debug")
    pub const LOG: &str = "DTRLOG_LOG";
    /// Location of XML component configuration files
    pub const XML_LOCATION: &str = "DTRLOG_XML_LOCATION";
    /// Location of line based component configuration files
    pub const LINE_LOCATION: &str = "DTRLOG_LINE_LOCATION";
}

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_filter: String,
    pub xml_location: String,
    pub line_location: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            xml_location: PORTAL_APPLICATION_LOCATION.to_string(),
            line_location: LEGACY_REFERENCES_LOCATION.to_string(),
        }
    }
}

impl AppConfig {
    /// Load settings from the environment
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings from an arbitrary key lookup; unset or blank keys keep defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            log_filter: value(keys::LOG).unwrap_or(defaults.log_filter),
            xml_location: value(keys::XML_LOCATION).unwrap_or(defaults.xml_location),
            line_location: value(keys::LINE_LOCATION).unwrap_or(defaults.line_location),
        }
    }
}
