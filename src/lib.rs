//! dtrlog - DTR change logs and development component references
//!
//! Persistence of a build's DTR change log and extraction of public part
//! references from development component configuration.
//!
//! This library provides:
//! - [`model`]: Change log entries and sets, activities, public part references
//! - [`changelog`]: Writing and parsing the persisted change log XML
//! - [`dcupdater`]: Reading references from component configuration files
//! - [`report`]: Plain text rendering of change logs and references
//! - [`config`]: Runtime settings for the binary

pub mod changelog;
pub mod config;
pub mod dcupdater;
pub mod model;
pub mod report;
