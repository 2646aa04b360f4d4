//! Data models for dtrlog
//!
//! Change log entries and sets recorded per build, the DTR activities
//! they are created from, and public part references read from
//! development component configuration.

mod activity;
mod build;
mod change;
mod change_log;
mod reference;

pub use activity::Activity;
pub use build::BuildHandle;
pub use change::{ChangeLogEntry, DATE_FORMAT};
pub use change_log::ChangeLogSet;
pub use reference::PublicPartReference;
