//! Public part reference model

use std::fmt;
use std::hash::{Hash, Hasher};

/// A dependency on another development component's public part
///
/// Two references are equal when vendor and library reference match;
/// the runtime flag does not take part in equality.
#[derive(Debug, Clone, Eq)]
pub struct PublicPartReference {
    /// Vendor of the referenced component (e.g., "sap.com")
    pub vendor: String,
    /// Component name, `~` normalized to `/` (e.g., "tc/bl/logging")
    pub library_reference: String,
    /// Needed at runtime, not only at compile time
    pub at_runtime: bool,
}

impl PublicPartReference {
    pub fn new(vendor: impl Into<String>, library_reference: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            library_reference: library_reference.into(),
            at_runtime: false,
        }
    }

    /// Mark this reference as a runtime dependency
    pub fn at_runtime(mut self) -> Self {
        self.at_runtime = true;
        self
    }
}

impl PartialEq for PublicPartReference {
    fn eq(&self, other: &Self) -> bool {
        self.vendor == other.vendor && self.library_reference == other.library_reference
    }
}

impl Hash for PublicPartReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vendor.hash(state);
        self.library_reference.hash(state);
    }
}

impl fmt::Display for PublicPartReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.vendor, self.library_reference)
    }
}
