// ABOUTME: Generated output value types: the stub manifest and the Generated result.
// ABOUTME: Serializable so the CLI can emit a JSON manifest of a run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One generated stub: the function-name fragment and the locator it targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stub {
    pub name: String,
    pub locator: String,
}

/// The result of one generation run.
///
/// `code` is the ordered concatenation of stub texts, one per collected
/// element, each followed by a newline. `written_to` is set once the output
/// has been persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Generated {
    pub source: String,
    pub code: String,
    pub stubs: Vec<Stub>,
    pub written_to: Option<PathBuf>,
}

impl Generated {
    /// Returns true if no interactive elements were found.
    pub fn is_empty(&self) -> bool {
        self.stubs.is_empty()
    }

    /// Number of generated stubs.
    pub fn stub_count(&self) -> usize {
        self.stubs.len()
    }
}
