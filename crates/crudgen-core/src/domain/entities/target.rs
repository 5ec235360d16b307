//! Destination module descriptor.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// The module artifacts are generated into: a self-contained source tree
/// with its own `Controller/`, `Tests/`, `Resources/views/` and
/// `Resources/config/` sub-paths.
///
/// Supplied once per generation run; immutable for that run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetModule {
    root: PathBuf,
    name: String,
    namespace: String,
}

impl TargetModule {
    pub fn new(
        root: impl Into<PathBuf>,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidModule("module name is empty".into()));
        }
        Ok(Self {
            root: root.into(),
            name,
            namespace: namespace.into(),
        })
    }

    /// Root of the module's source tree; every destination path is composed
    /// under it.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl fmt::Display for TargetModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.root.display())
    }
}
