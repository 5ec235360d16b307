//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
///
/// All are fatal to the current `generate` call: nothing is retried, and
/// artifacts written before the failure remain on disk.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The controller destination already exists; the run aborts before any
    /// other artifact is written.
    #[error("Destination already exists: {path}")]
    DestinationExists { path: PathBuf },

    /// A referenced skeleton file is absent from the skeleton directory.
    #[error("Skeleton not found: {path}")]
    SkeletonMissing { path: PathBuf },

    /// In-place rendering of a destination file failed.
    #[error("Rendering failed for {path}: {reason}")]
    RenderFailed { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DestinationExists { path } => vec![
                format!("A controller already exists at: {}", path.display()),
                "Remove or rename the existing file before regenerating".into(),
                "No other artifact was written for this run".into(),
            ],
            Self::SkeletonMissing { path } => vec![
                format!("Expected skeleton at: {}", path.display()),
                "Check the configured skeleton directory".into(),
                "Run: crudgen init --skeleton-dir <DIR> to install the built-in set".into(),
            ],
            Self::RenderFailed { path, reason } => vec![
                format!("Could not render {}: {}", path.display(), reason),
                "Check the skeleton's placeholders against the documented variable names".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DestinationExists { .. } => ErrorCategory::Conflict,
            Self::SkeletonMissing { .. } => ErrorCategory::NotFound,
            Self::RenderFailed { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
