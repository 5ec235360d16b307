// ============================================================================
// domain/error.rs - COMPREHENSIVE ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Unsupported entity schema: {reason}")]
    UnsupportedSchema { reason: String },

    #[error("Invalid entity name '{name}': {reason}")]
    InvalidEntityName { name: String, reason: String },

    #[error("Invalid module descriptor: {0}")]
    InvalidModule(String),

    #[error("Unknown action '{name}'")]
    UnknownAction { name: String },

    #[error("Unknown configuration format '{name}'")]
    UnknownFormat { name: String },

    // ========================================================================
    // Plan Constraint Violations
    // ========================================================================
    #[error("Generation plan is empty")]
    EmptyPlan,

    #[error("Duplicate destination in generation plan: {path}")]
    DuplicateDestination { path: String },
}

impl DomainError {
    /// Shorthand for the two identifier-shape preconditions.
    pub fn unsupported_schema(reason: impl Into<String>) -> Self {
        Self::UnsupportedSchema {
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedSchema { reason } => vec![
                format!("The entity cannot be scaffolded: {}", reason),
                "Expose a single identifier field named `id` on the entity".into(),
            ],
            Self::InvalidEntityName { name, .. } => vec![
                format!("'{}' is not a valid namespaced entity name", name),
                "Use identifier segments separated by '/', e.g. Blog/Post".into(),
            ],
            Self::UnknownAction { name } => vec![
                format!("'{}' is not a scaffold action", name),
                "Valid actions: index, show, new, edit, delete".into(),
            ],
            Self::UnknownFormat { name } => vec![
                format!("'{}' is not a routing format", name),
                "Valid formats: yml, xml, annotation".into(),
            ],
            Self::DuplicateDestination { path } => vec![
                format!("Two plan steps target the same file: {}", path),
                "This is a bug in the plan builder, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedSchema { .. }
            | Self::InvalidEntityName { .. }
            | Self::InvalidModule(_)
            | Self::UnknownAction { .. }
            | Self::UnknownFormat { .. } => ErrorCategory::Validation,
            Self::EmptyPlan | Self::DuplicateDestination { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
