// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for crudgen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O and rendering concerns are handled via ports (traits) defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror/serde/uuid
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    context::{GenerationContext, GenerationSettings},
    entity::{EntityMetadata, EntityName},
    plan::{
        ArtifactKind, GenerationPlan, GenerationReport, GenerationStep, OverwritePolicy, ViewKind,
    },
    render_context::{RenderContext, VarValue},
    target::TargetModule,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Action, ActionSet, ConfigFormat};

pub use validation::DomainValidator;
