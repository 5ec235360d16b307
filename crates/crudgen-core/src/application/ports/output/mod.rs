//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `crudgen-adapters` crate provides implementations.

use crate::domain::{EntityMetadata, EntityName, RenderContext};
use crate::error::CrudgenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `crudgen_adapters::filesystem::LocalFilesystem` (production)
/// - `crudgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Each operation is a blocking call; the generator executes them strictly
///   in plan order and assumes single-writer use of the destination tree
/// - No locking is performed; concurrent runs against the same tree are
///   unsafe (last-writer-wins where overwrite is permitted)
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CrudgenResult<()>;

    /// Copy a file's bytes to a new destination.
    fn copy(&self, source: &Path, dest: &Path) -> CrudgenResult<()>;

    /// Read a file to a string.
    fn read_to_string(&self, path: &Path) -> CrudgenResult<String>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()>;
}

/// Port for in-place skeleton rendering.
///
/// Implemented by:
/// - `crudgen_adapters::renderer::SubstitutionRenderer` (placeholder substitution)
///
/// ## Contract
///
/// - Substitutes named placeholders in the file at `path`, rewriting it in
///   place
/// - A supplied variable that no placeholder references is NOT an error
/// - A referenced placeholder with no supplied variable IS an error
///   (`RenderFailed`)
/// - Identical inputs (file bytes + variables) produce identical output
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render the file at `path` in place with the given variables.
    fn render_in_place(&self, path: &Path, variables: &RenderContext) -> CrudgenResult<()>;
}

/// Port for entity metadata lookup.
///
/// Read-only: supplies the ordered field names and identifier field set for
/// a target entity. The CLI's argument-backed provider implements this; a
/// persistence-mapping integration would be another implementation.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
pub trait EntityMetadataProvider: Send + Sync {
    /// Look up the metadata for an entity.
    fn metadata(&self, entity: &EntityName) -> CrudgenResult<EntityMetadata>;
}
