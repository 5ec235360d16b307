//! Scaffold Generator - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Validate the entity's identifier shape
//! 2. Build the generation plan from the per-run context
//! 3. Execute the plan steps in order against the filesystem/renderer ports
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::Path;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer},
    },
    domain::{
        ActionSet, ArtifactKind, ConfigFormat, DomainValidator as validator, EntityMetadata,
        EntityName, GenerationContext, GenerationReport, GenerationSettings, GenerationStep,
        OverwritePolicy, RenderContext, TargetModule,
    },
    error::{CrudgenError, CrudgenResult},
};

/// Construction-time configuration for the generator.
///
/// `write_actions = true` appends `new`, `edit`, `delete` to the base action
/// set `[index, show]`; the three are always added together, never
/// individually.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub settings: GenerationSettings,
    pub actions: ActionSet,
}

impl GeneratorConfig {
    pub fn new(
        skeleton_dir: impl Into<std::path::PathBuf>,
        route_prefix: impl Into<String>,
        write_actions: bool,
    ) -> Self {
        Self {
            settings: GenerationSettings::new(skeleton_dir, route_prefix),
            actions: ActionSet::with_write_actions(write_actions),
        }
    }

    pub fn with_source_extension(mut self, extension: impl Into<String>) -> Self {
        self.settings = self.settings.with_source_extension(extension);
        self
    }
}

/// Main scaffold generation service.
///
/// Orchestrates validated, idempotent-on-failure generation of all scaffold
/// artifacts for one entity. Single-threaded and synchronous: at most one
/// `generate` call should be in flight against a given target tree.
pub struct ScaffoldGenerator {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    config: GeneratorConfig,
}

impl ScaffoldGenerator {
    /// Create a new generator with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            config,
        }
    }

    /// Generate all scaffold artifacts for one entity.
    ///
    /// Preconditions (checked before any filesystem mutation):
    /// - the metadata declares exactly one identifier field
    /// - that field is named `id`
    ///
    /// The first failing step is terminal; artifacts already written remain
    /// on disk (no rollback).
    #[instrument(
        skip_all,
        fields(
            entity = %entity,
            module = %target.name(),
            format = %format,
        )
    )]
    pub fn generate(
        &self,
        target: &TargetModule,
        entity: &EntityName,
        metadata: &EntityMetadata,
        format: ConfigFormat,
    ) -> CrudgenResult<GenerationReport> {
        info!(actions = %self.config.actions, "Scaffolding entity");

        // 1. Preconditions - all-or-nothing with respect to these checks.
        validator::validate_entity_metadata(metadata).map_err(CrudgenError::Domain)?;

        // 2. Plan the whole run up front.
        let context = GenerationContext::new(
            target.clone(),
            entity.clone(),
            metadata.clone(),
            self.config.actions.clone(),
            format,
            self.config.settings.clone(),
        );
        let plan = context.plan();
        validator::validate_plan(&plan).map_err(CrudgenError::Domain)?;
        debug!(steps = plan.len(), "Generation plan built");

        // 3. Execute in order, fail-fast.
        let mut written = Vec::new();
        for step in plan.steps() {
            match step {
                GenerationStep::EnsureDir { path } => {
                    debug!(path = %path.display(), "Ensuring directory");
                    self.filesystem.create_dir_all(path)?;
                }
                GenerationStep::Render {
                    artifact,
                    skeleton,
                    destination,
                    variables,
                } => {
                    self.render_artifact(*artifact, skeleton, destination, variables)?;
                    written.push(destination.clone());
                }
            }
        }

        info!(files = written.len(), "Scaffold completed successfully");
        Ok(GenerationReport::new(written))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// One render step: locate skeleton, apply the overwrite policy, copy,
    /// render in place.
    fn render_artifact(
        &self,
        artifact: ArtifactKind,
        skeleton: &Path,
        destination: &Path,
        variables: &RenderContext,
    ) -> CrudgenResult<()> {
        if !self.filesystem.exists(skeleton) {
            return Err(ApplicationError::SkeletonMissing {
                path: skeleton.to_path_buf(),
            }
            .into());
        }

        if self.filesystem.exists(destination) {
            match artifact.overwrite_policy() {
                OverwritePolicy::Refuse => {
                    return Err(ApplicationError::DestinationExists {
                        path: destination.to_path_buf(),
                    }
                    .into());
                }
                OverwritePolicy::Replace => {
                    debug!(
                        path = %destination.display(),
                        artifact = %artifact.describe(),
                        "Overwriting existing artifact"
                    );
                }
            }
        }

        if let Some(parent) = destination.parent() {
            self.filesystem.create_dir_all(parent)?;
        }

        self.filesystem.copy(skeleton, destination)?;
        self.renderer.render_in_place(destination, variables)?;

        debug!(
            artifact = %artifact.describe(),
            path = %destination.display(),
            "Artifact generated"
        );
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
