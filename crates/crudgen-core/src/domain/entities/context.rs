//! Per-run generation state and plan building.
//!
//! [`GenerationContext`] combines the target module, entity identity and
//! metadata, action set and format for one `generate` call. It owns all
//! path composition (destination conventions are reproduced bit-for-bit —
//! downstream tooling depends on them) and assembles the per-artifact
//! variable sets. Created at the start of a run, discarded at the end; no
//! state persists between runs.
//!
//! ## Destination conventions
//!
//! | Artifact   | Path                                                              |
//! |------------|-------------------------------------------------------------------|
//! | Controller | `<root>/Controller/<ns path>/<Class>Controller.<ext>`             |
//! | Test       | `<root>/Tests/Controller/<ns path>/<Class>ControllerTest.<ext>`   |
//! | Views      | `<root>/Resources/views/<entity path>/<action>.html.twig`         |
//! | Routing    | `<root>/Resources/config/<entity_lower_underscore>.routing.<fmt>` |

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{
        entity::{EntityMetadata, EntityName},
        plan::{ArtifactKind, GenerationPlan, GenerationStep, ViewKind},
        render_context::RenderContext,
        target::TargetModule,
    },
    value_objects::{Action, ActionSet, ConfigFormat},
};

// ── GenerationSettings ────────────────────────────────────────────────────────

/// Run-independent generator settings: where skeletons live, how routes are
/// named, and the source-file extension of generated controller/test files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub skeleton_dir: PathBuf,
    pub route_prefix: String,
    pub source_extension: String,
}

impl GenerationSettings {
    pub fn new(skeleton_dir: impl Into<PathBuf>, route_prefix: impl Into<String>) -> Self {
        Self {
            skeleton_dir: skeleton_dir.into(),
            route_prefix: route_prefix.into(),
            source_extension: "php".into(),
        }
    }

    pub fn with_source_extension(mut self, extension: impl Into<String>) -> Self {
        self.source_extension = extension.into();
        self
    }
}

// ── GenerationContext ─────────────────────────────────────────────────────────

/// Ephemeral per-run state.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    target: TargetModule,
    entity: EntityName,
    metadata: EntityMetadata,
    actions: ActionSet,
    format: ConfigFormat,
    settings: GenerationSettings,
}

impl GenerationContext {
    pub fn new(
        target: TargetModule,
        entity: EntityName,
        metadata: EntityMetadata,
        actions: ActionSet,
        format: ConfigFormat,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            target,
            entity,
            metadata,
            actions,
            format,
            settings,
        }
    }

    pub fn entity(&self) -> &EntityName {
        &self.entity
    }

    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }

    pub fn format(&self) -> ConfigFormat {
        self.format
    }

    // ── Destination paths ─────────────────────────────────────────────────

    pub fn controller_path(&self) -> PathBuf {
        self.target
            .root()
            .join("Controller")
            .join(self.entity.namespace_path())
            .join(format!(
                "{}Controller.{}",
                self.entity.class_name(),
                self.settings.source_extension
            ))
    }

    pub fn test_path(&self) -> PathBuf {
        self.target
            .root()
            .join("Tests")
            .join("Controller")
            .join(self.entity.namespace_path())
            .join(format!(
                "{}ControllerTest.{}",
                self.entity.class_name(),
                self.settings.source_extension
            ))
    }

    pub fn views_dir(&self) -> PathBuf {
        self.target
            .root()
            .join("Resources")
            .join("views")
            .join(self.entity.as_path())
    }

    pub fn view_path(&self, kind: ViewKind) -> PathBuf {
        self.views_dir().join(kind.file_name())
    }

    /// Only meaningful for formats that emit a routing file; the plan
    /// builder gates on [`ConfigFormat::emits_routing_file`].
    pub fn routing_path(&self) -> PathBuf {
        self.target
            .root()
            .join("Resources")
            .join("config")
            .join(format!(
                "{}.routing.{}",
                self.entity.route_name(),
                self.format.as_str()
            ))
    }

    // ── Skeleton paths ────────────────────────────────────────────────────

    pub fn skeleton_path(&self, artifact: ArtifactKind) -> PathBuf {
        let relative: PathBuf = match artifact {
            ArtifactKind::Controller => "controller.skeleton".into(),
            ArtifactKind::Test => "controller_test.skeleton".into(),
            ArtifactKind::View(kind) => kind.skeleton_name().into(),
            ArtifactKind::Routing(format) => format!("routing.{}", format.as_str()).into(),
        };
        self.settings.skeleton_dir.join(relative)
    }

    // ── Variable sets ─────────────────────────────────────────────────────
    //
    // Variable names are stable: skeleton authors bind to them.

    fn skeleton_dir_str(&self) -> String {
        self.settings.skeleton_dir.display().to_string()
    }

    fn controller_variables(&self) -> RenderContext {
        RenderContext::new()
            .with_list("actions", self.actions.names())
            .with_str("route_prefix", &self.settings.route_prefix)
            .with_str("skeleton_dir", self.skeleton_dir_str())
            .with_str("module_name", self.target.name())
            .with_str("entity", self.entity.to_string())
            .with_str("entity_class", self.entity.class_name())
            .with_str("module_namespace", self.target.namespace())
            .with_str("entity_namespace", self.entity.namespace())
            .with_str("format", self.format.as_str())
    }

    fn test_variables(&self) -> RenderContext {
        RenderContext::new()
            .with_str("route_prefix", &self.settings.route_prefix)
            .with_str("entity", self.entity.to_string())
            .with_str("entity_class", self.entity.class_name())
            .with_str("module_namespace", self.target.namespace())
            .with_str("entity_namespace", self.entity.namespace())
            .with_list("actions", self.actions.names())
            .with_str("skeleton_dir", self.skeleton_dir_str())
    }

    fn view_variables(&self, kind: ViewKind) -> RenderContext {
        let base = RenderContext::new()
            .with_str("skeleton_dir", self.skeleton_dir_str())
            .with_str("entity", self.entity.to_string());

        match kind {
            ViewKind::Index => base
                .with_list("fields", self.metadata.field_names().to_vec())
                .with_list("actions", self.actions.names())
                .with_list(
                    "record_actions",
                    self.actions
                        .record_actions()
                        .iter()
                        .map(|a| a.as_str().to_string())
                        .collect(),
                )
                .with_str("route_prefix", &self.settings.route_prefix),
            ViewKind::Show => base
                .with_list("fields", self.metadata.field_names().to_vec())
                .with_list("actions", self.actions.names())
                .with_str("route_prefix", &self.settings.route_prefix),
            ViewKind::New | ViewKind::Edit => base
                .with_str("route_prefix", &self.settings.route_prefix)
                .with_list("actions", self.actions.names()),
        }
    }

    fn routing_variables(&self) -> RenderContext {
        RenderContext::new()
            .with_list("actions", self.actions.names())
            .with_str("route_prefix", &self.settings.route_prefix)
            .with_str("module_name", self.target.name())
            .with_str("entity", self.entity.to_string())
    }

    // ── Plan building ─────────────────────────────────────────────────────

    /// Build the ordered step list for this run.
    ///
    /// Order is fixed: controller, views directory, index view, the
    /// action-gated views, functional test, then the routing config when
    /// the format emits one. The controller comes first so its overwrite
    /// refusal aborts before anything else is written.
    pub fn plan(&self) -> GenerationPlan {
        let mut plan = GenerationPlan::new();

        self.push_render(&mut plan, ArtifactKind::Controller, self.controller_path());

        plan.push(GenerationStep::EnsureDir {
            path: self.views_dir(),
        });

        self.push_view(&mut plan, ViewKind::Index);
        if self.actions.contains(Action::Show) {
            self.push_view(&mut plan, ViewKind::Show);
        }
        if self.actions.contains(Action::New) {
            self.push_view(&mut plan, ViewKind::New);
        }
        if self.actions.contains(Action::Edit) {
            self.push_view(&mut plan, ViewKind::Edit);
        }

        self.push_render(&mut plan, ArtifactKind::Test, self.test_path());

        if self.format.emits_routing_file() {
            self.push_render(&mut plan, ArtifactKind::Routing(self.format), self.routing_path());
        }

        plan
    }

    fn push_render(&self, plan: &mut GenerationPlan, artifact: ArtifactKind, destination: PathBuf) {
        let variables = match artifact {
            ArtifactKind::Controller => self.controller_variables(),
            ArtifactKind::Test => self.test_variables(),
            ArtifactKind::View(kind) => self.view_variables(kind),
            ArtifactKind::Routing(_) => self.routing_variables(),
        };
        plan.push(GenerationStep::Render {
            artifact,
            skeleton: self.skeleton_path(artifact),
            destination,
            variables,
        });
    }

    fn push_view(&self, plan: &mut GenerationPlan, kind: ViewKind) {
        self.push_render(plan, ArtifactKind::View(kind), self.view_path(kind));
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
