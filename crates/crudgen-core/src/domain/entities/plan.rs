//! Generation plan: the run as an ordered list of named steps.
//!
//! The whole run is planned up front from the [`GenerationContext`], then
//! executed in sequence with fail-fast semantics and no rollback. Artifacts
//! written before a mid-sequence failure remain on disk. Each step is
//! independently testable against fake filesystem/renderer collaborators.
//!
//! [`GenerationContext`]: crate::domain::GenerationContext

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::render_context::RenderContext, error::DomainError, value_objects::ConfigFormat,
};

// ── ArtifactKind ──────────────────────────────────────────────────────────────

/// The four view artifacts, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Index,
    Show,
    New,
    Edit,
}

impl ViewKind {
    /// The fixed destination file name inside the views directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Index => "index.html.twig",
            Self::Show => "show.html.twig",
            Self::New => "new.html.twig",
            Self::Edit => "edit.html.twig",
        }
    }

    /// The skeleton source path relative to the skeleton directory.
    pub const fn skeleton_name(self) -> &'static str {
        match self {
            Self::Index => "views/index.html.twig",
            Self::Show => "views/show.html.twig",
            Self::New => "views/new.html.twig",
            Self::Edit => "views/edit.html.twig",
        }
    }
}

/// What happens when a step's destination already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Abort the entire run with `DestinationExists`.
    Refuse,
    /// Overwrite silently (last writer wins).
    Replace,
}

/// The kind of artifact a render step produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Controller,
    Test,
    View(ViewKind),
    Routing(ConfigFormat),
}

impl ArtifactKind {
    /// Per-kind overwrite policy, applied uniformly by the step executor.
    ///
    /// Only the controller refuses to overwrite; every other artifact
    /// replaces an existing destination. Inherited asymmetry, kept — the
    /// controller is generated first, so the refusal aborts the run before
    /// any other artifact is written.
    pub const fn overwrite_policy(self) -> OverwritePolicy {
        match self {
            Self::Controller => OverwritePolicy::Refuse,
            Self::Test | Self::View(_) | Self::Routing(_) => OverwritePolicy::Replace,
        }
    }

    /// Short human label for logs and reports.
    pub fn describe(self) -> String {
        match self {
            Self::Controller => "controller".into(),
            Self::Test => "functional test".into(),
            Self::View(kind) => format!("{} view", kind.file_name()),
            Self::Routing(format) => format!("{format} routing config"),
        }
    }
}

// ── GenerationStep / GenerationPlan ───────────────────────────────────────────

/// One ordered, side-effecting step of the run.
#[derive(Debug, Clone)]
pub enum GenerationStep {
    /// Create a directory (and parents) if absent.
    EnsureDir { path: PathBuf },
    /// Locate `skeleton`, copy it to `destination`, render `variables` into
    /// the destination in place.
    Render {
        artifact: ArtifactKind,
        skeleton: PathBuf,
        destination: PathBuf,
        variables: RenderContext,
    },
}

/// The ordered steps for one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationPlan {
    steps: Vec<GenerationStep>,
}

impl GenerationPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: GenerationStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[GenerationStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Render steps only, in plan order.
    pub fn render_steps(&self) -> impl Iterator<Item = &GenerationStep> {
        self.steps
            .iter()
            .filter(|s| matches!(s, GenerationStep::Render { .. }))
    }

    /// A well-formed plan is non-empty and never targets the same
    /// destination twice.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.steps.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let mut seen = HashSet::new();
        for step in &self.steps {
            if let GenerationStep::Render { destination, .. } = step {
                let key = destination.display().to_string();
                if !seen.insert(key.clone()) {
                    return Err(DomainError::DuplicateDestination { path: key });
                }
            }
        }

        Ok(())
    }
}

// ── GenerationReport ──────────────────────────────────────────────────────────

/// Summary of a completed run: which files were written, in order.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    run_id: Uuid,
    files: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            files,
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
