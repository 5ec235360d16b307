pub mod context;
pub mod entity;
pub mod plan;
pub mod render_context;
pub mod target;

pub use context::{GenerationContext, GenerationSettings};
pub use entity::{EntityMetadata, EntityName};
pub use plan::{
    ArtifactKind, GenerationPlan, GenerationReport, GenerationStep, OverwritePolicy, ViewKind,
};
pub use render_context::{RenderContext, VarValue};
pub use target::TargetModule;
