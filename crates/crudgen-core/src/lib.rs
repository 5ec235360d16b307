//! crudgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the crudgen
//! CRUD scaffold generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          crudgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ScaffoldGenerator)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Filesystem, Render, Metadata) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     crudgen-adapters (Infrastructure)   │
//! │  (LocalFilesystem, SubstitutionRenderer)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (EntityName, ActionSet, GenerationPlan)│
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crudgen_core::{
//!     application::{GeneratorConfig, ScaffoldGenerator},
//!     domain::{ConfigFormat, EntityMetadata, EntityName, TargetModule},
//! };
//!
//! # fn adapters() -> (Box<dyn crudgen_core::application::Filesystem>, Box<dyn crudgen_core::application::TemplateRenderer>) { unimplemented!() }
//! // 1. Describe the run
//! let target = TargetModule::new("./src/AppModule", "AppModule", "App").unwrap();
//! let entity = EntityName::parse("Blog/Post").unwrap();
//! let metadata = EntityMetadata::new(
//!     vec!["id".into(), "title".into(), "body".into()],
//!     vec!["id".into()],
//! );
//!
//! // 2. Use the application service (with injected adapters)
//! let (filesystem, renderer) = adapters();
//! let config = GeneratorConfig::new("./skeleton", "post", true);
//! let generator = ScaffoldGenerator::new(filesystem, renderer, config);
//! let report = generator
//!     .generate(&target, &entity, &metadata, ConfigFormat::Yml)
//!     .unwrap();
//! println!("wrote {} files", report.file_count());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GeneratorConfig, ScaffoldGenerator,
        ports::{EntityMetadataProvider, Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        Action, ActionSet, ArtifactKind, ConfigFormat, EntityMetadata, EntityName,
        GenerationContext, GenerationPlan, GenerationReport, GenerationSettings, RenderContext,
        TargetModule, VarValue, ViewKind,
    };
    pub use crate::error::{CrudgenError, CrudgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
