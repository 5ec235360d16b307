//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `crudgen-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateRenderer`: In-place skeleton rendering
//!   - `EntityMetadataProvider`: Entity field/identifier description
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{EntityMetadataProvider, Filesystem, TemplateRenderer};

#[cfg(any(test, feature = "test-support"))]
pub use output::{MockEntityMetadataProvider, MockFilesystem, MockTemplateRenderer};
