// pinr-common/src/lib.rs
pub mod config;
pub mod error;
pub mod graph;
pub mod model;

// Re-export key types
pub use config::Config;
pub use error::{PinrError, Result};
pub use graph::DependencyGraph;
pub use model::{DependencyCoordinate, ResolvedArtifactMetadata, VersionToken};
