// pinr-common/src/model/mod.rs
// Declares the modules within the model directory.
pub mod coordinate;
pub mod metadata;
pub mod version;

// Re-export
pub use coordinate::DependencyCoordinate;
pub use metadata::{ArtifactResolveResponse, ResolvedArtifactMetadata};
pub use version::{Channel, ChannelMap, VersionToken};
