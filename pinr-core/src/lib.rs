// pinr-core/src/lib.rs

pub mod merge;
pub mod orchestrator;
pub mod report;

// Re-export key types for easier use by the CLI crate
pub use merge::merge_version;
pub use orchestrator::ResolutionOrchestrator;
pub use report::{DependencyResolution, ResolutionOutcome, ResolutionReport};
