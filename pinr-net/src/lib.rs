// pinr-net/src/lib.rs
pub mod http;
pub mod resolver;
pub mod transport;
pub mod validation;

pub use resolver::CoordinateResolver;
pub use transport::{ArtifactQuery, HttpMetadataTransport, MetadataTransport};
pub use validation::validate_url;
