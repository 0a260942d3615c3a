// pinr-net/src/resolver.rs
//! Maps a requested version to a repository channel and looks it up.
use std::sync::Arc;

use pinr_common::config::Config;
use pinr_common::error::Result;
use pinr_common::model::{ChannelMap, DependencyCoordinate, ResolvedArtifactMetadata, VersionToken};
use tracing::{debug, info};

use crate::transport::{ArtifactQuery, HttpMetadataTransport, MetadataTransport};

pub struct CoordinateResolver {
    transport: Arc<dyn MetadataTransport>,
    channels: ChannelMap,
}

impl CoordinateResolver {
    pub fn new(transport: Arc<dyn MetadataTransport>, channels: ChannelMap) -> Self {
        Self {
            transport,
            channels,
        }
    }

    /// Resolver talking to the configured metadata service over HTTP.
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpMetadataTransport::new(config)?;
        Ok(Self::new(Arc::new(transport), config.channel_map()))
    }

    /// Resolves a requested version.
    ///
    /// `RELEASE` is looked up in the release channel and `LATEST` in the
    /// pre-release channel (both case-insensitive). Any other version is
    /// considered pinned: no request is made and `Ok(None)` is returned.
    pub async fn resolve(
        &self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
    ) -> Result<Option<ResolvedArtifactMetadata>> {
        let token = VersionToken::parse(version);
        let Some(channel) = self.channels.for_token(&token) else {
            debug!(
                "{}:{} requests pinned version '{}', nothing to resolve",
                group_id, artifact_id, version
            );
            return Ok(None);
        };
        self.resolve_in_channel(group_id, artifact_id, version, channel)
            .await
            .map(Some)
    }

    /// Looks up `version` in an explicit repository channel. The version is
    /// passed through as-is, so snapshot versions like `1.0-SNAPSHOT` work too.
    pub async fn resolve_in_channel(
        &self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
        channel: &str,
    ) -> Result<ResolvedArtifactMetadata> {
        info!(
            "resolve(groupId={}, artifactId={}, version={}, repository={})",
            group_id, artifact_id, version, channel
        );
        let query = ArtifactQuery {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            channel: channel.to_string(),
        };
        let data = self.transport.fetch(&query).await?.data;
        info!("Resolved: {}", data);
        Ok(data)
    }

    pub async fn resolve_coordinate(
        &self,
        coordinate: &DependencyCoordinate,
    ) -> Result<Option<ResolvedArtifactMetadata>> {
        self.resolve(
            &coordinate.group_id,
            &coordinate.artifact_id,
            &coordinate.version,
        )
        .await
    }
}
