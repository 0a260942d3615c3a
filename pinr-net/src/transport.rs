// pinr-net/src/transport.rs
use async_trait::async_trait;
use pinr_common::config::Config;
use pinr_common::error::{PinrError, Result};
use pinr_common::model::ArtifactResolveResponse;
use reqwest::Client;
use tracing::{debug, error};
use url::Url;

use crate::http::build_http_client;
use crate::validation::validate_url;

/// One lookup against the metadata service: the `g`, `a`, `v` and `r`
/// query parameters of the resolve endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactQuery {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub channel: String,
}

impl ArtifactQuery {
    fn params(&self) -> [(&'static str, &str); 4] {
        [
            ("g", self.group_id.as_str()),
            ("a", self.artifact_id.as_str()),
            ("v", self.version.as_str()),
            ("r", self.channel.as_str()),
        ]
    }
}

/// Performs a single metadata lookup. Implementations report every failure
/// of the remote call (transport, timeout, status, body) as
/// [`PinrError::RemoteLookup`] and never retry.
#[async_trait]
pub trait MetadataTransport: Send + Sync {
    async fn fetch(&self, query: &ArtifactQuery) -> Result<ArtifactResolveResponse>;
}

/// [`MetadataTransport`] backed by the repository manager's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpMetadataTransport {
    client: Client,
    endpoint: Url,
}

impl HttpMetadataTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let endpoint = validate_url(&config.metadata_url)?;
        let client = build_http_client(config)?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl MetadataTransport for HttpMetadataTransport {
    async fn fetch(&self, query: &ArtifactQuery) -> Result<ArtifactResolveResponse> {
        let url = &self.endpoint;
        debug!("GET {} with {:?}", url, query);

        let response = self
            .client
            .get(url.clone())
            .query(&query.params()[..])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!("Metadata request to {} timed out: {}", url, e);
                    PinrError::RemoteLookup(format!("request to {url} timed out: {e}"))
                } else {
                    error!("HTTP request failed for {}: {}", url, e);
                    PinrError::RemoteLookup(format!("HTTP request failed for {url}: {e}"))
                }
            })?;

        let status = response.status();
        debug!("Received HTTP status: {} for {}", status, url);
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("(Failed to read response body: {e})"));
            error!("HTTP error {} for URL {}: {}", status, url, body);
            return Err(PinrError::RemoteLookup(format!(
                "HTTP status {status} from {url}: {body}"
            )));
        }

        let body = response.text().await.map_err(|e| {
            PinrError::RemoteLookup(format!("Failed to read response body from {url}: {e}"))
        })?;
        serde_json::from_str::<ArtifactResolveResponse>(&body).map_err(|e| {
            error!("Malformed resolve response from {}: {}", url, e);
            PinrError::RemoteLookup(format!("Malformed resolve response from {url}: {e}"))
        })
    }
}
