// pinr-common/src/model/metadata.rs
//! Wire types returned by the artifact resolve endpoint.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Envelope around a single resolved record: `{ "data": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactResolveResponse {
    pub data: ResolvedArtifactMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedArtifactMetadata {
    pub group_id: String,
    pub artifact_id: String,
    /// Concrete version; may carry a timestamped snapshot qualifier.
    pub version: String,
    /// Version with the snapshot qualifier normalized away.
    #[serde(default)]
    pub base_version: Option<String>,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub sha1: Option<String>,
    #[serde(default)]
    pub snapshot: bool,
    #[serde(default)]
    pub snapshot_build_number: i64,
    #[serde(default)]
    pub snapshot_time_stamp: i64,
    #[serde(default)]
    pub present_locally: bool,
    #[serde(default)]
    pub repository_path: Option<String>,
}

impl fmt::Display for ResolvedArtifactMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{}:{} version={} baseVersion={} classifier={} extension={} fileName={} sha1={} \
             snapshot={} snapshotBuildNumber={} snapshotTimeStamp={} presentLocally={} \
             repositoryPath={}",
            self.group_id,
            self.artifact_id,
            self.version,
            opt(&self.base_version),
            opt(&self.classifier),
            opt(&self.extension),
            opt(&self.file_name),
            opt(&self.sha1),
            self.snapshot,
            self.snapshot_build_number,
            self.snapshot_time_stamp,
            self.present_locally,
            opt(&self.repository_path),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_snapshot_record() {
        let body = r#"{ "data": {
            "groupId": "com.nth.common", "artifactId": "watcher",
            "version": "2.3.0-20240101.120000-5", "baseVersion": "2.3.0-SNAPSHOT",
            "classifier": null, "extension": "jar",
            "fileName": "watcher-2.3.0-20240101.120000-5.jar", "sha1": "abc123",
            "snapshot": true, "snapshotBuildNumber": 5,
            "snapshotTimeStamp": 1704110400000, "presentLocally": false,
            "repositoryPath": "/com/nth/common/watcher/2.3.0-SNAPSHOT/watcher-2.3.0-20240101.120000-5.jar"
        } }"#;
        let response: ArtifactResolveResponse = serde_json::from_str(body).unwrap();
        let data = response.data;
        assert_eq!(data.version, "2.3.0-20240101.120000-5");
        assert_eq!(data.base_version.as_deref(), Some("2.3.0-SNAPSHOT"));
        assert!(data.snapshot);
        assert_eq!(data.snapshot_build_number, 5);
        assert_eq!(data.classifier, None);
    }

    #[test]
    fn auxiliary_fields_are_optional() {
        let body = r#"{"data":{"groupId":"g","artifactId":"a","version":"1.0.0"}}"#;
        let response: ArtifactResolveResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.base_version, None);
        assert!(!response.data.present_locally);
    }

    #[test]
    fn missing_version_is_rejected() {
        let body = r#"{"data":{"groupId":"g","artifactId":"a"}}"#;
        assert!(serde_json::from_str::<ArtifactResolveResponse>(body).is_err());
    }
}
