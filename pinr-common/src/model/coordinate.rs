// pinr-common/src/model/coordinate.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// A library reference in the project's dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyCoordinate {
    /// Symbolic key of the dependency, unique within a graph.
    pub id: String,
    pub group_id: String,
    pub artifact_id: String,
    /// Requested version: an explicit version or one of `RELEASE` / `LATEST`.
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl DependencyCoordinate {
    pub fn new(
        id: impl Into<String>,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            scope: None,
            classifier: None,
            kind: None,
        }
    }

    /// A copy of this coordinate with only the version replaced.
    pub fn with_version(&self, version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..self.clone()
        }
    }
}

impl fmt::Display for DependencyCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_version_preserves_other_fields() {
        let mut original = DependencyCoordinate::new("nth-common-mail", "com.nth", "mail", "RELEASE");
        original.scope = Some("compile".into());
        original.classifier = Some("jdk11".into());

        let updated = original.with_version("3.1.0");
        assert_eq!(updated.version, "3.1.0");
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.scope, original.scope);
        assert_eq!(updated.classifier, original.classifier);
        assert_eq!(original.version, "RELEASE");
    }

    #[test]
    fn deserializes_camel_case_list_entries() {
        let coordinate: DependencyCoordinate = serde_json::from_str(
            r#"{"id":"nth-bcdb","groupId":"com.nth.common","artifactId":"bcdb","version":"LATEST","type":"pom"}"#,
        )
        .unwrap();
        assert_eq!(coordinate.group_id, "com.nth.common");
        assert_eq!(coordinate.kind.as_deref(), Some("pom"));
        assert_eq!(coordinate.version, "LATEST");
        assert_eq!(coordinate.to_string(), "com.nth.common:bcdb:LATEST");
    }
}
