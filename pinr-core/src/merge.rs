// pinr-core/src/merge.rs
use pinr_common::model::ResolvedArtifactMetadata;

/// Picks the version written back into the graph: `baseVersion` when it has
/// text, otherwise `version`. `None` when neither does.
pub fn merge_version(metadata: &ResolvedArtifactMetadata) -> Option<String> {
    metadata
        .base_version
        .as_deref()
        .filter(|v| has_text(v))
        .or_else(|| Some(metadata.version.as_str()).filter(|v| has_text(v)))
        .map(str::to_string)
}

fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(version: &str, base_version: Option<&str>) -> ResolvedArtifactMetadata {
        ResolvedArtifactMetadata {
            group_id: "com.nth".into(),
            artifact_id: "watcher".into(),
            version: version.into(),
            base_version: base_version.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn base_version_wins() {
        let metadata = record("2.3.0-20240101.120000-5", Some("2.3.0"));
        assert_eq!(merge_version(&metadata).as_deref(), Some("2.3.0"));
    }

    #[test]
    fn falls_back_to_version() {
        assert_eq!(merge_version(&record("1.0.0", None)).as_deref(), Some("1.0.0"));
        assert_eq!(merge_version(&record("1.0.0", Some("  "))).as_deref(), Some("1.0.0"));
    }

    #[test]
    fn blank_record_yields_nothing() {
        assert_eq!(merge_version(&record("", None)), None);
        assert_eq!(merge_version(&record(" ", Some(""))), None);
    }
}
