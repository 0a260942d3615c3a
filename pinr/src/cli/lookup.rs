//! Contains the logic for the `lookup` command.
use clap::Args;
use colored::Colorize;
use pinr_common::error::Result;
use pinr_common::model::ResolvedArtifactMetadata;
use pinr_common::Config;
use pinr_net::CoordinateResolver;

#[derive(Args, Debug)]
pub struct Lookup {
    pub group_id: String,
    pub artifact_id: String,
    /// RELEASE, LATEST, or an explicit version (requires --channel)
    #[arg(id = "requested_version", value_name = "VERSION")]
    pub version: String,
    /// Query this repository channel directly instead of deriving it from
    /// the version token
    #[arg(long)]
    pub channel: Option<String>,
}

impl Lookup {
    pub async fn run(&self, config: &Config) -> Result<()> {
        match self.fetch(config).await? {
            Some(metadata) => println!("{}", serde_json::to_string_pretty(&metadata)?),
            None => println!(
                "{} {}:{}:{} is already pinned, nothing to resolve",
                "Note:".yellow().bold(),
                self.group_id,
                self.artifact_id,
                self.version
            ),
        }
        Ok(())
    }

    async fn fetch(&self, config: &Config) -> Result<Option<ResolvedArtifactMetadata>> {
        let resolver = CoordinateResolver::from_config(config)?;
        match &self.channel {
            Some(channel) => resolver
                .resolve_in_channel(&self.group_id, &self.artifact_id, &self.version, channel)
                .await
                .map(Some),
            None => {
                resolver
                    .resolve(&self.group_id, &self.artifact_id, &self.version)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::cli::{CliArgs, Command};

    fn parse_lookup(args: &[&str]) -> Lookup {
        match CliArgs::try_parse_from(args).unwrap().command {
            Command::Lookup(lookup) => lookup,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[tokio::test]
    async fn lookup_resolves_release_against_service() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .query_param("g", "com.nth")
                    .query_param("a", "mail")
                    .query_param("v", "RELEASE")
                    .query_param("r", "releases");
                then.status(200).json_body(json!({
                    "data": {"groupId": "com.nth", "artifactId": "mail",
                             "version": "3.1.0", "baseVersion": "3.1.0"}
                }));
            })
            .await;

        let lookup = parse_lookup(&["pinr", "lookup", "com.nth", "mail", "RELEASE"]);
        let config = Config {
            metadata_url: server.url("/resolve"),
            ..Config::default()
        };
        lookup.run(&config).await.unwrap();
        let metadata = lookup.fetch(&config).await.unwrap().unwrap();

        mock.assert_hits_async(2).await;
        assert_eq!(metadata.version, "3.1.0");
    }

    #[tokio::test]
    async fn lookup_with_channel_passes_version_through() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .query_param("v", "1.0-SNAPSHOT")
                    .query_param("r", "snapshot-policy");
                then.status(200).json_body(json!({
                    "data": {"groupId": "com.nth", "artifactId": "mail",
                             "version": "1.0-20240101.120000-2", "baseVersion": "1.0-SNAPSHOT"}
                }));
            })
            .await;

        let lookup = parse_lookup(&[
            "pinr",
            "lookup",
            "com.nth",
            "mail",
            "1.0-SNAPSHOT",
            "--channel",
            "snapshot-policy",
        ]);
        let config = Config {
            metadata_url: server.url("/resolve"),
            ..Config::default()
        };
        let metadata = lookup.fetch(&config).await.unwrap().unwrap();

        mock.assert_async().await;
        assert_eq!(metadata.base_version.as_deref(), Some("1.0-SNAPSHOT"));
    }

    #[tokio::test]
    async fn pinned_lookup_makes_no_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(500);
            })
            .await;

        let lookup = parse_lookup(&["pinr", "lookup", "com.nth", "mail", "2.0.0"]);
        let config = Config {
            metadata_url: server.url("/resolve"),
            ..Config::default()
        };
        lookup.run(&config).await.unwrap();

        assert_eq!(lookup.fetch(&config).await.unwrap(), None);
        mock.assert_hits_async(0).await;
    }
}
