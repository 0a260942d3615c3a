//! Contains the logic for the `resolve` command.
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use colored::Colorize;
use pinr_common::error::Result;
use pinr_common::model::DependencyCoordinate;
use pinr_common::{Config, DependencyGraph};
use pinr_core::{ResolutionOrchestrator, ResolutionOutcome, ResolutionReport};
use pinr_net::CoordinateResolver;
use prettytable::{format, Cell, Row, Table};

#[derive(Args, Debug)]
pub struct Resolve {
    /// Dependency list: a JSON array of coordinates, or a TOML file with
    /// `[[dependency]]` entries
    pub path: PathBuf,

    /// Print the updated dependency list as JSON instead of a summary table
    #[arg(long)]
    pub json: bool,
}

impl Resolve {
    pub async fn run(&self, config: &Config) -> Result<()> {
        tracing::debug!("Resolving dependency list {}", self.path.display());
        let graph = Arc::new(DependencyGraph::load(&self.path)?);
        let requested = graph.snapshot();

        let report = resolve_graph(&graph, config).await?;

        if self.json {
            println!("{}", graph.to_json()?);
        } else {
            print_report(&requested, &graph, &report);
        }
        Ok(())
    }
}

/// Runs one resolution pass over `graph` against the configured service.
pub async fn resolve_graph(graph: &Arc<DependencyGraph>, config: &Config) -> Result<ResolutionReport> {
    let resolver = Arc::new(CoordinateResolver::from_config(config)?);
    let orchestrator = ResolutionOrchestrator::new(resolver, config);
    Ok(orchestrator.resolve_all(graph).await)
}

fn print_report(requested: &[DependencyCoordinate], graph: &DependencyGraph, report: &ResolutionReport) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(Row::new(vec![
        Cell::new("Dependency").style_spec("b"),
        Cell::new("Requested").style_spec("b"),
        Cell::new("Version").style_spec("b"),
        Cell::new("Status").style_spec("b"),
    ]));

    for original in requested {
        let current = graph
            .get(&original.id)
            .map(|c| c.version)
            .unwrap_or_default();
        let status = match report.outcome(&original.id) {
            Some(ResolutionOutcome::Updated { .. }) => Cell::new("resolved").style_spec("Fg"),
            Some(ResolutionOutcome::Failed(msg)) => {
                Cell::new(&format!("failed: {msg}")).style_spec("Fr")
            }
            Some(other) => Cell::new(&other.to_string()).style_spec("Fy"),
            None => Cell::new("external"),
        };
        table.add_row(Row::new(vec![
            Cell::new(&original.id),
            Cell::new(&original.version),
            Cell::new(&current),
            status,
        ]));
    }
    table.printstd();

    let failed = report.failures().count();
    let summary = format!(
        "{} resolved, {} failed, {} external",
        report.updated_count(),
        failed,
        report.skipped.len()
    );
    if failed > 0 {
        println!("{}", summary.yellow());
    } else {
        println!("{}", summary.green());
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn resolves_list_against_metadata_service() {
        let server = MockServer::start_async().await;
        let release = server
            .mock_async(|when, then| {
                when.method(GET).query_param("a", "mail").query_param("r", "releases");
                then.status(200).json_body(json!({
                    "data": {"groupId": "com.nth.common", "artifactId": "mail",
                             "version": "3.1.0", "baseVersion": "3.1.0"}
                }));
            })
            .await;
        let snapshot = server
            .mock_async(|when, then| {
                when.method(GET)
                    .query_param("a", "watcher")
                    .query_param("r", "snapshot-policy");
                then.status(200).json_body(json!({
                    "data": {"groupId": "com.nth.common", "artifactId": "watcher",
                             "version": "2.0.0-20240101.120000-3", "baseVersion": "2.0.0-SNAPSHOT",
                             "snapshot": true}
                }));
            })
            .await;
        let broken = server
            .mock_async(|when, then| {
                when.method(GET).query_param("a", "bcdb");
                then.status(500);
            })
            .await;

        let mut list = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            list,
            "{}",
            json!([
                {"id": "nth-common-mail", "groupId": "com.nth.common", "artifactId": "mail", "version": "RELEASE"},
                {"id": "nth-common-watcher", "groupId": "com.nth.common", "artifactId": "watcher", "version": "LATEST"},
                {"id": "nth-common-bcdb", "groupId": "com.nth.common", "artifactId": "bcdb", "version": "RELEASE"},
                {"id": "jaxb-runtime", "groupId": "org.glassfish.jaxb", "artifactId": "jaxb-runtime", "version": "RELEASE"}
            ])
        )
        .unwrap();

        let config = Config {
            metadata_url: server.url("/nexus/service/local/artifact/maven/resolve"),
            ..Config::default()
        };
        let graph = Arc::new(DependencyGraph::load(list.path()).unwrap());
        let report = resolve_graph(&graph, &config).await.unwrap();

        release.assert_async().await;
        snapshot.assert_async().await;
        broken.assert_async().await;
        assert_eq!(graph.get("nth-common-mail").unwrap().version, "3.1.0");
        assert_eq!(graph.get("nth-common-watcher").unwrap().version, "2.0.0-SNAPSHOT");
        assert_eq!(graph.get("nth-common-bcdb").unwrap().version, "RELEASE");
        assert_eq!(graph.get("jaxb-runtime").unwrap().version, "RELEASE");
        assert_eq!(report.updated_count(), 2);
        assert_eq!(report.skipped, vec!["jaxb-runtime"]);
    }
}
