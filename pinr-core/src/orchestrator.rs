// pinr-core/src/orchestrator.rs
//! Fans coordinate resolution out over every internal dependency of a graph
//! and writes the resolved versions back.
use std::collections::HashMap;
use std::sync::Arc;

use pinr_common::config::Config;
use pinr_common::graph::DependencyGraph;
use pinr_net::CoordinateResolver;
use tokio::sync::Semaphore;
use tokio::task::{Id as TaskId, JoinSet};
use tracing::{debug, error, info, instrument, warn};

use crate::merge::merge_version;
use crate::report::{DependencyResolution, ResolutionOutcome, ResolutionReport};

pub struct ResolutionOrchestrator {
    resolver: Arc<CoordinateResolver>,
    config: Config,
}

impl ResolutionOrchestrator {
    pub fn new(resolver: Arc<CoordinateResolver>, config: &Config) -> Self {
        Self {
            resolver,
            config: config.clone(),
        }
    }

    /// Resolves every eligible dependency of `graph` concurrently and
    /// replaces its version in place.
    ///
    /// Never fails as a whole: a lookup error or a panicking task only
    /// affects its own dependency, which keeps its original coordinate.
    /// Dropping the returned future aborts every outstanding lookup, so no
    /// write reaches the graph after the caller has moved on.
    #[instrument(skip_all, fields(dependencies = graph.len()))]
    pub async fn resolve_all(&self, graph: &Arc<DependencyGraph>) -> ResolutionReport {
        let (eligible, skipped): (Vec<String>, Vec<String>) = graph
            .ids()
            .into_iter()
            .partition(|id| self.config.is_internal(id));
        debug!(
            "{} eligible dependencies, {} skipped (prefix '{}')",
            eligible.len(),
            skipped.len(),
            self.config.internal_prefix
        );

        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_lookups.max(1)));
        let mut tasks = JoinSet::new();
        let mut task_ids: HashMap<TaskId, String> = HashMap::with_capacity(eligible.len());
        for id in &eligible {
            let task_resolver = Arc::clone(&self.resolver);
            let task_graph = Arc::clone(graph);
            let task_semaphore = Arc::clone(&semaphore);
            let task_id = id.clone();
            let handle = tasks.spawn(async move {
                // The semaphore is never closed, so acquisition only fails
                // if that changes; run unthrottled in that case.
                let _permit = task_semaphore.acquire_owned().await.ok();
                let outcome = resolve_one(&task_resolver, &task_graph, &task_id).await;
                (task_id, outcome)
            });
            task_ids.insert(handle.id(), id.clone());
        }

        let mut outcomes: HashMap<String, ResolutionOutcome> = HashMap::with_capacity(eligible.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((id, outcome)) => {
                    outcomes.insert(id, outcome);
                }
                Err(join_error) => {
                    let id = task_ids
                        .get(&join_error.id())
                        .cloned()
                        .unwrap_or_default();
                    let message = if join_error.is_panic() {
                        let message = get_panic_message(join_error.into_panic());
                        warn!("Resolution task for {} panicked: {}", id, message);
                        message
                    } else {
                        warn!("Resolution task for {} was cancelled", id);
                        "resolution task was cancelled".to_string()
                    };
                    outcomes.insert(id, ResolutionOutcome::Failed(message));
                }
            }
        }

        let resolutions = eligible
            .into_iter()
            .map(|id| {
                let outcome = outcomes
                    .remove(&id)
                    .unwrap_or_else(|| ResolutionOutcome::Failed("no result recorded".to_string()));
                DependencyResolution { id, outcome }
            })
            .collect();

        let report = ResolutionReport {
            resolutions,
            skipped,
        };
        info!(
            "Resolved {} of {} internal dependencies ({} failed)",
            report.updated_count(),
            report.resolutions.len(),
            report.failures().count()
        );
        report
    }
}

async fn resolve_one(
    resolver: &CoordinateResolver,
    graph: &DependencyGraph,
    id: &str,
) -> ResolutionOutcome {
    let Some(current) = graph.get(id) else {
        debug!("Dependency {} vanished from the graph before resolution", id);
        return ResolutionOutcome::Missing;
    };

    let metadata = match resolver.resolve_coordinate(&current).await {
        Ok(Some(metadata)) => metadata,
        Ok(None) => return ResolutionOutcome::Pinned,
        Err(e) => {
            error!("Error resolving dependency {} at metadata service - {}", id, e);
            return ResolutionOutcome::Failed(e.to_string());
        }
    };

    match merge_version(&metadata) {
        Some(version) => {
            debug!("Dependency {}: {} -> {}", id, current.version, version);
            graph.replace(id, current.with_version(version.clone()));
            ResolutionOutcome::Updated {
                from: current.version,
                to: version,
            }
        }
        None => {
            debug!("Metadata for {} carried no usable version, keeping {}", id, current.version);
            ResolutionOutcome::Empty
        }
    }
}

pub(crate) fn get_panic_message(e: Box<dyn std::any::Any + Send>) -> String {
    match e.downcast_ref::<&'static str>() {
        Some(s) => (*s).to_string(),
        None => match e.downcast_ref::<String>() {
            Some(s) => s.clone(),
            None => "Unknown panic payload".to_string(),
        },
    }
}
