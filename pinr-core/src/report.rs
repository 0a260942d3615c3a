// pinr-core/src/report.rs
use std::fmt;

/// What happened to one eligible dependency during a resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// The graph entry now carries `to` instead of `from`.
    Updated { from: String, to: String },
    /// The requested version was not a floating token; nothing was fetched.
    Pinned,
    /// The service answered but had no usable version string.
    Empty,
    /// The id disappeared from the graph before its lookup started.
    Missing,
    /// The lookup failed; the original coordinate was kept.
    Failed(String),
}

impl ResolutionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ResolutionOutcome::Failed(_))
    }
}

impl fmt::Display for ResolutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionOutcome::Updated { from, to } => write!(f, "updated {from} -> {to}"),
            ResolutionOutcome::Pinned => f.write_str("pinned"),
            ResolutionOutcome::Empty => f.write_str("no usable version"),
            ResolutionOutcome::Missing => f.write_str("missing"),
            ResolutionOutcome::Failed(msg) => write!(f, "failed: {msg}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyResolution {
    pub id: String,
    pub outcome: ResolutionOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    /// One entry per eligible id, in graph order.
    pub resolutions: Vec<DependencyResolution>,
    /// Ids outside the internal naming convention, never looked up.
    pub skipped: Vec<String>,
}

impl ResolutionReport {
    pub fn outcome(&self, id: &str) -> Option<&ResolutionOutcome> {
        self.resolutions
            .iter()
            .find(|r| r.id == id)
            .map(|r| &r.outcome)
    }

    pub fn updated_count(&self) -> usize {
        self.resolutions
            .iter()
            .filter(|r| matches!(r.outcome, ResolutionOutcome::Updated { .. }))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &DependencyResolution> {
        self.resolutions.iter().filter(|r| r.outcome.is_failure())
    }
}
