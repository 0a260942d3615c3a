// pinr-common/src/graph.rs
//! The project's dependency graph, shared between resolution tasks.
use std::fs;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::error::{PinrError, Result};
use crate::model::DependencyCoordinate;

/// Insertion-ordered map of coordinates keyed by dependency id.
///
/// All mutation goes through [`DependencyGraph::replace`], which holds the
/// write lock for a single key update; reads clone out of the map so no
/// guard ever escapes.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    entries: RwLock<IndexMap<String, DependencyCoordinate>>,
}

#[derive(Deserialize)]
struct TomlDependencyList {
    #[serde(default)]
    dependency: Vec<DependencyCoordinate>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a list, rejecting duplicate ids.
    pub fn from_coordinates(
        coordinates: impl IntoIterator<Item = DependencyCoordinate>,
    ) -> Result<Self> {
        let mut entries = IndexMap::new();
        for coordinate in coordinates {
            let id = coordinate.id.clone();
            if entries.insert(id.clone(), coordinate).is_some() {
                return Err(PinrError::Graph(format!("duplicate dependency id '{id}'")));
            }
        }
        Ok(Self {
            entries: RwLock::new(entries),
        })
    }

    /// Loads a dependency list from disk. `.toml` files carry a
    /// `[[dependency]]` array; anything else is read as a JSON array.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading dependency list from {}", path.display());
        let raw = fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let coordinates = if is_toml {
            toml::from_str::<TomlDependencyList>(&raw)
                .map_err(|e| PinrError::Parse("dependency list (toml)", e.to_string()))?
                .dependency
        } else {
            serde_json::from_str::<Vec<DependencyCoordinate>>(&raw)
                .map_err(|e| PinrError::Parse("dependency list (json)", e.to_string()))?
        };
        debug!("Loaded {} dependencies", coordinates.len());
        Self::from_coordinates(coordinates)
    }

    /// Snapshot of the identifiers currently present, in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<DependencyCoordinate> {
        self.read().get(id).cloned()
    }

    /// Replaces the coordinate stored under `id`, keeping its position.
    /// Inserts at the end when `id` is not present yet.
    pub fn replace(&self, id: &str, coordinate: DependencyCoordinate) {
        let mut entries = self.write();
        match entries.get_mut(id) {
            Some(slot) => *slot = coordinate,
            None => {
                entries.insert(id.to_string(), coordinate);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Ordered copy of every coordinate, for rendering.
    pub fn snapshot(&self) -> Vec<DependencyCoordinate> {
        self.read().values().cloned().collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    // A panic in another holder cannot leave a half-written entry behind:
    // every write is a single map operation.
    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, DependencyCoordinate>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, DependencyCoordinate>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
