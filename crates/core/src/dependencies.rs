//! Dependency graph derived from field visibility rules.
//!
//! Maps a depended-upon field id to the fields whose visibility depends
//! on it. Derived on demand from a field list; never persisted.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::field::Field;

/// Adjacency mapping: field id -> ids of fields that depend on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DependencyGraph(pub BTreeMap<String, Vec<String>>);

impl DependencyGraph {
    pub fn new() -> Self {
        DependencyGraph(BTreeMap::new())
    }

    /// Fields whose visibility depends on `field_id`.
    pub fn dependents_of(&self, field_id: &str) -> Option<&[String]> {
        self.0.get(field_id).map(|bucket| bucket.as_slice())
    }

    /// Depended-upon field ids, in deterministic order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Total number of visibility edges.
    pub fn edge_count(&self) -> usize {
        self.0.values().map(|bucket| bucket.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Derive the dependency graph from a field list.
///
/// Fields without a visibility rule contribute no edge. Dependent order
/// within each bucket follows field iteration order, so repeated calls
/// over the same list produce identical output.
pub fn build_dependencies(fields: &[Field]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for field in fields {
        if let Some(rule) = &field.visible_if {
            graph
                .0
                .entry(rule.question_id.clone())
                .or_default()
                .push(field.id.clone());
        }
    }
    graph
}
