//! Circular-dependency detection over the visibility graph.
//!
//! Depth-first traversal with a recursion-stack set. A node
//! re-encountered while still on the stack means visibility is
//! unresolvable along the current path; the traversal root is recorded
//! as circular. The stack is left in place on detection, so the
//! remaining members of the cycle are flagged directly when their own
//! top-level traversal starts. The visited set is shared across roots
//! to keep the whole check linear in fields plus edges.

use std::collections::BTreeSet;

use formlogic_core::{build_dependencies, DependencyGraph, Field};
use serde::Serialize;

/// Verdict of the save-time cycle check. `is_valid` gates whether the
/// surrounding system accepts the form write; the graph is returned so
/// callers can render a precise message per offending field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicResult {
    pub is_valid: bool,
    pub circular_fields: Vec<String>,
    pub dependencies: DependencyGraph,
}

/// Check a candidate field list for circular visibility dependencies.
///
/// Self-loops (a field depending on itself) and multi-node cycles are
/// flagged identically. Output order is deterministic.
pub fn validate_logic(fields: &[Field]) -> LogicResult {
    let dependencies = build_dependencies(fields);

    let mut visited = BTreeSet::new();
    let mut stack = BTreeSet::new();
    let mut circular_fields = Vec::new();

    for field_id in dependencies.keys() {
        if on_cycle(field_id, &dependencies, &mut visited, &mut stack) {
            circular_fields.push(field_id.clone());
        }
    }

    LogicResult {
        is_valid: circular_fields.is_empty(),
        circular_fields,
        dependencies,
    }
}

fn on_cycle(
    field_id: &str,
    dependencies: &DependencyGraph,
    visited: &mut BTreeSet<String>,
    stack: &mut BTreeSet<String>,
) -> bool {
    if stack.contains(field_id) {
        return true;
    }
    if visited.contains(field_id) {
        return false;
    }

    visited.insert(field_id.to_string());
    stack.insert(field_id.to_string());

    if let Some(dependents) = dependencies.dependents_of(field_id) {
        for dependent in dependents {
            if on_cycle(dependent, dependencies, visited, stack) {
                return true;
            }
        }
    }

    stack.remove(field_id);
    false
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
