//! Internal dependency resolution
//!
//! Expands a selection of components into the full set that has to be
//! written: the selection plus everything reachable through
//! `internalDependencies`. Traversal is breadth-first over a visited set keyed
//! by component name, so cycles of any length terminate and every component
//! appears at most once.

use crate::registry::manifest::{find_component, Component};
use std::collections::{HashMap, HashSet, VecDeque};

/// An internal dependency name with no matching component in the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedDependency {
    /// Component that declared the dependency
    pub component: String,
    /// The missing dependency name
    pub dependency: String,
}

/// Result of expanding a selection
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Components to install, selection first, then in discovery order
    pub components: Vec<Component>,
    /// Dependencies that could not be found and were skipped
    pub unresolved: Vec<UnresolvedDependency>,
}

impl Resolution {
    pub fn names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Resolve `selected` against `available`, skipping anything in `already_included`.
///
/// Selected components are always part of the result. Discovered dependencies
/// already present in `already_included` are neither returned nor expanded.
pub fn resolve(
    selected: &[Component],
    available: &[Component],
    already_included: &[Component],
) -> Resolution {
    // First occurrence wins for duplicate names
    let mut index: HashMap<&str, &Component> = HashMap::new();
    for component in available {
        index.entry(component.name.as_str()).or_insert(component);
    }

    let mut visited: HashSet<&str> = already_included.iter().map(|c| c.name.as_str()).collect();
    let mut emitted: HashSet<&str> = HashSet::new();
    let mut worklist: VecDeque<&Component> = VecDeque::new();
    let mut resolution = Resolution::default();

    for component in selected {
        visited.insert(component.name.as_str());
        if emitted.insert(component.name.as_str()) {
            resolution.components.push(component.clone());
            worklist.push_back(component);
        }
    }

    while let Some(component) = worklist.pop_front() {
        for dependency in &component.internal_dependencies {
            let Some(found) = index.get(dependency.as_str()).copied() else {
                let missing = UnresolvedDependency {
                    component: component.name.clone(),
                    dependency: dependency.clone(),
                };
                if !resolution.unresolved.contains(&missing) {
                    resolution.unresolved.push(missing);
                }
                continue;
            };

            if visited.insert(found.name.as_str()) {
                resolution.components.push(found.clone());
                worklist.push_back(found);
            }
        }
    }

    resolution
}

/// Components picked from user-supplied names
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub components: Vec<Component>,
    /// Names that matched nothing
    pub unmatched: Vec<String>,
}

/// Pick components by name or short identifier.
///
/// `all` or `*` selects every component that is not global.
pub fn select_components(
    available: &[Component],
    queries: &[String],
    global: &[&str],
) -> Selection {
    if queries.iter().any(|q| q == "all" || q == "*") {
        return Selection {
            components: available
                .iter()
                .filter(|c| !global.contains(&c.name.as_str()))
                .cloned()
                .collect(),
            unmatched: Vec::new(),
        };
    }

    let mut selection = Selection::default();
    for query in queries {
        match find_component(available, query) {
            Some(component) => {
                if !selection.components.iter().any(|c| c.name == component.name) {
                    selection.components.push(component.clone());
                }
            }
            None => selection.unmatched.push(query.clone()),
        }
    }
    selection
}
