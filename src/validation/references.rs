//! Reference validation
//!
//! Checks the reference fields of a workspace for targets that no longer
//! exist or names that never resolved, and the ownership graph of a model
//! for cycles. An ownership cycle would make clone and remove recurse
//! forever, so it is reported as an error.

use crate::idd::IddFieldKind;
use crate::model::{Model, ObjectHandle};
use crate::workspace::{FieldValue, Handle, Workspace};
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Result of reference validation
#[derive(Debug, Default)]
pub struct ReferenceValidationResult {
    /// Pointers to handles that are not part of the workspace
    pub dangling: Vec<DanglingReference>,
    /// Object-list fields holding a name that matched no record
    pub unresolved: Vec<UnresolvedReference>,
    /// Groups of objects that own each other
    pub ownership_cycles: Vec<OwnershipCycle>,
}

impl ReferenceValidationResult {
    /// Whether nothing that breaks translation was found
    ///
    /// Unresolved names are tolerated; they are reported as warnings.
    pub fn is_valid(&self) -> bool {
        self.dangling.is_empty() && self.ownership_cycles.is_empty()
    }
}

/// Pointer whose target is missing
#[derive(Debug, Clone, PartialEq)]
pub struct DanglingReference {
    pub source: Handle,
    pub index: usize,
    pub target: Handle,
}

/// Name that no record answers to
#[derive(Debug, Clone, PartialEq)]
pub struct UnresolvedReference {
    pub source: Handle,
    pub index: usize,
    pub name: String,
}

/// Objects reachable from themselves through `children`
#[derive(Debug, Clone, PartialEq)]
pub struct OwnershipCycle {
    pub cycle_path: Vec<Handle>,
}

/// Reference validator
#[derive(Debug, Default)]
pub struct ReferenceValidator;

impl ReferenceValidator {
    /// Create a new reference validator
    pub fn new() -> Self {
        Self
    }

    /// Check every reference field of a workspace of either dialect
    pub fn validate_workspace(&self, workspace: &Workspace) -> ReferenceValidationResult {
        let mut result = ReferenceValidationResult::default();
        for object in workspace.objects() {
            let Some(idd) = workspace.idd().object(object.object_type()) else {
                continue;
            };
            for (index, value) in object.values().enumerate() {
                let is_reference = idd
                    .field(index)
                    .is_some_and(|f| matches!(f.kind, IddFieldKind::Object(_)));
                if !is_reference {
                    continue;
                }
                match value {
                    FieldValue::Pointer(target) if !workspace.contains(*target) => {
                        result.dangling.push(DanglingReference {
                            source: object.handle(),
                            index,
                            target: *target,
                        });
                    }
                    FieldValue::String(name) => result.unresolved.push(UnresolvedReference {
                        source: object.handle(),
                        index,
                        name: name.clone(),
                    }),
                    _ => {}
                }
            }
        }
        result
    }

    /// Check a model's references and its ownership graph
    pub fn validate_model(&self, model: &Model) -> ReferenceValidationResult {
        let mut result = self.validate_workspace(model.workspace());
        result.ownership_cycles = self.find_ownership_cycles(model);
        result
    }

    /// Find cycles in the graph of `children` edges
    ///
    /// Uses petgraph's strongly connected components: every component with
    /// more than one member, or a single member owning itself, is a cycle.
    pub fn find_ownership_cycles(&self, model: &Model) -> Vec<OwnershipCycle> {
        let mut graph = DiGraph::<Handle, ()>::new();
        let mut node_map: HashMap<Handle, NodeIndex> = HashMap::new();

        let objects = model.model_objects();
        for object in &objects {
            let handle = object.handle();
            node_map.insert(handle, graph.add_node(handle));
        }
        for object in &objects {
            let from = node_map[&object.handle()];
            for child in object.children(model) {
                if let Some(&to) = node_map.get(&child) {
                    graph.add_edge(from, to, ());
                }
            }
        }

        tarjan_scc(&graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1
                    || component
                        .first()
                        .is_some_and(|n| graph.contains_edge(*n, *n))
            })
            .map(|component| OwnershipCycle {
                cycle_path: component.into_iter().map(|n| graph[n]).collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CoilHeatingElectric, FanOnOff, ModelObject, ModelObjectList};

    #[test]
    fn test_clean_model_is_valid() {
        let mut model = Model::new();
        FanOnOff::new(&mut model);
        let result = ReferenceValidator::new().validate_model(&model);
        assert!(result.is_valid());
        assert!(result.unresolved.is_empty());
    }

    #[test]
    fn test_unresolved_name_is_reported_but_valid() {
        let mut model = Model::new();
        let coil = CoilHeatingElectric::new(&mut model);
        assert!(model.workspace_mut().set_string(coil.handle(), 2, "Missing Schedule"));

        let result = ReferenceValidator::new().validate_workspace(model.workspace());
        assert_eq!(result.unresolved.len(), 1);
        assert_eq!(result.unresolved[0].name, "Missing Schedule");
        assert_eq!(result.unresolved[0].index, 2);
        assert!(result.is_valid());
    }

    #[test]
    fn test_self_owning_list_is_a_cycle() {
        let mut model = Model::new();
        let list = ModelObjectList::new(&mut model);
        assert!(list.add_model_object(&mut model, list));

        let cycles = ReferenceValidator::new().find_ownership_cycles(&model);
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].cycle_path, vec![list.handle()]);
    }

    #[test]
    fn test_mutually_owning_lists_are_one_cycle() {
        let mut model = Model::new();
        let first = ModelObjectList::new(&mut model);
        let second = ModelObjectList::new(&mut model);
        first.add_model_object(&mut model, second);
        second.add_model_object(&mut model, first);

        let result = ReferenceValidator::new().validate_model(&model);
        assert!(!result.is_valid());
        assert_eq!(result.ownership_cycles.len(), 1);
        let mut path = result.ownership_cycles[0].cycle_path.clone();
        path.sort();
        let mut expected = vec![first.handle(), second.handle()];
        expected.sort();
        assert_eq!(path, expected);
    }

    #[test]
    fn test_owned_curves_are_not_cycles() {
        let mut model = Model::new();
        let fan = FanOnOff::new(&mut model);
        assert_eq!(fan.children(&model).len(), 2);
        assert!(ReferenceValidator::new().find_ownership_cycles(&model).is_empty());
    }
}
