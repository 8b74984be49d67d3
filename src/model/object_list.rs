//! Variable-length list of references
//!
//! A [`ModelObjectList`] is plumbing for facades that own a variable number
//! of sub-objects: the owner points at one list, and the list holds one
//! reference per member in its extensible groups, in insertion order.
//!
//! Entries whose target has been removed from the model resolve to nothing;
//! every query skips them with a warning instead of failing.

use super::macros::declare_model_object;
use super::{AnyModelObject, ConcreteModelObject, Model, ModelObject, ObjectCast, ObjectHandle};
use crate::workspace::{Handle, WorkspaceObject};
use std::collections::HashMap;
use tracing::warn;

declare_model_object! {
    /// Ordered list of references to other objects
    ModelObjectList => OsModelObjectList
}

impl ModelObjectList {
    pub fn new(model: &mut Model) -> Self {
        Self(model.add_record(Self::IDD_OBJECT_TYPE))
    }

    /// Append a reference to `object`
    ///
    /// Duplicates are not rejected. On failure the new entry is rolled back.
    pub fn add_model_object(&self, model: &mut Model, object: impl ObjectHandle) -> bool {
        self.push_entry(model, object.handle())
    }

    fn push_entry(&self, model: &mut Model, member: Handle) -> bool {
        let Some(group) = model.workspace_mut().push_extensible_group(self.0) else {
            return false;
        };
        let pointed = model
            .workspace()
            .group_start(self.0, group)
            .is_some_and(|index| model.set_target(self.0, index, member));
        if !pointed {
            model.workspace_mut().erase_extensible_group(self.0, group);
        }
        pointed
    }

    /// Resolved target of every entry, with its group index
    fn entries(&self, model: &Model) -> Vec<(usize, Handle)> {
        let workspace = model.workspace();
        let mut entries = Vec::new();
        for group in 0..workspace.num_extensible_groups(self.0) {
            let target = workspace
                .group_start(self.0, group)
                .and_then(|index| workspace.get_target(self.0, index));
            match target {
                Some(target) => entries.push((group, target)),
                None => warn!(list = %self.0, group, "list entry does not resolve, skipping"),
            }
        }
        entries
    }

    pub fn has_model_object(&self, model: &Model, object: impl ObjectHandle) -> bool {
        self.entries(model)
            .iter()
            .any(|(_, target)| *target == object.handle())
    }

    /// Drop the first entry referencing `object`; the object itself stays
    pub fn remove_model_object(&self, model: &mut Model, object: impl ObjectHandle) -> bool {
        let found = self
            .entries(model)
            .into_iter()
            .find(|(_, target)| *target == object.handle());
        match found {
            Some((group, _)) => model.workspace_mut().erase_extensible_group(self.0, group),
            None => false,
        }
    }

    /// Empty the list without removing any member
    pub fn remove_all_model_objects(&self, model: &mut Model) {
        model.workspace_mut().clear_extensible_groups(self.0);
    }

    /// Members castable to `T`, in insertion order
    pub fn model_objects<T: ObjectCast>(&self, model: &Model) -> Vec<T> {
        self.entries(model)
            .into_iter()
            .filter_map(|(_, target)| T::cast(model, target))
            .collect()
    }

    /// Number of entries, resolvable or not
    pub fn size(&self, model: &Model) -> usize {
        model.workspace().num_extensible_groups(self.0)
    }

    /// Clone with a record of lists already copied in this pass
    ///
    /// A member seen before resolves to its existing copy, so lists that
    /// contain themselves or each other are copied once.
    fn clone_tracked(&self, source: &Model, target: &mut Model, copies: &mut HashMap<Handle, Handle>) -> Self {
        let copy = Self(target.clone_record(source, self.0, &[]));
        copies.insert(self.0, copy.0);
        copy.remove_all_model_objects(target);
        for member in self.model_objects::<AnyModelObject>(source) {
            let existing = copies.get(&member.handle()).copied();
            let member_copy = match (existing, member) {
                (Some(existing), _) => existing,
                (None, AnyModelObject::ModelObjectList(list)) => list.clone_tracked(source, target, copies).0,
                (None, other) => other.clone_into_model(source, target).handle(),
            };
            copy.push_entry(target, member_copy);
        }
        copy
    }
}

impl ModelObject for ModelObjectList {
    fn children(&self, model: &Model) -> Vec<Handle> {
        self.entries(model).into_iter().map(|(_, target)| target).collect()
    }

    /// Remove the list, then every listed object still in the model
    ///
    /// The list record goes first so entries pointing back at it, directly
    /// or through another list, no longer resolve.
    fn remove(&self, model: &mut Model) -> Vec<WorkspaceObject> {
        let members = self.children(model);
        let mut removed = model.remove_record(self.0);
        for member in members {
            if model.contains(member) {
                removed.extend(model.remove_model_object(member));
            }
        }
        removed
    }

    /// Clone the list and every member
    fn clone_into_model(&self, source: &Model, target: &mut Model) -> Self {
        self.clone_tracked(source, target, &mut HashMap::new())
    }
}
