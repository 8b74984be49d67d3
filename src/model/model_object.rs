//! Facade traits
//!
//! A facade is a `Copy` handle bound to one record of a [`Model`]. Accessors
//! take the model explicitly, so facades never hold borrows and can be kept
//! across mutations.

use super::{Model, ScheduleTypeKey};
use crate::idd::IddObjectType;
use crate::workspace::{Handle, WorkspaceObject};

/// Anything identifying one record
pub trait ObjectHandle: Copy {
    fn handle(&self) -> Handle;

    fn name(&self, model: &Model) -> Option<String> {
        model.name(self.handle())
    }
}

/// Fallible typed view of a handle
///
/// Yields `None` when the record is missing or of another type.
pub trait ObjectCast: ObjectHandle + Sized {
    fn cast(model: &Model, handle: Handle) -> Option<Self>;
}

/// Facade bound to exactly one internal record type
pub trait ConcreteModelObject: ObjectHandle {
    const IDD_OBJECT_TYPE: IddObjectType;

    /// Wrap a handle without checking its type
    fn wrap(handle: Handle) -> Self;
}

impl<T: ConcreteModelObject> ObjectCast for T {
    fn cast(model: &Model, handle: Handle) -> Option<Self> {
        (model.object_type(handle)? == T::IDD_OBJECT_TYPE).then(|| T::wrap(handle))
    }
}

/// Lifecycle shared by every facade
///
/// The defaults treat the record as a leaf: nothing owned, nothing to detach.
/// Facades owning sub-objects override [`children`](Self::children),
/// [`remove`](Self::remove) and [`clone_into_model`](Self::clone_into_model) together.
pub trait ModelObject: ConcreteModelObject {
    fn set_name(&self, model: &mut Model, name: &str) -> Option<String> {
        model.workspace_mut().set_name(self.handle(), name)
    }

    /// Objects whose lifecycle follows this one
    fn children(&self, _model: &Model) -> Vec<Handle> {
        Vec::new()
    }

    /// Keys for every schedule field currently pointing at `schedule`
    fn schedule_type_keys(&self, _model: &Model, _schedule: Handle) -> Vec<ScheduleTypeKey> {
        Vec::new()
    }

    /// Remove the record, returning what was erased
    fn remove(&self, model: &mut Model) -> Vec<WorkspaceObject> {
        model.remove_record(self.handle())
    }

    /// Copy this object from `source` into `target`
    ///
    /// `source` and `target` may hold the same records, in which case the
    /// copy shares every reference with the original.
    fn clone_into_model(&self, source: &Model, target: &mut Model) -> Self {
        Self::wrap(target.clone_record(source, self.handle(), &[]))
    }

    /// Clone within the object's own model
    fn clone_object(&self, model: &mut Model) -> Self {
        let source = model.clone();
        self.clone_into_model(&source, model)
    }
}

/// Marker for types with at most one instance per model
///
/// Obtain instances through [`Model::unique`] and [`Model::optional_unique`].
pub trait UniqueModelObject: ModelObject {}
