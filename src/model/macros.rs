//! Declarative helpers shared by every facade

/// Declare the handle newtype of a facade bound to one internal record type
macro_rules! declare_model_object {
    ($(#[$meta:meta])* $name:ident => $object_type:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name($crate::workspace::Handle);

        impl $crate::model::ObjectHandle for $name {
            fn handle(&self) -> $crate::workspace::Handle {
                self.0
            }
        }

        impl $crate::model::ConcreteModelObject for $name {
            const IDD_OBJECT_TYPE: $crate::idd::IddObjectType =
                $crate::idd::IddObjectType::$object_type;

            fn wrap(handle: $crate::workspace::Handle) -> Self {
                Self(handle)
            }
        }
    };
}

/// Declare a closed set of facades that a reference field may resolve to
///
/// The generated enum casts by record type and forwards the lifecycle
/// operations of [`ModelObject`](crate::model::ModelObject) to the variant.
macro_rules! model_object_enum {
    ($(#[$meta:meta])* $name:ident { $( $variant:ident($ty:ty) ),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant($ty), )*
        }

        impl $crate::model::ObjectHandle for $name {
            fn handle(&self) -> $crate::workspace::Handle {
                match self {
                    $( $name::$variant(o) => $crate::model::ObjectHandle::handle(o), )*
                }
            }
        }

        impl $crate::model::ObjectCast for $name {
            fn cast(model: &$crate::model::Model, handle: $crate::workspace::Handle) -> Option<Self> {
                let object_type = model.object_type(handle)?;
                $(
                    if object_type == <$ty as $crate::model::ConcreteModelObject>::IDD_OBJECT_TYPE {
                        return Some($name::$variant(
                            <$ty as $crate::model::ConcreteModelObject>::wrap(handle),
                        ));
                    }
                )*
                None
            }
        }

        impl $name {
            pub fn idd_object_type(&self) -> $crate::idd::IddObjectType {
                match self {
                    $( $name::$variant(_) => <$ty as $crate::model::ConcreteModelObject>::IDD_OBJECT_TYPE, )*
                }
            }

            pub fn children(&self, model: &$crate::model::Model) -> Vec<$crate::workspace::Handle> {
                match self {
                    $( $name::$variant(o) => $crate::model::ModelObject::children(o, model), )*
                }
            }

            pub fn schedule_type_keys(
                &self,
                model: &$crate::model::Model,
                schedule: $crate::workspace::Handle,
            ) -> Vec<$crate::model::ScheduleTypeKey> {
                match self {
                    $( $name::$variant(o) => $crate::model::ModelObject::schedule_type_keys(o, model, schedule), )*
                }
            }

            pub fn remove(&self, model: &mut $crate::model::Model) -> Vec<$crate::workspace::WorkspaceObject> {
                match self {
                    $( $name::$variant(o) => $crate::model::ModelObject::remove(o, model), )*
                }
            }

            pub fn clone_into_model(
                &self,
                source: &$crate::model::Model,
                target: &mut $crate::model::Model,
            ) -> Self {
                match self {
                    $( $name::$variant(o) => $name::$variant($crate::model::ModelObject::clone_into_model(o, source, target)), )*
                }
            }

            pub fn clone_object(&self, model: &mut $crate::model::Model) -> Self {
                let source = model.clone();
                self.clone_into_model(&source, model)
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(object: $ty) -> Self {
                    $name::$variant(object)
                }
            }
        )*
    };
}

pub(crate) use declare_model_object;
pub(crate) use model_object_enum;
