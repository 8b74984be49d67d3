//! Model version record

use super::macros::declare_model_object;
use super::{Model, ModelObject, UniqueModelObject};

const VERSION_IDENTIFIER: usize = 1;

declare_model_object! {
    /// Schema version the model was written with
    Version => OsVersion
}

impl ModelObject for Version {}
impl UniqueModelObject for Version {}

impl Version {
    pub fn version_identifier(&self, model: &Model) -> String {
        model.required_string(self.0, VERSION_IDENTIFIER)
    }

    pub fn set_version_identifier(&self, model: &mut Model, version: &str) -> bool {
        model.set_string(self.0, VERSION_IDENTIFIER, version)
    }
}
