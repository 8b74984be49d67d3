//! Internal object model
//!
//! [`Model`] owns an internal-dialect [`Workspace`]; every domain type is a
//! `Copy` facade over one of its records. Field policies shared by all
//! facades (defaulted, optional, autosizable, schedule-typed references) live
//! here as crate-private helpers so that every facade applies them the same way.

mod macros;
pub mod coils;
pub mod curves;
pub mod fans;
pub mod model_object;
pub mod object_list;
pub mod plant_loop;
pub mod schedule_type_registry;
pub mod schedules;
pub mod site;
pub mod thermal_zone;
pub mod unitary_system;
pub mod version;

pub use coils::{
    CoilCoolingDXVariableSpeed, CoilCoolingDXVariableSpeedSpeedData, CoilHeatingDesuperheater,
    CoilHeatingElectric, CoilHeatingWater, CoolingCoil, DesuperheaterSource, HeatingCoil,
};
pub use curves::{Curve, CurveBiquadratic, CurveCubic, CurveQuadratic};
pub use fans::{Fan, FanConstantVolume, FanOnOff};
pub use model_object::{ConcreteModelObject, ModelObject, ObjectCast, ObjectHandle, UniqueModelObject};
pub use object_list::ModelObjectList;
pub use plant_loop::PlantLoop;
pub use schedule_type_registry::{ScheduleType, ScheduleTypeKey, ScheduleTypeRegistry};
pub use schedules::{Schedule, ScheduleCompact, ScheduleConstant, ScheduleTypeLimits};
pub use site::{
    SiteGroundTemperatureBuildingSurface, SiteGroundTemperatureDeep, SiteGroundTemperatureShallow,
    SiteWaterMainsTemperature,
};
pub use thermal_zone::ThermalZone;
pub use unitary_system::AirLoopHVACUnitarySystem;
pub use version::Version;

use crate::idd::{Dialect, IddFile, IddObject, IddObjectType, AUTOCALCULATE, AUTOSIZE};
use crate::workspace::{read_workspace, write_workspace, FieldValue, Handle, ParseError, Workspace, WorkspaceObject};
use macros::model_object_enum;
use std::sync::Arc;
use tracing::debug;

/// Error raised by model operations that cannot degrade to `bool` or `Option`
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("{object_type} '{name}' has no {relationship}")]
    MissingRequiredObject {
        object_type: IddObjectType,
        name: String,
        relationship: &'static str,
    },
    #[error("object {0} is not part of this model")]
    ObjectNotFound(Handle),
    #[error("expected a {expected:?} workspace, found {found:?}")]
    WrongDialect { expected: Dialect, found: Dialect },
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

model_object_enum! {
    /// Any facade, dispatched by record type
    AnyModelObject {
        Version(Version),
        ModelObjectList(ModelObjectList),
        ScheduleTypeLimits(ScheduleTypeLimits),
        ScheduleCompact(ScheduleCompact),
        ScheduleConstant(ScheduleConstant),
        CurveQuadratic(CurveQuadratic),
        CurveCubic(CurveCubic),
        CurveBiquadratic(CurveBiquadratic),
        SiteWaterMainsTemperature(SiteWaterMainsTemperature),
        SiteGroundTemperatureDeep(SiteGroundTemperatureDeep),
        SiteGroundTemperatureShallow(SiteGroundTemperatureShallow),
        SiteGroundTemperatureBuildingSurface(SiteGroundTemperatureBuildingSurface),
        ThermalZone(ThermalZone),
        PlantLoop(PlantLoop),
        FanConstantVolume(FanConstantVolume),
        FanOnOff(FanOnOff),
        CoilCoolingDXVariableSpeed(CoilCoolingDXVariableSpeed),
        CoilCoolingDXVariableSpeedSpeedData(CoilCoolingDXVariableSpeedSpeedData),
        CoilHeatingElectric(CoilHeatingElectric),
        CoilHeatingWater(CoilHeatingWater),
        CoilHeatingDesuperheater(CoilHeatingDesuperheater),
        AirLoopHVACUnitarySystem(AirLoopHVACUnitarySystem),
    }
}

/// Internal-schema workspace plus the registries its facades consult
#[derive(Debug, Clone)]
pub struct Model {
    workspace: Workspace,
    schedule_types: Arc<ScheduleTypeRegistry>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Empty model over the built-in internal schema
    pub fn new() -> Self {
        Self {
            workspace: Workspace::openstudio(),
            schedule_types: ScheduleTypeRegistry::builtin(),
        }
    }

    /// Adopt an existing internal-dialect workspace
    pub fn from_workspace(workspace: Workspace) -> Result<Self, ModelError> {
        if workspace.dialect() != Dialect::OpenStudio {
            return Err(ModelError::WrongDialect {
                expected: Dialect::OpenStudio,
                found: workspace.dialect(),
            });
        }
        Ok(Self {
            workspace,
            schedule_types: ScheduleTypeRegistry::builtin(),
        })
    }

    /// Replace the schedule type table consulted by schedule setters
    pub fn with_schedule_types(mut self, schedule_types: Arc<ScheduleTypeRegistry>) -> Self {
        self.schedule_types = schedule_types;
        self
    }

    /// Parse internal-dialect text
    pub fn load_str(text: &str) -> Result<Self, ModelError> {
        let workspace = read_workspace(text, IddFile::openstudio())?;
        Self::from_workspace(workspace)
    }

    /// Render as internal-dialect text
    pub fn to_osm_string(&self) -> String {
        write_workspace(&self.workspace)
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Raw record access, bypassing facade policies
    pub fn workspace_mut(&mut self) -> &mut Workspace {
        &mut self.workspace
    }

    pub fn into_workspace(self) -> Workspace {
        self.workspace
    }

    pub fn schedule_types(&self) -> &ScheduleTypeRegistry {
        &self.schedule_types
    }

    pub fn num_objects(&self) -> usize {
        self.workspace.num_objects()
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.workspace.contains(handle)
    }

    pub fn object_type(&self, handle: Handle) -> Option<IddObjectType> {
        self.workspace.object_type(handle)
    }

    pub fn name(&self, handle: Handle) -> Option<String> {
        self.workspace.name(handle)
    }

    /// Typed view of a handle, `None` when absent or of another type
    pub fn get<T: ObjectCast>(&self, handle: Handle) -> Option<T> {
        T::cast(self, handle)
    }

    /// Every object of one facade type, in insertion order
    pub fn objects<T: ConcreteModelObject>(&self) -> Vec<T> {
        self.workspace
            .objects_by_type(T::IDD_OBJECT_TYPE)
            .into_iter()
            .map(T::wrap)
            .collect()
    }

    pub fn object_by_name<T: ConcreteModelObject>(&self, name: &str) -> Option<T> {
        self.workspace
            .object_by_name(T::IDD_OBJECT_TYPE, name)
            .map(T::wrap)
    }

    /// The single instance of a unique type, created on first access
    pub fn unique<T: UniqueModelObject>(&mut self) -> T {
        match self.optional_unique::<T>() {
            Some(object) => object,
            None => T::wrap(self.add_record(T::IDD_OBJECT_TYPE)),
        }
    }

    pub fn optional_unique<T: UniqueModelObject>(&self) -> Option<T> {
        self.workspace
            .objects_by_type(T::IDD_OBJECT_TYPE)
            .first()
            .map(|h| T::wrap(*h))
    }

    pub fn model_object(&self, handle: Handle) -> Option<AnyModelObject> {
        AnyModelObject::cast(self, handle)
    }

    /// Every object as a dispatchable facade, in insertion order
    pub fn model_objects(&self) -> Vec<AnyModelObject> {
        self.workspace
            .handles()
            .iter()
            .filter_map(|h| self.model_object(*h))
            .collect()
    }

    /// Remove an object and everything it owns
    pub fn remove_model_object(&mut self, handle: Handle) -> Vec<WorkspaceObject> {
        match self.model_object(handle) {
            Some(object) => object.remove(self),
            None => self.remove_record(handle),
        }
    }

    /// Clone an object and everything it owns within this model
    pub fn clone_model_object(&mut self, handle: Handle) -> Option<AnyModelObject> {
        let object = self.model_object(handle)?;
        Some(object.clone_object(self))
    }

    /// Keys of every field in the model currently pointing at `schedule`
    pub fn schedule_type_keys(&self, schedule: Handle) -> Vec<ScheduleTypeKey> {
        let mut keys = Vec::new();
        for source in self.workspace.sources(schedule) {
            if let Some(object) = self.model_object(source) {
                for key in object.schedule_type_keys(self, schedule) {
                    if !keys.contains(&key) {
                        keys.push(key);
                    }
                }
            }
        }
        keys
    }

    /// Resolve a reference field to a typed target
    pub fn target<T: ObjectCast>(&self, handle: Handle, index: usize) -> Option<T> {
        let target = self.workspace.get_target(handle, index)?;
        T::cast(self, target)
    }

    /// Insert a record of an internal type
    ///
    /// # Panics
    ///
    /// Panics if `object_type` is not part of the internal schema or is a
    /// unique type that already has an instance; both indicate a facade bug.
    pub(crate) fn add_record(&mut self, object_type: IddObjectType) -> Handle {
        match self.workspace.add_object(object_type) {
            Some(handle) => handle,
            None => panic!("cannot add {object_type} to this model"),
        }
    }

    pub(crate) fn remove_record(&mut self, handle: Handle) -> Vec<WorkspaceObject> {
        self.workspace.remove_object(handle).into_iter().collect()
    }

    fn missing_value(&self, handle: Handle, index: usize) -> ! {
        let field = self
            .workspace
            .idd_object(handle)
            .and_then(|o| o.field(index))
            .map_or("<unknown>", |f| f.name);
        match self.object_type(handle) {
            Some(object_type) => panic!("{object_type} {handle} has no value for '{field}'"),
            None => panic!("object {handle} is not part of this model"),
        }
    }

    /// Value of a field the schema guarantees through a default
    ///
    /// # Panics
    ///
    /// Panics when the field is blank and has no default.
    pub(crate) fn required_double(&self, handle: Handle, index: usize) -> f64 {
        match self.workspace.get_double(handle, index) {
            Some(value) => value,
            None => self.missing_value(handle, index),
        }
    }

    /// # Panics
    ///
    /// Panics when the field is blank and has no default.
    pub(crate) fn required_string(&self, handle: Handle, index: usize) -> String {
        match self.workspace.get_string(handle, index) {
            Some(value) => value,
            None => self.missing_value(handle, index),
        }
    }

    /// # Panics
    ///
    /// Panics when the field is blank and has no default.
    pub(crate) fn required_int(&self, handle: Handle, index: usize) -> i64 {
        match self.workspace.get_int(handle, index) {
            Some(value) => value,
            None => self.missing_value(handle, index),
        }
    }

    pub(crate) fn optional_double(&self, handle: Handle, index: usize) -> Option<f64> {
        self.workspace.get_double(handle, index)
    }

    pub(crate) fn optional_string(&self, handle: Handle, index: usize) -> Option<String> {
        self.workspace.get_string(handle, index)
    }

    pub(crate) fn is_defaulted(&self, handle: Handle, index: usize) -> bool {
        self.workspace.is_field_empty(handle, index)
    }

    pub(crate) fn reset(&mut self, handle: Handle, index: usize) {
        self.workspace.set_blank(handle, index);
    }

    pub(crate) fn set_double(&mut self, handle: Handle, index: usize, value: f64) -> bool {
        self.workspace.set_double(handle, index, value)
    }

    /// Set when present, reset when absent
    pub(crate) fn set_optional_double(&mut self, handle: Handle, index: usize, value: Option<f64>) -> bool {
        match value {
            Some(value) => self.set_double(handle, index, value),
            None => {
                self.reset(handle, index);
                true
            }
        }
    }

    pub(crate) fn set_string(&mut self, handle: Handle, index: usize, value: &str) -> bool {
        self.workspace.set_string(handle, index, value)
    }

    pub(crate) fn set_int(&mut self, handle: Handle, index: usize, value: i64) -> bool {
        self.workspace.set_int(handle, index, value)
    }

    /// `Yes`/`No` choice field
    pub(crate) fn required_bool(&self, handle: Handle, index: usize) -> bool {
        self.required_string(handle, index).eq_ignore_ascii_case("Yes")
    }

    pub(crate) fn set_bool(&mut self, handle: Handle, index: usize, value: bool) -> bool {
        self.set_string(handle, index, if value { "Yes" } else { "No" })
    }

    fn effective_text_is(&self, handle: Handle, index: usize, sentinel: &str) -> bool {
        self.workspace
            .get_string(handle, index)
            .is_some_and(|s| s.eq_ignore_ascii_case(sentinel))
    }

    pub(crate) fn is_autosized(&self, handle: Handle, index: usize) -> bool {
        self.effective_text_is(handle, index, AUTOSIZE)
    }

    pub(crate) fn autosize(&mut self, handle: Handle, index: usize) -> bool {
        self.set_string(handle, index, AUTOSIZE)
    }

    pub(crate) fn is_autocalculated(&self, handle: Handle, index: usize) -> bool {
        self.effective_text_is(handle, index, AUTOCALCULATE)
    }

    pub(crate) fn autocalculate(&mut self, handle: Handle, index: usize) -> bool {
        self.set_string(handle, index, AUTOCALCULATE)
    }

    pub(crate) fn set_target(&mut self, handle: Handle, index: usize, target: Handle) -> bool {
        self.workspace.set_pointer(handle, index, target)
    }

    pub(crate) fn reset_target(&mut self, handle: Handle, index: usize) {
        self.workspace.set_blank(handle, index);
    }

    /// Point a schedule field at `schedule` after checking its type limits
    ///
    /// A schedule without limits is assigned compatible ones; a schedule whose
    /// limits conflict with `key` is rejected.
    pub(crate) fn set_schedule(
        &mut self,
        handle: Handle,
        index: usize,
        key: ScheduleTypeKey,
        schedule: Schedule,
    ) -> bool {
        if !self.contains(schedule.handle()) {
            return false;
        }
        if !schedule_type_registry::check_or_assign_schedule_type_limits(self, key, schedule) {
            debug!(%handle, index, "schedule rejected by type limits");
            return false;
        }
        self.set_target(handle, index, schedule.handle())
    }

    /// Keys of the listed schedule fields of `handle` that point at `schedule`
    pub(crate) fn keys_for_fields(
        &self,
        handle: Handle,
        schedule: Handle,
        fields: &[(usize, ScheduleTypeKey)],
    ) -> Vec<ScheduleTypeKey> {
        fields
            .iter()
            .filter(|(index, _)| self.workspace.get_target(handle, *index) == Some(schedule))
            .map(|(_, key)| *key)
            .collect()
    }

    /// Copy one record from `source` under a fresh handle
    ///
    /// Fields listed in `owned` are left blank for the caller to fill with
    /// its own clones. References already resolvable here are kept, resource
    /// targets (schedules, limits, curves) are carried over under their
    /// original handle, and any other reference is blanked. A unique type
    /// overwrites the instance this model already has.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is not part of `source`.
    pub(crate) fn clone_record(&mut self, source: &Model, handle: Handle, owned: &[usize]) -> Handle {
        let Some(object_type) = source.object_type(handle) else {
            panic!("cannot clone {handle}: not part of the source model");
        };
        let unique = source
            .workspace
            .idd()
            .object(object_type)
            .is_some_and(IddObject::is_unique);
        let existing = if unique {
            self.workspace.objects_by_type(object_type).first().copied()
        } else {
            None
        };
        let copy = match existing {
            Some(existing) => {
                self.workspace.clear_extensible_groups(existing);
                existing
            }
            None => self.add_record(object_type),
        };
        self.copy_fields(source, handle, copy, owned);
        copy
    }

    fn copy_fields(&mut self, source: &Model, from: Handle, to: Handle, owned: &[usize]) {
        let Some(record) = source.workspace.object(from) else {
            return;
        };
        let name_index = source.workspace.idd_object(from).and_then(IddObject::name_index);
        let values: Vec<FieldValue> = record.values().cloned().collect();
        for (index, value) in values.into_iter().enumerate() {
            if Some(index) == name_index {
                continue;
            }
            let value = match value {
                _ if owned.contains(&index) => FieldValue::Blank,
                FieldValue::Pointer(target) => self
                    .copy_reference(source, target)
                    .map_or(FieldValue::Blank, FieldValue::Pointer),
                other => other,
            };
            self.workspace.set_value(to, index, value);
        }
        if let Some(name) = source.name(from) {
            self.workspace.set_name(to, &name);
        }
    }

    /// Deep-clone the object `owner` references at `index` and point `copy` at the clone
    pub(crate) fn clone_child(&mut self, source: &Model, owner: Handle, copy: Handle, index: usize) -> bool {
        let Some(child) = source.target::<AnyModelObject>(owner, index) else {
            return false;
        };
        let child_copy = child.clone_into_model(source, self);
        self.set_target(copy, index, child_copy.handle())
    }

    /// Remove each former child that nothing references any more
    pub(crate) fn remove_unused(&mut self, children: Vec<Handle>) -> Vec<WorkspaceObject> {
        let mut removed = Vec::new();
        for child in children {
            if self.contains(child) && self.workspace.sources(child).is_empty() {
                removed.extend(self.remove_model_object(child));
            }
        }
        removed
    }

    fn copy_reference(&mut self, source: &Model, target: Handle) -> Option<Handle> {
        if self.contains(target) {
            return Some(target);
        }
        let object_type = source.object_type(target)?;
        if !source.workspace.idd().object(object_type)?.is_resource() {
            return None;
        }
        self.workspace.add_object_with_handle(object_type, target)?;
        self.copy_fields(source, target, target, &[]);
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_is_get_or_create() {
        let mut model = Model::new();
        assert!(model.optional_unique::<SiteGroundTemperatureDeep>().is_none());
        let first = model.unique::<SiteGroundTemperatureDeep>();
        let second = model.unique::<SiteGroundTemperatureDeep>();
        assert_eq!(first, second);
        assert_eq!(model.objects::<SiteGroundTemperatureDeep>().len(), 1);
    }

    #[test]
    fn test_get_casts_by_type() {
        let mut model = Model::new();
        let fan = FanOnOff::new(&mut model);
        assert_eq!(model.get::<FanOnOff>(fan.handle()), Some(fan));
        assert!(model.get::<FanConstantVolume>(fan.handle()).is_none());
        assert_eq!(model.get::<Fan>(fan.handle()), Some(Fan::OnOff(fan)));
        assert!(matches!(
            model.model_object(fan.handle()),
            Some(AnyModelObject::FanOnOff(_))
        ));
    }

    #[test]
    fn test_wrong_dialect_rejected() {
        let err = Model::from_workspace(Workspace::energyplus()).unwrap_err();
        assert!(matches!(err, ModelError::WrongDialect { .. }));
    }

    #[test]
    fn test_clone_record_carries_resources_across_models() {
        let mut source = Model::new();
        let schedule = ScheduleConstant::new(&mut source);
        let coil = CoilHeatingElectric::new(&mut source);
        assert!(coil.set_availability_schedule(&mut source, schedule.into()));

        let mut target = Model::new();
        let copy = coil.clone_into_model(&source, &mut target);
        assert_ne!(copy.handle(), coil.handle());
        assert_eq!(
            copy.availability_schedule(&target).map(|s| s.handle()),
            Some(schedule.handle())
        );
        assert!(target.contains(schedule.handle()));
    }

    #[test]
    fn test_osm_text_round_trip() {
        let mut model = Model::new();
        let zone = ThermalZone::new(&mut model);
        zone.set_name(&mut model, "Office");
        let back = Model::load_str(&model.to_osm_string()).unwrap();
        assert_eq!(back.get::<ThermalZone>(zone.handle()).and_then(|z| z.name(&back)).as_deref(), Some("Office"));
    }
}
