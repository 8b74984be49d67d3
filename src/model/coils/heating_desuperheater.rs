//! Desuperheater heating coil
//!
//! Recovers condenser heat from another coil. The heating source is a
//! typed reference to one of the [`DesuperheaterSource`] coils.

use super::DesuperheaterSource;
use crate::model::macros::declare_model_object;
use crate::model::{ConcreteModelObject, Model, ModelObject, ObjectHandle, Schedule, ScheduleTypeKey};
use crate::workspace::Handle;

mod fields {
    pub const AVAILABILITY_SCHEDULE_NAME: usize = 2;
    pub const HEAT_RECLAIM_RECOVERY_EFFICIENCY: usize = 3;
    pub const HEATING_SOURCE_NAME: usize = 4;
    pub const PARASITIC_ELECTRIC_LOAD: usize = 5;
}

const AVAILABILITY: ScheduleTypeKey = ScheduleTypeKey::new("CoilHeatingDesuperheater", "Availability");

declare_model_object! {
    /// Heating coil reclaiming condenser heat from a cooling coil
    CoilHeatingDesuperheater => OsCoilHeatingDesuperheater
}

impl CoilHeatingDesuperheater {
    pub fn new(model: &mut Model) -> Self {
        Self(model.add_record(Self::IDD_OBJECT_TYPE))
    }

    pub fn availability_schedule(&self, model: &Model) -> Option<Schedule> {
        model.target(self.0, fields::AVAILABILITY_SCHEDULE_NAME)
    }

    pub fn set_availability_schedule(&self, model: &mut Model, schedule: Schedule) -> bool {
        model.set_schedule(self.0, fields::AVAILABILITY_SCHEDULE_NAME, AVAILABILITY, schedule)
    }

    pub fn reset_availability_schedule(&self, model: &mut Model) {
        model.reset_target(self.0, fields::AVAILABILITY_SCHEDULE_NAME);
    }

    pub fn heat_reclaim_recovery_efficiency(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::HEAT_RECLAIM_RECOVERY_EFFICIENCY)
    }

    pub fn is_heat_reclaim_recovery_efficiency_defaulted(&self, model: &Model) -> bool {
        model.is_defaulted(self.0, fields::HEAT_RECLAIM_RECOVERY_EFFICIENCY)
    }

    /// Efficiencies above 0.9 are rejected
    pub fn set_heat_reclaim_recovery_efficiency(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::HEAT_RECLAIM_RECOVERY_EFFICIENCY, value)
    }

    pub fn reset_heat_reclaim_recovery_efficiency(&self, model: &mut Model) {
        model.reset(self.0, fields::HEAT_RECLAIM_RECOVERY_EFFICIENCY);
    }

    pub fn heating_source(&self, model: &Model) -> Option<DesuperheaterSource> {
        model.target(self.0, fields::HEATING_SOURCE_NAME)
    }

    pub fn set_heating_source(&self, model: &mut Model, source: DesuperheaterSource) -> bool {
        model.set_target(self.0, fields::HEATING_SOURCE_NAME, source.handle())
    }

    pub fn reset_heating_source(&self, model: &mut Model) {
        model.reset_target(self.0, fields::HEATING_SOURCE_NAME);
    }

    pub fn parasitic_electric_load(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::PARASITIC_ELECTRIC_LOAD)
    }

    pub fn is_parasitic_electric_load_defaulted(&self, model: &Model) -> bool {
        model.is_defaulted(self.0, fields::PARASITIC_ELECTRIC_LOAD)
    }

    pub fn set_parasitic_electric_load(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::PARASITIC_ELECTRIC_LOAD, value)
    }

    pub fn reset_parasitic_electric_load(&self, model: &mut Model) {
        model.reset(self.0, fields::PARASITIC_ELECTRIC_LOAD);
    }
}

impl ModelObject for CoilHeatingDesuperheater {
    fn schedule_type_keys(&self, model: &Model, schedule: Handle) -> Vec<ScheduleTypeKey> {
        model.keys_for_fields(self.0, schedule, &[(fields::AVAILABILITY_SCHEDULE_NAME, AVAILABILITY)])
    }

    /// A source reclaims into one desuperheater, so the copy starts without one
    fn clone_into_model(&self, source: &Model, target: &mut Model) -> Self {
        Self(target.clone_record(source, self.0, &[fields::HEATING_SOURCE_NAME]))
    }
}
