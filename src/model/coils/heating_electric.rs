use crate::model::macros::declare_model_object;
use crate::model::{ConcreteModelObject, Model, ModelObject, Schedule, ScheduleTypeKey};
use crate::workspace::Handle;

mod fields {
    pub const AVAILABILITY_SCHEDULE_NAME: usize = 2;
    pub const EFFICIENCY: usize = 3;
    pub const NOMINAL_CAPACITY: usize = 4;
}

const AVAILABILITY: ScheduleTypeKey = ScheduleTypeKey::new("CoilHeatingElectric", "Availability");

declare_model_object! {
    /// Electric resistance heating coil
    CoilHeatingElectric => OsCoilHeatingElectric
}

impl CoilHeatingElectric {
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

    pub fn efficiency(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::EFFICIENCY)
    }

    pub fn set_efficiency(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::EFFICIENCY, value)
    }

    /// `None` while autosized
    pub fn nominal_capacity(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, fields::NOMINAL_CAPACITY)
    }

    pub fn is_nominal_capacity_autosized(&self, model: &Model) -> bool {
        model.is_autosized(self.0, fields::NOMINAL_CAPACITY)
    }

    pub fn set_nominal_capacity(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::NOMINAL_CAPACITY, value)
    }

    pub fn autosize_nominal_capacity(&self, model: &mut Model) {
        model.autosize(self.0, fields::NOMINAL_CAPACITY);
    }
}

impl ModelObject for CoilHeatingElectric {
    fn schedule_type_keys(&self, model: &Model, schedule: Handle) -> Vec<ScheduleTypeKey> {
        model.keys_for_fields(self.0, schedule, &[(fields::AVAILABILITY_SCHEDULE_NAME, AVAILABILITY)])
    }
}
