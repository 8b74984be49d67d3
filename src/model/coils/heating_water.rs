//! Hot water heating coil
//!
//! The coil's water side is its membership in a [`PlantLoop`] demand list;
//! the coil record itself holds no reference to the loop.

use crate::model::macros::declare_model_object;
use crate::model::{ConcreteModelObject, Model, ModelObject, PlantLoop, Schedule, ScheduleTypeKey};
use crate::workspace::{Handle, WorkspaceObject};

mod fields {
    pub const AVAILABILITY_SCHEDULE_NAME: usize = 2;
    pub const U_FACTOR_TIMES_AREA_VALUE: usize = 3;
    pub const MAXIMUM_WATER_FLOW_RATE: usize = 4;
    pub const PERFORMANCE_INPUT_METHOD: usize = 5;
    pub const RATED_CAPACITY: usize = 6;
    pub const RATED_INLET_WATER_TEMPERATURE: usize = 7;
    pub const RATED_INLET_AIR_TEMPERATURE: usize = 8;
    pub const RATED_OUTLET_WATER_TEMPERATURE: usize = 9;
    pub const RATED_OUTLET_AIR_TEMPERATURE: usize = 10;
    pub const RATED_RATIO_FOR_AIR_AND_WATER_CONVECTION: usize = 11;
}

const AVAILABILITY: ScheduleTypeKey = ScheduleTypeKey::new("CoilHeatingWater", "Availability");

declare_model_object! {
    CoilHeatingWater => OsCoilHeatingWater
}

impl CoilHeatingWater {
    pub fn new(model: &mut Model) -> Self {
        Self(model.add_record(Self::IDD_OBJECT_TYPE))
    }

    /// Loop whose demand side serves this coil
    pub fn plant_loop(&self, model: &Model) -> Option<PlantLoop> {
        PlantLoop::for_demand_component(model, *self)
    }

    /// Detach from the serving loop, if any
    pub fn remove_from_plant_loop(&self, model: &mut Model) -> bool {
        self.plant_loop(model)
            .is_some_and(|plant_loop| plant_loop.remove_demand_branch_with_component(model, *self))
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

    pub fn u_factor_times_area_value(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, fields::U_FACTOR_TIMES_AREA_VALUE)
    }

    pub fn is_u_factor_times_area_value_autosized(&self, model: &Model) -> bool {
        model.is_autosized(self.0, fields::U_FACTOR_TIMES_AREA_VALUE)
    }

    pub fn set_u_factor_times_area_value(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::U_FACTOR_TIMES_AREA_VALUE, value)
    }

    pub fn autosize_u_factor_times_area_value(&self, model: &mut Model) {
        model.autosize(self.0, fields::U_FACTOR_TIMES_AREA_VALUE);
    }

    pub fn maximum_water_flow_rate(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, fields::MAXIMUM_WATER_FLOW_RATE)
    }

    pub fn is_maximum_water_flow_rate_autosized(&self, model: &Model) -> bool {
        model.is_autosized(self.0, fields::MAXIMUM_WATER_FLOW_RATE)
    }

    pub fn set_maximum_water_flow_rate(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::MAXIMUM_WATER_FLOW_RATE, value)
    }

    pub fn autosize_maximum_water_flow_rate(&self, model: &mut Model) {
        model.autosize(self.0, fields::MAXIMUM_WATER_FLOW_RATE);
    }

    pub fn performance_input_method(&self, model: &Model) -> String {
        model.required_string(self.0, fields::PERFORMANCE_INPUT_METHOD)
    }

    pub fn set_performance_input_method(&self, model: &mut Model, method: &str) -> bool {
        model.set_string(self.0, fields::PERFORMANCE_INPUT_METHOD, method)
    }

    pub fn rated_capacity(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, fields::RATED_CAPACITY)
    }

    pub fn is_rated_capacity_autosized(&self, model: &Model) -> bool {
        model.is_autosized(self.0, fields::RATED_CAPACITY)
    }

    pub fn set_rated_capacity(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::RATED_CAPACITY, value)
    }

    pub fn autosize_rated_capacity(&self, model: &mut Model) {
        model.autosize(self.0, fields::RATED_CAPACITY);
    }

    pub fn rated_inlet_water_temperature(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::RATED_INLET_WATER_TEMPERATURE)
    }

    pub fn set_rated_inlet_water_temperature(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::RATED_INLET_WATER_TEMPERATURE, value)
    }

    pub fn rated_inlet_air_temperature(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::RATED_INLET_AIR_TEMPERATURE)
    }

    pub fn set_rated_inlet_air_temperature(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::RATED_INLET_AIR_TEMPERATURE, value)
    }

    pub fn rated_outlet_water_temperature(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::RATED_OUTLET_WATER_TEMPERATURE)
    }

    pub fn set_rated_outlet_water_temperature(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::RATED_OUTLET_WATER_TEMPERATURE, value)
    }

    pub fn rated_outlet_air_temperature(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::RATED_OUTLET_AIR_TEMPERATURE)
    }

    pub fn set_rated_outlet_air_temperature(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::RATED_OUTLET_AIR_TEMPERATURE, value)
    }

    pub fn rated_ratio_for_air_and_water_convection(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::RATED_RATIO_FOR_AIR_AND_WATER_CONVECTION)
    }

    pub fn set_rated_ratio_for_air_and_water_convection(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::RATED_RATIO_FOR_AIR_AND_WATER_CONVECTION, value)
    }
}

impl ModelObject for CoilHeatingWater {
    fn schedule_type_keys(&self, model: &Model, schedule: Handle) -> Vec<ScheduleTypeKey> {
        model.keys_for_fields(self.0, schedule, &[(fields::AVAILABILITY_SCHEDULE_NAME, AVAILABILITY)])
    }

    fn remove(&self, model: &mut Model) -> Vec<WorkspaceObject> {
        self.remove_from_plant_loop(model);
        model.remove_record(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelObjectList;

    #[test]
    fn test_defaults() {
        let mut model = Model::new();
        let coil = CoilHeatingWater::new(&mut model);
        assert!(coil.is_u_factor_times_area_value_autosized(&model));
        assert_eq!(coil.performance_input_method(&model), "UFactorTimesAreaAndDesignWaterFlowRate");
        assert_eq!(coil.rated_inlet_water_temperature(&model), 82.2);
        assert!(coil.set_performance_input_method(&mut model, "nominalcapacity"));
        assert_eq!(coil.performance_input_method(&model), "NominalCapacity");
        assert!(!coil.set_rated_ratio_for_air_and_water_convection(&mut model, 0.0));
    }

    #[test]
    fn test_plant_loop_membership() {
        let mut model = Model::new();
        let coil = CoilHeatingWater::new(&mut model);
        assert!(coil.plant_loop(&model).is_none());
        assert!(!coil.remove_from_plant_loop(&mut model));

        let plant_loop = PlantLoop::new(&mut model);
        assert!(plant_loop.add_demand_branch_for_component(&mut model, coil));
        assert_eq!(coil.plant_loop(&model), Some(plant_loop));
        assert!(coil.remove_from_plant_loop(&mut model));
        assert!(coil.plant_loop(&model).is_none());
    }

    #[test]
    fn test_remove_detaches_from_loop() {
        let mut model = Model::new();
        let coil = CoilHeatingWater::new(&mut model);
        let plant_loop = PlantLoop::new(&mut model);
        plant_loop.add_demand_branch_for_component(&mut model, coil);

        coil.remove(&mut model);
        assert!(plant_loop.demand_components(&model).is_empty());
        let list = model.objects::<ModelObjectList>()[0];
        assert_eq!(list.size(&model), 0);
    }

    #[test]
    fn test_clone_is_not_connected() {
        let mut model = Model::new();
        let coil = CoilHeatingWater::new(&mut model);
        let plant_loop = PlantLoop::new(&mut model);
        plant_loop.add_demand_branch_for_component(&mut model, coil);

        let copy = coil.clone_object(&mut model);
        assert!(copy.plant_loop(&model).is_none());
        assert_eq!(coil.plant_loop(&model), Some(plant_loop));
    }
}
