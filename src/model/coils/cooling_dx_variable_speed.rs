//! Variable-speed DX cooling coil and its per-speed performance data
//!
//! The coil keeps its speeds in a private [`ModelObjectList`], lowest speed
//! first. Speeds, the list and the part load curve are owned: they are
//! cloned with the coil and removed with it.

use crate::model::curves::{Curve, CurveBiquadratic, CurveQuadratic};
use crate::model::macros::declare_model_object;
use crate::model::{
    ConcreteModelObject, Model, ModelError, ModelObject, ModelObjectList, ObjectHandle, Schedule,
    ScheduleTypeKey,
};
use crate::workspace::{Handle, WorkspaceObject};

mod fields {
    pub const NOMINAL_SPEED_LEVEL: usize = 2;
    pub const GROSS_RATED_TOTAL_COOLING_CAPACITY: usize = 3;
    pub const RATED_AIR_FLOW_RATE: usize = 4;
    pub const NOMINAL_TIME_FOR_CONDENSATE_REMOVAL_TO_BEGIN: usize = 5;
    pub const RATIO_OF_INITIAL_MOISTURE_EVAPORATION_RATE: usize = 6;
    pub const ENERGY_PART_LOAD_FRACTION_CURVE_NAME: usize = 7;
    pub const CONDENSER_TYPE: usize = 8;
    pub const EVAPORATIVE_CONDENSER_PUMP_RATED_POWER_CONSUMPTION: usize = 9;
    pub const CRANKCASE_HEATER_CAPACITY: usize = 10;
    pub const MAXIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_CRANKCASE_HEATER: usize = 11;
    pub const BASIN_HEATER_CAPACITY: usize = 12;
    pub const BASIN_HEATER_SETPOINT_TEMPERATURE: usize = 13;
    pub const BASIN_HEATER_OPERATING_SCHEDULE_NAME: usize = 14;
    pub const SPEED_DATA_LIST: usize = 15;
}

const BASIN_HEATER_OPERATING: ScheduleTypeKey =
    ScheduleTypeKey::new("CoilCoolingDXVariableSpeed", "Basin Heater Operating");

declare_model_object! {
    /// DX cooling coil with up to ten discrete speeds
    CoilCoolingDXVariableSpeed => OsCoilCoolingDXVariableSpeed
}

impl CoilCoolingDXVariableSpeed {
    /// New coil with a default part load curve and no speeds
    pub fn new(model: &mut Model) -> Self {
        let curve = CurveQuadratic::new(model);
        curve.set_coefficients(model, [0.85, 0.15, 0.0]);
        curve.set_minimum_value_of_x(model, Some(0.0));
        curve.set_maximum_value_of_x(model, Some(1.0));
        Self::with_part_load_fraction_curve(model, curve.into())
    }

    /// New coil using an existing part load curve
    pub fn with_part_load_fraction_curve(model: &mut Model, curve: Curve) -> Self {
        let coil = Self(model.add_record(Self::IDD_OBJECT_TYPE));
        coil.set_nominal_speed_level(model, 1);
        coil.autosize_gross_rated_total_cooling_capacity_at_selected_nominal_speed_level(model);
        coil.autosize_rated_air_flow_rate_at_selected_nominal_speed_level(model);
        model.set_double(coil.0, fields::NOMINAL_TIME_FOR_CONDENSATE_REMOVAL_TO_BEGIN, 0.0);
        model.set_double(coil.0, fields::RATIO_OF_INITIAL_MOISTURE_EVAPORATION_RATE, 0.0);
        coil.set_energy_part_load_fraction_curve(model, curve);
        coil.set_condenser_type(model, "AirCooled");
        model.set_double(coil.0, fields::EVAPORATIVE_CONDENSER_PUMP_RATED_POWER_CONSUMPTION, 0.0);
        coil.set_crankcase_heater_capacity(model, 0.0);
        coil.set_maximum_outdoor_dry_bulb_temperature_for_crankcase_heater_operation(model, 10.0);
        coil.set_basin_heater_capacity(model, 0.0);
        coil.set_basin_heater_setpoint_temperature(model, 2.0);
        coil.create_speed_data_list(model);
        coil
    }

    fn create_speed_data_list(&self, model: &mut Model) -> ModelObjectList {
        let list = ModelObjectList::new(model);
        if let Some(name) = self.name(model) {
            list.set_name(model, &format!("{name} Speed Data List"));
        }
        model.set_target(self.0, fields::SPEED_DATA_LIST, list.handle());
        list
    }

    fn speed_data_list(&self, model: &Model) -> Option<ModelObjectList> {
        model.target(self.0, fields::SPEED_DATA_LIST)
    }

    pub fn nominal_speed_level(&self, model: &Model) -> i64 {
        model.required_int(self.0, fields::NOMINAL_SPEED_LEVEL)
    }

    pub fn set_nominal_speed_level(&self, model: &mut Model, level: i64) -> bool {
        model.set_int(self.0, fields::NOMINAL_SPEED_LEVEL, level)
    }

    pub fn gross_rated_total_cooling_capacity_at_selected_nominal_speed_level(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, fields::GROSS_RATED_TOTAL_COOLING_CAPACITY)
    }

    pub fn is_gross_rated_total_cooling_capacity_at_selected_nominal_speed_level_autosized(&self, model: &Model) -> bool {
        model.is_autosized(self.0, fields::GROSS_RATED_TOTAL_COOLING_CAPACITY)
    }

    pub fn set_gross_rated_total_cooling_capacity_at_selected_nominal_speed_level(
        &self,
        model: &mut Model,
        value: f64,
    ) -> bool {
        model.set_double(self.0, fields::GROSS_RATED_TOTAL_COOLING_CAPACITY, value)
    }

    pub fn autosize_gross_rated_total_cooling_capacity_at_selected_nominal_speed_level(&self, model: &mut Model) {
        model.autosize(self.0, fields::GROSS_RATED_TOTAL_COOLING_CAPACITY);
    }

    pub fn rated_air_flow_rate_at_selected_nominal_speed_level(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, fields::RATED_AIR_FLOW_RATE)
    }

    pub fn is_rated_air_flow_rate_at_selected_nominal_speed_level_autosized(&self, model: &Model) -> bool {
        model.is_autosized(self.0, fields::RATED_AIR_FLOW_RATE)
    }

    pub fn set_rated_air_flow_rate_at_selected_nominal_speed_level(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::RATED_AIR_FLOW_RATE, value)
    }

    pub fn autosize_rated_air_flow_rate_at_selected_nominal_speed_level(&self, model: &mut Model) {
        model.autosize(self.0, fields::RATED_AIR_FLOW_RATE);
    }

    pub fn nominal_time_for_condensate_to_begin_leaving_the_coil(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::NOMINAL_TIME_FOR_CONDENSATE_REMOVAL_TO_BEGIN)
    }

    pub fn set_nominal_time_for_condensate_to_begin_leaving_the_coil(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::NOMINAL_TIME_FOR_CONDENSATE_REMOVAL_TO_BEGIN, value)
    }

    pub fn initial_moisture_evaporation_rate_divided_by_steady_state_ac_latent_capacity(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::RATIO_OF_INITIAL_MOISTURE_EVAPORATION_RATE)
    }

    pub fn set_initial_moisture_evaporation_rate_divided_by_steady_state_ac_latent_capacity(
        &self,
        model: &mut Model,
        value: f64,
    ) -> bool {
        model.set_double(self.0, fields::RATIO_OF_INITIAL_MOISTURE_EVAPORATION_RATE, value)
    }

    /// The part load curve every coil must carry
    pub fn energy_part_load_fraction_curve(&self, model: &Model) -> Result<Curve, ModelError> {
        model
            .target(self.0, fields::ENERGY_PART_LOAD_FRACTION_CURVE_NAME)
            .ok_or_else(|| ModelError::MissingRequiredObject {
                object_type: Self::IDD_OBJECT_TYPE,
                name: self.name(model).unwrap_or_default(),
                relationship: "Energy Part Load Fraction Curve",
            })
    }

    /// Univariate curves only
    pub fn set_energy_part_load_fraction_curve(&self, model: &mut Model, curve: Curve) -> bool {
        curve.is_univariate()
            && model.set_target(self.0, fields::ENERGY_PART_LOAD_FRACTION_CURVE_NAME, curve.handle())
    }

    pub fn condenser_type(&self, model: &Model) -> String {
        model.required_string(self.0, fields::CONDENSER_TYPE)
    }

    pub fn set_condenser_type(&self, model: &mut Model, condenser_type: &str) -> bool {
        model.set_string(self.0, fields::CONDENSER_TYPE, condenser_type)
    }

    pub fn evaporative_condenser_pump_rated_power_consumption(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, fields::EVAPORATIVE_CONDENSER_PUMP_RATED_POWER_CONSUMPTION)
    }

    pub fn is_evaporative_condenser_pump_rated_power_consumption_autosized(&self, model: &Model) -> bool {
        model.is_autosized(self.0, fields::EVAPORATIVE_CONDENSER_PUMP_RATED_POWER_CONSUMPTION)
    }

    pub fn set_evaporative_condenser_pump_rated_power_consumption(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::EVAPORATIVE_CONDENSER_PUMP_RATED_POWER_CONSUMPTION, value)
    }

    pub fn autosize_evaporative_condenser_pump_rated_power_consumption(&self, model: &mut Model) {
        model.autosize(self.0, fields::EVAPORATIVE_CONDENSER_PUMP_RATED_POWER_CONSUMPTION);
    }

    pub fn crankcase_heater_capacity(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::CRANKCASE_HEATER_CAPACITY)
    }

    pub fn set_crankcase_heater_capacity(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::CRANKCASE_HEATER_CAPACITY, value)
    }

    pub fn maximum_outdoor_dry_bulb_temperature_for_crankcase_heater_operation(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::MAXIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_CRANKCASE_HEATER)
    }

    pub fn set_maximum_outdoor_dry_bulb_temperature_for_crankcase_heater_operation(
        &self,
        model: &mut Model,
        value: f64,
    ) -> bool {
        model.set_double(self.0, fields::MAXIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_CRANKCASE_HEATER, value)
    }

    pub fn basin_heater_capacity(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::BASIN_HEATER_CAPACITY)
    }

    pub fn set_basin_heater_capacity(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::BASIN_HEATER_CAPACITY, value)
    }

    pub fn basin_heater_setpoint_temperature(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::BASIN_HEATER_SETPOINT_TEMPERATURE)
    }

    /// Setpoints below 2 C are rejected
    pub fn set_basin_heater_setpoint_temperature(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::BASIN_HEATER_SETPOINT_TEMPERATURE, value)
    }

    pub fn basin_heater_operating_schedule(&self, model: &Model) -> Option<Schedule> {
        model.target(self.0, fields::BASIN_HEATER_OPERATING_SCHEDULE_NAME)
    }

    pub fn set_basin_heater_operating_schedule(&self, model: &mut Model, schedule: Schedule) -> bool {
        model.set_schedule(
            self.0,
            fields::BASIN_HEATER_OPERATING_SCHEDULE_NAME,
            BASIN_HEATER_OPERATING,
            schedule,
        )
    }

    pub fn reset_basin_heater_operating_schedule(&self, model: &mut Model) {
        model.reset_target(self.0, fields::BASIN_HEATER_OPERATING_SCHEDULE_NAME);
    }

    /// Speeds in list order, lowest first
    pub fn speeds(&self, model: &Model) -> Vec<CoilCoolingDXVariableSpeedSpeedData> {
        self.speed_data_list(model)
            .map(|list| list.model_objects(model))
            .unwrap_or_default()
    }

    /// Append a speed above the existing ones
    pub fn add_speed(&self, model: &mut Model, speed: CoilCoolingDXVariableSpeedSpeedData) -> bool {
        let list = match self.speed_data_list(model) {
            Some(list) => list,
            None => self.create_speed_data_list(model),
        };
        list.add_model_object(model, speed)
    }

    /// Drop `speed` from the coil; the speed object stays in the model
    pub fn remove_speed(&self, model: &mut Model, speed: CoilCoolingDXVariableSpeedSpeedData) -> bool {
        self.speed_data_list(model)
            .is_some_and(|list| list.remove_model_object(model, speed))
    }

    pub fn remove_all_speeds(&self, model: &mut Model) {
        for speed in self.speeds(model) {
            self.remove_speed(model, speed);
        }
    }
}

impl ModelObject for CoilCoolingDXVariableSpeed {
    /// The part load curve, then every speed
    fn children(&self, model: &Model) -> Vec<Handle> {
        model
            .workspace()
            .get_target(self.0, fields::ENERGY_PART_LOAD_FRACTION_CURVE_NAME)
            .into_iter()
            .chain(self.speeds(model).iter().map(ObjectHandle::handle))
            .collect()
    }

    fn schedule_type_keys(&self, model: &Model, schedule: Handle) -> Vec<ScheduleTypeKey> {
        model.keys_for_fields(
            self.0,
            schedule,
            &[(fields::BASIN_HEATER_OPERATING_SCHEDULE_NAME, BASIN_HEATER_OPERATING)],
        )
    }

    /// Removes the speed list and its speeds along with the coil
    fn remove(&self, model: &mut Model) -> Vec<WorkspaceObject> {
        let list = self.speed_data_list(model);
        let curve = model
            .workspace()
            .get_target(self.0, fields::ENERGY_PART_LOAD_FRACTION_CURVE_NAME);
        let mut removed = model.remove_record(self.0);
        if let Some(list) = list {
            removed.extend(list.remove(model));
        }
        removed.extend(model.remove_unused(curve.into_iter().collect()));
        removed
    }

    fn clone_into_model(&self, source: &Model, target: &mut Model) -> Self {
        let copy = Self(target.clone_record(
            source,
            self.0,
            &[fields::ENERGY_PART_LOAD_FRACTION_CURVE_NAME, fields::SPEED_DATA_LIST],
        ));
        target.clone_child(source, self.0, copy.0, fields::ENERGY_PART_LOAD_FRACTION_CURVE_NAME);
        match self.speed_data_list(source) {
            Some(list) => {
                let list_copy = list.clone_into_model(source, target);
                if let Some(name) = copy.name(target) {
                    list_copy.set_name(target, &format!("{name} Speed Data List"));
                }
                target.set_target(copy.0, fields::SPEED_DATA_LIST, list_copy.handle());
            }
            None => {
                copy.create_speed_data_list(target);
            }
        }
        copy
    }
}

mod speed_fields {
    pub const REFERENCE_UNIT_GROSS_RATED_TOTAL_COOLING_CAPACITY: usize = 2;
    pub const REFERENCE_UNIT_GROSS_RATED_SENSIBLE_HEAT_RATIO: usize = 3;
    pub const REFERENCE_UNIT_GROSS_RATED_COOLING_COP: usize = 4;
    pub const REFERENCE_UNIT_RATED_AIR_FLOW_RATE: usize = 5;
    pub const REFERENCE_UNIT_RATED_CONDENSER_AIR_FLOW_RATE: usize = 6;
    pub const REFERENCE_UNIT_RATED_PAD_EFFECTIVENESS_OF_EVAP_PRECOOLING: usize = 7;
    pub const TOTAL_COOLING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME: usize = 8;
    pub const TOTAL_COOLING_CAPACITY_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME: usize = 9;
    pub const ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME: usize = 10;
    pub const ENERGY_INPUT_RATIO_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME: usize = 11;
}

const SPEED_CURVES: [usize; 4] = [
    speed_fields::TOTAL_COOLING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
    speed_fields::TOTAL_COOLING_CAPACITY_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME,
    speed_fields::ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
    speed_fields::ENERGY_INPUT_RATIO_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME,
];

declare_model_object! {
    /// Rated performance of one speed of a [`CoilCoolingDXVariableSpeed`]
    CoilCoolingDXVariableSpeedSpeedData => OsCoilCoolingDXVariableSpeedSpeedData
}

fn temperature_curve(model: &mut Model, coefficients: [f64; 6]) -> CurveBiquadratic {
    let curve = CurveBiquadratic::new(model);
    curve.set_coefficients(model, coefficients);
    curve.set_limits(model, (13.89, 22.22), (12.78, 51.67));
    curve
}

fn flow_fraction_curve(model: &mut Model, coefficients: [f64; 3]) -> CurveQuadratic {
    let curve = CurveQuadratic::new(model);
    curve.set_coefficients(model, coefficients);
    curve.set_minimum_value_of_x(model, Some(0.5));
    curve.set_maximum_value_of_x(model, Some(1.5));
    curve
}

impl CoilCoolingDXVariableSpeedSpeedData {
    /// New speed with rated values from the schema and typical performance curves
    pub fn new(model: &mut Model) -> Self {
        let capacity_ft = temperature_curve(model, [0.476428, 0.0401147, 0.000226411, -0.000827157, -7.39e-06, -0.000283]);
        let capacity_fff = flow_fraction_curve(model, [0.9, 0.1, 0.0]);
        let eir_ft = temperature_curve(model, [0.632475, -0.0121321, 0.000507, 0.0155565, 0.000272, -0.000679]);
        let eir_fff = flow_fraction_curve(model, [1.1552, -0.1808, 0.0256]);
        Self::with_curves(model, capacity_ft.into(), capacity_fff.into(), eir_ft.into(), eir_fff.into())
    }

    /// New speed using existing curves
    pub fn with_curves(
        model: &mut Model,
        total_cooling_capacity_function_of_temperature: Curve,
        total_cooling_capacity_function_of_air_flow_fraction: Curve,
        energy_input_ratio_function_of_temperature: Curve,
        energy_input_ratio_function_of_air_flow_fraction: Curve,
    ) -> Self {
        let speed = Self(model.add_record(Self::IDD_OBJECT_TYPE));
        speed.set_total_cooling_capacity_function_of_temperature_curve(model, total_cooling_capacity_function_of_temperature);
        speed.set_total_cooling_capacity_function_of_air_flow_fraction_curve(
            model,
            total_cooling_capacity_function_of_air_flow_fraction,
        );
        speed.set_energy_input_ratio_function_of_temperature_curve(model, energy_input_ratio_function_of_temperature);
        speed.set_energy_input_ratio_function_of_air_flow_fraction_curve(
            model,
            energy_input_ratio_function_of_air_flow_fraction,
        );
        speed
    }

    pub fn reference_unit_gross_rated_total_cooling_capacity(&self, model: &Model) -> f64 {
        model.required_double(self.0, speed_fields::REFERENCE_UNIT_GROSS_RATED_TOTAL_COOLING_CAPACITY)
    }

    pub fn set_reference_unit_gross_rated_total_cooling_capacity(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, speed_fields::REFERENCE_UNIT_GROSS_RATED_TOTAL_COOLING_CAPACITY, value)
    }

    pub fn reference_unit_gross_rated_sensible_heat_ratio(&self, model: &Model) -> f64 {
        model.required_double(self.0, speed_fields::REFERENCE_UNIT_GROSS_RATED_SENSIBLE_HEAT_RATIO)
    }

    pub fn set_reference_unit_gross_rated_sensible_heat_ratio(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, speed_fields::REFERENCE_UNIT_GROSS_RATED_SENSIBLE_HEAT_RATIO, value)
    }

    pub fn reference_unit_gross_rated_cooling_cop(&self, model: &Model) -> f64 {
        model.required_double(self.0, speed_fields::REFERENCE_UNIT_GROSS_RATED_COOLING_COP)
    }

    pub fn set_reference_unit_gross_rated_cooling_cop(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, speed_fields::REFERENCE_UNIT_GROSS_RATED_COOLING_COP, value)
    }

    pub fn reference_unit_rated_air_flow_rate(&self, model: &Model) -> f64 {
        model.required_double(self.0, speed_fields::REFERENCE_UNIT_RATED_AIR_FLOW_RATE)
    }

    pub fn set_reference_unit_rated_air_flow_rate(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, speed_fields::REFERENCE_UNIT_RATED_AIR_FLOW_RATE, value)
    }

    pub fn reference_unit_rated_condenser_air_flow_rate(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, speed_fields::REFERENCE_UNIT_RATED_CONDENSER_AIR_FLOW_RATE)
    }

    pub fn set_reference_unit_rated_condenser_air_flow_rate(&self, model: &mut Model, value: Option<f64>) -> bool {
        model.set_optional_double(self.0, speed_fields::REFERENCE_UNIT_RATED_CONDENSER_AIR_FLOW_RATE, value)
    }

    pub fn reference_unit_rated_pad_effectiveness_of_evap_precooling(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, speed_fields::REFERENCE_UNIT_RATED_PAD_EFFECTIVENESS_OF_EVAP_PRECOOLING)
    }

    pub fn set_reference_unit_rated_pad_effectiveness_of_evap_precooling(
        &self,
        model: &mut Model,
        value: Option<f64>,
    ) -> bool {
        model.set_optional_double(
            self.0,
            speed_fields::REFERENCE_UNIT_RATED_PAD_EFFECTIVENESS_OF_EVAP_PRECOOLING,
            value,
        )
    }

    pub fn total_cooling_capacity_function_of_temperature_curve(&self, model: &Model) -> Option<Curve> {
        model.target(self.0, speed_fields::TOTAL_COOLING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME)
    }

    /// Bivariate curves only
    pub fn set_total_cooling_capacity_function_of_temperature_curve(&self, model: &mut Model, curve: Curve) -> bool {
        !curve.is_univariate()
            && model.set_target(
                self.0,
                speed_fields::TOTAL_COOLING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
                curve.handle(),
            )
    }

    pub fn total_cooling_capacity_function_of_air_flow_fraction_curve(&self, model: &Model) -> Option<Curve> {
        model.target(self.0, speed_fields::TOTAL_COOLING_CAPACITY_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME)
    }

    /// Univariate curves only
    pub fn set_total_cooling_capacity_function_of_air_flow_fraction_curve(
        &self,
        model: &mut Model,
        curve: Curve,
    ) -> bool {
        curve.is_univariate()
            && model.set_target(
                self.0,
                speed_fields::TOTAL_COOLING_CAPACITY_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME,
                curve.handle(),
            )
    }

    pub fn energy_input_ratio_function_of_temperature_curve(&self, model: &Model) -> Option<Curve> {
        model.target(self.0, speed_fields::ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME)
    }

    /// Bivariate curves only
    pub fn set_energy_input_ratio_function_of_temperature_curve(&self, model: &mut Model, curve: Curve) -> bool {
        !curve.is_univariate()
            && model.set_target(
                self.0,
                speed_fields::ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
                curve.handle(),
            )
    }

    pub fn energy_input_ratio_function_of_air_flow_fraction_curve(&self, model: &Model) -> Option<Curve> {
        model.target(self.0, speed_fields::ENERGY_INPUT_RATIO_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME)
    }

    /// Univariate curves only
    pub fn set_energy_input_ratio_function_of_air_flow_fraction_curve(&self, model: &mut Model, curve: Curve) -> bool {
        curve.is_univariate()
            && model.set_target(
                self.0,
                speed_fields::ENERGY_INPUT_RATIO_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME,
                curve.handle(),
            )
    }
}

impl ModelObject for CoilCoolingDXVariableSpeedSpeedData {
    fn children(&self, model: &Model) -> Vec<Handle> {
        SPEED_CURVES
            .iter()
            .filter_map(|index| model.workspace().get_target(self.0, *index))
            .collect()
    }

    fn remove(&self, model: &mut Model) -> Vec<WorkspaceObject> {
        let curves = self.children(model);
        let mut removed = model.remove_record(self.0);
        removed.extend(model.remove_unused(curves));
        removed
    }

    fn clone_into_model(&self, source: &Model, target: &mut Model) -> Self {
        let copy = Self(target.clone_record(source, self.0, &SPEED_CURVES));
        for index in SPEED_CURVES {
            target.clone_child(source, self.0, copy.0, index);
        }
        copy
    }
}
