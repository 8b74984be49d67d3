//! Unitary air-handling system
//!
//! A unitary system owns its supply fan and coils: they are cloned with it
//! and removed with it. The controlling zone is only referenced.

use super::macros::declare_model_object;
use super::{
    ConcreteModelObject, CoolingCoil, Fan, HeatingCoil, Model, ModelObject, ObjectHandle, Schedule,
    ScheduleTypeKey, ThermalZone,
};
use crate::workspace::{Handle, WorkspaceObject};

mod fields {
    pub const CONTROL_TYPE: usize = 2;
    pub const CONTROLLING_ZONE_OR_THERMOSTAT_LOCATION: usize = 3;
    pub const DEHUMIDIFICATION_CONTROL_TYPE: usize = 4;
    pub const AVAILABILITY_SCHEDULE_NAME: usize = 5;
    pub const SUPPLY_FAN_NAME: usize = 6;
    pub const FAN_PLACEMENT: usize = 7;
    pub const SUPPLY_AIR_FAN_OPERATING_MODE_SCHEDULE_NAME: usize = 8;
    pub const HEATING_COIL_NAME: usize = 9;
    pub const DX_HEATING_COIL_SIZING_RATIO: usize = 10;
    pub const COOLING_COIL_NAME: usize = 11;
    pub const USE_DOAS_DX_COOLING_COIL: usize = 12;
    pub const DOAS_DX_COOLING_COIL_LEAVING_MINIMUM_AIR_TEMPERATURE: usize = 13;
    pub const LATENT_LOAD_CONTROL: usize = 14;
    pub const SUPPLEMENTAL_HEATING_COIL_NAME: usize = 15;
    pub const SUPPLY_AIR_FLOW_RATE_METHOD_DURING_COOLING_OPERATION: usize = 16;
    pub const SUPPLY_AIR_FLOW_RATE_DURING_COOLING_OPERATION: usize = 17;
    pub const SUPPLY_AIR_FLOW_RATE_METHOD_DURING_HEATING_OPERATION: usize = 18;
    pub const SUPPLY_AIR_FLOW_RATE_DURING_HEATING_OPERATION: usize = 19;
    pub const SUPPLY_AIR_FLOW_RATE_METHOD_WHEN_NO_COOLING_OR_HEATING_IS_REQUIRED: usize = 20;
    pub const SUPPLY_AIR_FLOW_RATE_WHEN_NO_COOLING_OR_HEATING_IS_REQUIRED: usize = 21;
    pub const NO_LOAD_SUPPLY_AIR_FLOW_RATE_CONTROL_SET_TO_LOW_SPEED: usize = 22;
    pub const MAXIMUM_SUPPLY_AIR_TEMPERATURE: usize = 23;
    pub const MAXIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_SUPPLEMENTAL_HEATER_OPERATION: usize = 24;
    pub const ANCILLARY_ON_CYCLE_ELECTRIC_POWER: usize = 25;
    pub const ANCILLARY_OFF_CYCLE_ELECTRIC_POWER: usize = 26;
}

const AVAILABILITY: ScheduleTypeKey = ScheduleTypeKey::new("AirLoopHVACUnitarySystem", "Availability");
const SUPPLY_AIR_FAN_OPERATING_MODE: ScheduleTypeKey =
    ScheduleTypeKey::new("AirLoopHVACUnitarySystem", "Supply Air Fan Operating Mode");

const OWNED_COMPONENTS: [usize; 4] = [
    fields::SUPPLY_FAN_NAME,
    fields::COOLING_COIL_NAME,
    fields::HEATING_COIL_NAME,
    fields::SUPPLEMENTAL_HEATING_COIL_NAME,
];

/// Flow rate method set whenever a flow rate is given directly
const SUPPLY_AIR_FLOW_RATE: &str = "SupplyAirFlowRate";

declare_model_object! {
    /// Fan, cooling coil, heating coil and supplemental heater in one box
    AirLoopHVACUnitarySystem => OsAirLoopHVACUnitarySystem
}

impl AirLoopHVACUnitarySystem {
    /// New load-controlled system with no components
    pub fn new(model: &mut Model) -> Self {
        let system = Self(model.add_record(Self::IDD_OBJECT_TYPE));
        system.set_control_type(model, "Load");
        system.set_dehumidification_control_type(model, "None");
        system.set_dx_heating_coil_sizing_ratio(model, 1.0);
        system.set_use_doas_dx_cooling_coil(model, false);
        system.set_doas_dx_cooling_coil_leaving_minimum_air_temperature(model, 2.0);
        system.set_latent_load_control(model, "SensibleOnlyLoadControl");
        model.set_string(system.0, fields::SUPPLY_AIR_FLOW_RATE_METHOD_DURING_COOLING_OPERATION, "None");
        model.set_string(system.0, fields::SUPPLY_AIR_FLOW_RATE_METHOD_DURING_HEATING_OPERATION, "None");
        system.autosize_supply_air_flow_rate_when_no_cooling_or_heating_is_required(model);
        system.set_maximum_supply_air_temperature(model, 80.0);
        system.set_maximum_outdoor_dry_bulb_temperature_for_supplemental_heater_operation(model, 21.0);
        system.set_ancillary_on_cycle_electric_power(model, 0.0);
        system.set_ancillary_off_cycle_electric_power(model, 0.0);
        system
    }

    pub fn control_type(&self, model: &Model) -> String {
        model.required_string(self.0, fields::CONTROL_TYPE)
    }

    pub fn set_control_type(&self, model: &mut Model, control_type: &str) -> bool {
        model.set_string(self.0, fields::CONTROL_TYPE, control_type)
    }

    pub fn controlling_zone_or_thermostat_location(&self, model: &Model) -> Option<ThermalZone> {
        model.target(self.0, fields::CONTROLLING_ZONE_OR_THERMOSTAT_LOCATION)
    }

    pub fn set_controlling_zone_or_thermostat_location(&self, model: &mut Model, zone: ThermalZone) -> bool {
        model.set_target(self.0, fields::CONTROLLING_ZONE_OR_THERMOSTAT_LOCATION, zone.handle())
    }

    pub fn reset_controlling_zone_or_thermostat_location(&self, model: &mut Model) {
        model.reset_target(self.0, fields::CONTROLLING_ZONE_OR_THERMOSTAT_LOCATION);
    }

    pub fn dehumidification_control_type(&self, model: &Model) -> String {
        model.required_string(self.0, fields::DEHUMIDIFICATION_CONTROL_TYPE)
    }

    pub fn set_dehumidification_control_type(&self, model: &mut Model, control_type: &str) -> bool {
        model.set_string(self.0, fields::DEHUMIDIFICATION_CONTROL_TYPE, control_type)
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

    pub fn supply_fan(&self, model: &Model) -> Option<Fan> {
        model.target(self.0, fields::SUPPLY_FAN_NAME)
    }

    pub fn set_supply_fan(&self, model: &mut Model, fan: Fan) -> bool {
        model.set_target(self.0, fields::SUPPLY_FAN_NAME, fan.handle())
    }

    pub fn reset_supply_fan(&self, model: &mut Model) {
        model.reset_target(self.0, fields::SUPPLY_FAN_NAME);
    }

    pub fn fan_placement(&self, model: &Model) -> Option<String> {
        model.optional_string(self.0, fields::FAN_PLACEMENT)
    }

    /// `BlowThrough` or `DrawThrough`
    pub fn set_fan_placement(&self, model: &mut Model, placement: &str) -> bool {
        model.set_string(self.0, fields::FAN_PLACEMENT, placement)
    }

    pub fn reset_fan_placement(&self, model: &mut Model) {
        model.reset(self.0, fields::FAN_PLACEMENT);
    }

    pub fn supply_air_fan_operating_mode_schedule(&self, model: &Model) -> Option<Schedule> {
        model.target(self.0, fields::SUPPLY_AIR_FAN_OPERATING_MODE_SCHEDULE_NAME)
    }

    pub fn set_supply_air_fan_operating_mode_schedule(&self, model: &mut Model, schedule: Schedule) -> bool {
        model.set_schedule(
            self.0,
            fields::SUPPLY_AIR_FAN_OPERATING_MODE_SCHEDULE_NAME,
            SUPPLY_AIR_FAN_OPERATING_MODE,
            schedule,
        )
    }

    pub fn reset_supply_air_fan_operating_mode_schedule(&self, model: &mut Model) {
        model.reset_target(self.0, fields::SUPPLY_AIR_FAN_OPERATING_MODE_SCHEDULE_NAME);
    }

    pub fn heating_coil(&self, model: &Model) -> Option<HeatingCoil> {
        model.target(self.0, fields::HEATING_COIL_NAME)
    }

    pub fn set_heating_coil(&self, model: &mut Model, coil: HeatingCoil) -> bool {
        model.set_target(self.0, fields::HEATING_COIL_NAME, coil.handle())
    }

    pub fn reset_heating_coil(&self, model: &mut Model) {
        model.reset_target(self.0, fields::HEATING_COIL_NAME);
    }

    pub fn dx_heating_coil_sizing_ratio(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::DX_HEATING_COIL_SIZING_RATIO)
    }

    pub fn set_dx_heating_coil_sizing_ratio(&self, model: &mut Model, ratio: f64) -> bool {
        model.set_double(self.0, fields::DX_HEATING_COIL_SIZING_RATIO, ratio)
    }

    pub fn cooling_coil(&self, model: &Model) -> Option<CoolingCoil> {
        model.target(self.0, fields::COOLING_COIL_NAME)
    }

    pub fn set_cooling_coil(&self, model: &mut Model, coil: CoolingCoil) -> bool {
        model.set_target(self.0, fields::COOLING_COIL_NAME, coil.handle())
    }

    pub fn reset_cooling_coil(&self, model: &mut Model) {
        model.reset_target(self.0, fields::COOLING_COIL_NAME);
    }

    pub fn use_doas_dx_cooling_coil(&self, model: &Model) -> bool {
        model.required_bool(self.0, fields::USE_DOAS_DX_COOLING_COIL)
    }

    pub fn set_use_doas_dx_cooling_coil(&self, model: &mut Model, value: bool) -> bool {
        model.set_bool(self.0, fields::USE_DOAS_DX_COOLING_COIL, value)
    }

    /// `None` while autosized
    pub fn doas_dx_cooling_coil_leaving_minimum_air_temperature(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, fields::DOAS_DX_COOLING_COIL_LEAVING_MINIMUM_AIR_TEMPERATURE)
    }

    pub fn is_doas_dx_cooling_coil_leaving_minimum_air_temperature_autosized(&self, model: &Model) -> bool {
        model.is_autosized(self.0, fields::DOAS_DX_COOLING_COIL_LEAVING_MINIMUM_AIR_TEMPERATURE)
    }

    /// Temperatures outside 0 to 7.2 C are rejected
    pub fn set_doas_dx_cooling_coil_leaving_minimum_air_temperature(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::DOAS_DX_COOLING_COIL_LEAVING_MINIMUM_AIR_TEMPERATURE, value)
    }

    pub fn autosize_doas_dx_cooling_coil_leaving_minimum_air_temperature(&self, model: &mut Model) {
        model.autosize(self.0, fields::DOAS_DX_COOLING_COIL_LEAVING_MINIMUM_AIR_TEMPERATURE);
    }

    pub fn latent_load_control(&self, model: &Model) -> String {
        model.required_string(self.0, fields::LATENT_LOAD_CONTROL)
    }

    pub fn set_latent_load_control(&self, model: &mut Model, control: &str) -> bool {
        model.set_string(self.0, fields::LATENT_LOAD_CONTROL, control)
    }

    pub fn supplemental_heating_coil(&self, model: &Model) -> Option<HeatingCoil> {
        model.target(self.0, fields::SUPPLEMENTAL_HEATING_COIL_NAME)
    }

    pub fn set_supplemental_heating_coil(&self, model: &mut Model, coil: HeatingCoil) -> bool {
        model.set_target(self.0, fields::SUPPLEMENTAL_HEATING_COIL_NAME, coil.handle())
    }

    pub fn reset_supplemental_heating_coil(&self, model: &mut Model) {
        model.reset_target(self.0, fields::SUPPLEMENTAL_HEATING_COIL_NAME);
    }

    pub fn supply_air_flow_rate_method_during_cooling_operation(&self, model: &Model) -> Option<String> {
        model.optional_string(self.0, fields::SUPPLY_AIR_FLOW_RATE_METHOD_DURING_COOLING_OPERATION)
    }

    /// `None` while autosized
    pub fn supply_air_flow_rate_during_cooling_operation(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, fields::SUPPLY_AIR_FLOW_RATE_DURING_COOLING_OPERATION)
    }

    pub fn is_supply_air_flow_rate_during_cooling_operation_autosized(&self, model: &Model) -> bool {
        model.is_autosized(self.0, fields::SUPPLY_AIR_FLOW_RATE_DURING_COOLING_OPERATION)
    }

    /// Also switches the cooling flow method to `SupplyAirFlowRate`
    pub fn set_supply_air_flow_rate_during_cooling_operation(&self, model: &mut Model, value: f64) -> bool {
        self.set_flow_rate(
            model,
            fields::SUPPLY_AIR_FLOW_RATE_METHOD_DURING_COOLING_OPERATION,
            fields::SUPPLY_AIR_FLOW_RATE_DURING_COOLING_OPERATION,
            Some(value),
        )
    }

    pub fn autosize_supply_air_flow_rate_during_cooling_operation(&self, model: &mut Model) {
        self.set_flow_rate(
            model,
            fields::SUPPLY_AIR_FLOW_RATE_METHOD_DURING_COOLING_OPERATION,
            fields::SUPPLY_AIR_FLOW_RATE_DURING_COOLING_OPERATION,
            None,
        );
    }

    pub fn supply_air_flow_rate_method_during_heating_operation(&self, model: &Model) -> Option<String> {
        model.optional_string(self.0, fields::SUPPLY_AIR_FLOW_RATE_METHOD_DURING_HEATING_OPERATION)
    }

    /// `None` while autosized
    pub fn supply_air_flow_rate_during_heating_operation(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, fields::SUPPLY_AIR_FLOW_RATE_DURING_HEATING_OPERATION)
    }

    pub fn is_supply_air_flow_rate_during_heating_operation_autosized(&self, model: &Model) -> bool {
        model.is_autosized(self.0, fields::SUPPLY_AIR_FLOW_RATE_DURING_HEATING_OPERATION)
    }

    /// Also switches the heating flow method to `SupplyAirFlowRate`
    pub fn set_supply_air_flow_rate_during_heating_operation(&self, model: &mut Model, value: f64) -> bool {
        self.set_flow_rate(
            model,
            fields::SUPPLY_AIR_FLOW_RATE_METHOD_DURING_HEATING_OPERATION,
            fields::SUPPLY_AIR_FLOW_RATE_DURING_HEATING_OPERATION,
            Some(value),
        )
    }

    pub fn autosize_supply_air_flow_rate_during_heating_operation(&self, model: &mut Model) {
        self.set_flow_rate(
            model,
            fields::SUPPLY_AIR_FLOW_RATE_METHOD_DURING_HEATING_OPERATION,
            fields::SUPPLY_AIR_FLOW_RATE_DURING_HEATING_OPERATION,
            None,
        );
    }

    pub fn supply_air_flow_rate_method_when_no_cooling_or_heating_is_required(&self, model: &Model) -> Option<String> {
        model.optional_string(
            self.0,
            fields::SUPPLY_AIR_FLOW_RATE_METHOD_WHEN_NO_COOLING_OR_HEATING_IS_REQUIRED,
        )
    }

    /// `None` while autosized or unset
    pub fn supply_air_flow_rate_when_no_cooling_or_heating_is_required(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, fields::SUPPLY_AIR_FLOW_RATE_WHEN_NO_COOLING_OR_HEATING_IS_REQUIRED)
    }

    pub fn is_supply_air_flow_rate_when_no_cooling_or_heating_is_required_autosized(&self, model: &Model) -> bool {
        model.is_autosized(self.0, fields::SUPPLY_AIR_FLOW_RATE_WHEN_NO_COOLING_OR_HEATING_IS_REQUIRED)
    }

    /// Also switches the no-load flow method to `SupplyAirFlowRate`
    pub fn set_supply_air_flow_rate_when_no_cooling_or_heating_is_required(&self, model: &mut Model, value: f64) -> bool {
        self.set_flow_rate(
            model,
            fields::SUPPLY_AIR_FLOW_RATE_METHOD_WHEN_NO_COOLING_OR_HEATING_IS_REQUIRED,
            fields::SUPPLY_AIR_FLOW_RATE_WHEN_NO_COOLING_OR_HEATING_IS_REQUIRED,
            Some(value),
        )
    }

    pub fn autosize_supply_air_flow_rate_when_no_cooling_or_heating_is_required(&self, model: &mut Model) {
        self.set_flow_rate(
            model,
            fields::SUPPLY_AIR_FLOW_RATE_METHOD_WHEN_NO_COOLING_OR_HEATING_IS_REQUIRED,
            fields::SUPPLY_AIR_FLOW_RATE_WHEN_NO_COOLING_OR_HEATING_IS_REQUIRED,
            None,
        );
    }

    /// Store a flow rate, `None` meaning autosize, and select the direct method
    fn set_flow_rate(&self, model: &mut Model, method: usize, rate: usize, value: Option<f64>) -> bool {
        let stored = match value {
            Some(value) => model.set_double(self.0, rate, value),
            None => model.autosize(self.0, rate),
        };
        stored && model.set_string(self.0, method, SUPPLY_AIR_FLOW_RATE)
    }

    pub fn no_load_supply_air_flow_rate_control_set_to_low_speed(&self, model: &Model) -> bool {
        model.required_bool(self.0, fields::NO_LOAD_SUPPLY_AIR_FLOW_RATE_CONTROL_SET_TO_LOW_SPEED)
    }

    pub fn set_no_load_supply_air_flow_rate_control_set_to_low_speed(&self, model: &mut Model, value: bool) -> bool {
        model.set_bool(self.0, fields::NO_LOAD_SUPPLY_AIR_FLOW_RATE_CONTROL_SET_TO_LOW_SPEED, value)
    }

    /// `None` while autosized
    pub fn maximum_supply_air_temperature(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, fields::MAXIMUM_SUPPLY_AIR_TEMPERATURE)
    }

    pub fn is_maximum_supply_air_temperature_autosized(&self, model: &Model) -> bool {
        model.is_autosized(self.0, fields::MAXIMUM_SUPPLY_AIR_TEMPERATURE)
    }

    pub fn set_maximum_supply_air_temperature(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::MAXIMUM_SUPPLY_AIR_TEMPERATURE, value)
    }

    pub fn autosize_maximum_supply_air_temperature(&self, model: &mut Model) {
        model.autosize(self.0, fields::MAXIMUM_SUPPLY_AIR_TEMPERATURE);
    }

    pub fn maximum_outdoor_dry_bulb_temperature_for_supplemental_heater_operation(&self, model: &Model) -> f64 {
        model.required_double(
            self.0,
            fields::MAXIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_SUPPLEMENTAL_HEATER_OPERATION,
        )
    }

    pub fn set_maximum_outdoor_dry_bulb_temperature_for_supplemental_heater_operation(
        &self,
        model: &mut Model,
        value: f64,
    ) -> bool {
        model.set_double(
            self.0,
            fields::MAXIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_SUPPLEMENTAL_HEATER_OPERATION,
            value,
        )
    }

    pub fn ancillary_on_cycle_electric_power(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::ANCILLARY_ON_CYCLE_ELECTRIC_POWER)
    }

    pub fn set_ancillary_on_cycle_electric_power(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::ANCILLARY_ON_CYCLE_ELECTRIC_POWER, value)
    }

    pub fn ancillary_off_cycle_electric_power(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::ANCILLARY_OFF_CYCLE_ELECTRIC_POWER)
    }

    pub fn set_ancillary_off_cycle_electric_power(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::ANCILLARY_OFF_CYCLE_ELECTRIC_POWER, value)
    }
}

impl ModelObject for AirLoopHVACUnitarySystem {
    /// Fan, cooling coil, heating coil, supplemental coil; absent ones skipped
    fn children(&self, model: &Model) -> Vec<Handle> {
        OWNED_COMPONENTS
            .iter()
            .filter_map(|index| model.workspace().get_target(self.0, *index))
            .collect()
    }

    fn schedule_type_keys(&self, model: &Model, schedule: Handle) -> Vec<ScheduleTypeKey> {
        model.keys_for_fields(
            self.0,
            schedule,
            &[
                (fields::AVAILABILITY_SCHEDULE_NAME, AVAILABILITY),
                (fields::SUPPLY_AIR_FAN_OPERATING_MODE_SCHEDULE_NAME, SUPPLY_AIR_FAN_OPERATING_MODE),
            ],
        )
    }

    fn remove(&self, model: &mut Model) -> Vec<WorkspaceObject> {
        let mut removed = Vec::new();
        for component in self.children(model) {
            removed.extend(model.remove_model_object(component));
        }
        removed.extend(model.remove_record(self.0));
        removed
    }

    fn clone_into_model(&self, source: &Model, target: &mut Model) -> Self {
        let copy = Self(target.clone_record(source, self.0, &OWNED_COMPONENTS));
        for index in OWNED_COMPONENTS {
            target.clone_child(source, self.0, copy.0, index);
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CoilCoolingDXVariableSpeed, CoilHeatingElectric, CoilHeatingWater, FanOnOff, PlantLoop,
        ScheduleConstant,
    };

    fn full_system(model: &mut Model) -> AirLoopHVACUnitarySystem {
        let system = AirLoopHVACUnitarySystem::new(model);
        let fan = FanOnOff::new(model);
        let cooling = CoilCoolingDXVariableSpeed::new(model);
        let heating = CoilHeatingWater::new(model);
        let supplemental = CoilHeatingElectric::new(model);
        assert!(system.set_supply_fan(model, fan.into()));
        assert!(system.set_cooling_coil(model, cooling.into()));
        assert!(system.set_heating_coil(model, heating.into()));
        assert!(system.set_supplemental_heating_coil(model, supplemental.into()));
        system
    }

    #[test]
    fn test_constructor_defaults() {
        let mut model = Model::new();
        let system = AirLoopHVACUnitarySystem::new(&mut model);
        assert_eq!(system.control_type(&model), "Load");
        assert_eq!(system.dehumidification_control_type(&model), "None");
        assert!(!system.use_doas_dx_cooling_coil(&model));
        assert_eq!(system.latent_load_control(&model), "SensibleOnlyLoadControl");
        assert_eq!(
            system.supply_air_flow_rate_method_during_cooling_operation(&model).as_deref(),
            Some("None")
        );
        assert_eq!(
            system.supply_air_flow_rate_method_when_no_cooling_or_heating_is_required(&model).as_deref(),
            Some("SupplyAirFlowRate")
        );
        assert!(system.is_supply_air_flow_rate_when_no_cooling_or_heating_is_required_autosized(&model));
        assert_eq!(system.maximum_supply_air_temperature(&model), Some(80.0));
        assert!(system.fan_placement(&model).is_none());
        assert!(system.children(&model).is_empty());
    }

    #[test]
    fn test_flow_rate_selects_method() {
        let mut model = Model::new();
        let system = AirLoopHVACUnitarySystem::new(&mut model);
        assert!(system.set_supply_air_flow_rate_during_cooling_operation(&mut model, 1.5));
        assert_eq!(system.supply_air_flow_rate_during_cooling_operation(&model), Some(1.5));
        assert_eq!(
            system.supply_air_flow_rate_method_during_cooling_operation(&model).as_deref(),
            Some("SupplyAirFlowRate")
        );
        assert!(!system.set_supply_air_flow_rate_during_heating_operation(&mut model, -1.0));
        assert_eq!(
            system.supply_air_flow_rate_method_during_heating_operation(&model).as_deref(),
            Some("None")
        );
    }

    #[test]
    fn test_children_in_component_order() {
        let mut model = Model::new();
        let system = full_system(&mut model);
        let children = system.children(&model);
        assert_eq!(children.len(), 4);
        assert_eq!(Some(children[0]), system.supply_fan(&model).map(|f| f.handle()));
        assert_eq!(Some(children[1]), system.cooling_coil(&model).map(|c| c.handle()));
    }

    #[test]
    fn test_clone_copies_components_not_zone() {
        let mut model = Model::new();
        let system = full_system(&mut model);
        let zone = ThermalZone::new(&mut model);
        system.set_controlling_zone_or_thermostat_location(&mut model, zone);

        let copy = system.clone_object(&mut model);
        assert_ne!(copy.supply_fan(&model), system.supply_fan(&model));
        assert_ne!(copy.cooling_coil(&model), system.cooling_coil(&model));
        assert!(copy.heating_coil(&model).is_some());
        assert_eq!(copy.controlling_zone_or_thermostat_location(&model), Some(zone));
        assert_eq!(model.objects::<FanOnOff>().len(), 2);

        let mut other = Model::new();
        let foreign = system.clone_into_model(&model, &mut other);
        assert!(foreign.controlling_zone_or_thermostat_location(&other).is_none());
        assert!(foreign.supply_fan(&other).is_some());
    }

    #[test]
    fn test_remove_takes_components() {
        let mut model = Model::new();
        let system = full_system(&mut model);
        let plant_loop = PlantLoop::new(&mut model);
        let heating = system.heating_coil(&model).unwrap();
        plant_loop.add_demand_branch_for_component(&mut model, heating);
        let zone = ThermalZone::new(&mut model);
        system.set_controlling_zone_or_thermostat_location(&mut model, zone);

        system.remove(&mut model);
        assert!(model.objects::<FanOnOff>().is_empty());
        assert!(model.objects::<CoilCoolingDXVariableSpeed>().is_empty());
        assert!(model.objects::<CoilHeatingWater>().is_empty());
        assert!(model.objects::<CoilHeatingElectric>().is_empty());
        assert!(plant_loop.demand_components(&model).is_empty());
        assert!(model.contains(zone.handle()));
    }

    #[test]
    fn test_schedule_keys() {
        let mut model = Model::new();
        let system = AirLoopHVACUnitarySystem::new(&mut model);
        let schedule = ScheduleConstant::new(&mut model);
        assert!(system.set_availability_schedule(&mut model, schedule.into()));
        assert!(system.set_supply_air_fan_operating_mode_schedule(&mut model, schedule.into()));
        assert_eq!(
            system.schedule_type_keys(&model, schedule.handle()),
            vec![AVAILABILITY, SUPPLY_AIR_FAN_OPERATING_MODE]
        );
    }
}
