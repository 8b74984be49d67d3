//! EnergyPlus IDF exporter
//!
//! [`ForwardTranslator`] turns a [`Model`] into an external-dialect
//! [`Workspace`]. Every output record is registered in the handle map before
//! its fields are filled, and references are translated on demand, so the
//! output is complete whatever order the model's objects are visited in.
//! Problems with single objects are collected as diagnostics and never abort
//! the run.

use crate::config::{ForwardTranslatorOptions, TranslatorConfig};
use crate::export::{ExportError, ExportResult};
use crate::idd::mapping::{self, desuperheater, unitary, variable_speed, water_coil, water_mains, ComponentSlot};
use crate::idd::IddObjectType;
use crate::log::{LogMessage, LogSink};
use crate::model::{
    AirLoopHVACUnitarySystem, AnyModelObject, CoilCoolingDXVariableSpeed, CoilHeatingDesuperheater,
    CoilHeatingWater, Model, ObjectHandle, SiteWaterMainsTemperature,
};
use crate::validation::ReferenceValidator;
use crate::workspace::{write_workspace, FieldValue, Handle, Workspace};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

const CHANNEL: &str = "energyplus.ForwardTranslator";

/// Translator from the internal model to EnergyPlus IDF
#[derive(Debug)]
pub struct ForwardTranslator {
    options: ForwardTranslatorOptions,
    log: LogSink,
    workspace: Workspace,
    translated: HashMap<Handle, Handle>,
}

impl Default for ForwardTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl ForwardTranslator {
    /// Create a translator with default options
    pub fn new() -> Self {
        Self::with_options(ForwardTranslatorOptions::default())
    }

    pub fn with_options(options: ForwardTranslatorOptions) -> Self {
        Self {
            options,
            log: LogSink::new(CHANNEL),
            workspace: Workspace::energyplus(),
            translated: HashMap::new(),
        }
    }

    /// Create a translator from the forward half of a configuration
    pub fn from_config(config: &TranslatorConfig) -> Self {
        Self::with_options(config.forward.clone())
    }

    pub fn options(&self) -> &ForwardTranslatorOptions {
        &self.options
    }

    /// Diagnostics above warning level from the last run
    pub fn errors(&self) -> Vec<LogMessage> {
        self.log.errors()
    }

    /// Warnings from the last run
    pub fn warnings(&self) -> Vec<LogMessage> {
        self.log.warnings()
    }

    /// Every diagnostic from the last run, in order
    pub fn messages(&self) -> &[LogMessage] {
        self.log.messages()
    }

    fn reset(&mut self) {
        self.log.clear();
        self.workspace = Workspace::energyplus();
        self.translated.clear();
    }

    /// Translate every object of `model`
    ///
    /// A `Version` record comes first when enabled; objects are then visited
    /// grouped by type name. Objects with no external counterpart are skipped.
    pub fn translate_model(&mut self, model: &Model) -> Workspace {
        self.reset();
        if self.options.include_version {
            self.translate_version();
        }

        let mut objects = model.model_objects();
        objects.sort_by_key(|o| o.idd_object_type().name());
        for object in objects {
            self.translate_and_map_model_object(model, object);
        }

        info!(
            channel = CHANNEL,
            objects = self.workspace.num_objects(),
            warnings = self.log.warnings().len(),
            errors = self.log.errors().len(),
            "translated model"
        );
        std::mem::replace(&mut self.workspace, Workspace::energyplus())
    }

    /// Translate one object and everything it references
    pub fn translate_model_object(&mut self, model: &Model, handle: Handle) -> Workspace {
        self.reset();
        match model.model_object(handle) {
            Some(object) => {
                self.translate_and_map_model_object(model, object);
            }
            None => self.log.error(format!("Object {handle} is not part of the model")),
        }
        std::mem::replace(&mut self.workspace, Workspace::energyplus())
    }

    /// Validate, translate and render `model` as IDF text
    ///
    /// Fails only when the model's references are broken beyond what a
    /// best-effort translation can paper over; translation diagnostics are
    /// available from [`errors`](Self::errors) and [`warnings`](Self::warnings).
    pub fn export(&mut self, model: &Model) -> Result<ExportResult, ExportError> {
        let validation = ReferenceValidator::new().validate_model(model);
        if !validation.is_valid() {
            return Err(ExportError::ValidationError(format!(
                "{} dangling references, {} ownership cycles",
                validation.dangling.len(),
                validation.ownership_cycles.len()
            )));
        }

        let workspace = self.translate_model(model);
        for unresolved in &validation.unresolved {
            self.log.warn(format!(
                "{} references '{}', which does not exist",
                describe(model, unresolved.source),
                unresolved.name
            ));
        }
        Ok(ExportResult {
            content: write_workspace(&workspace),
            format: "idf".to_string(),
        })
    }

    /// [`export`](Self::export) and write the text to `path`
    pub fn export_to_file(&mut self, model: &Model, path: impl AsRef<Path>) -> Result<ExportResult, ExportError> {
        let result = self.export(model)?;
        std::fs::write(path.as_ref(), &result.content)?;
        Ok(result)
    }

    fn translate_version(&mut self) {
        match self.workspace.add_object(IddObjectType::Version) {
            Some(version) => {
                if !self.workspace.set_string(version, 0, &self.options.energyplus_version) {
                    self.log.warn(format!(
                        "Invalid EnergyPlus version '{}'",
                        self.options.energyplus_version
                    ));
                }
            }
            None => self.log.error("Could not add the Version record"),
        }
    }

    /// Translate `object` unless already done, returning its external handle
    fn translate_and_map_model_object(&mut self, model: &Model, object: AnyModelObject) -> Option<Handle> {
        if let Some(existing) = self.translated.get(&object.handle()) {
            return Some(*existing);
        }
        let handle = object.handle();
        let internal_type = object.idd_object_type();
        match object {
            AnyModelObject::Version(_) => None,
            AnyModelObject::ModelObjectList(_)
            | AnyModelObject::PlantLoop(_)
            | AnyModelObject::CoilCoolingDXVariableSpeedSpeedData(_) => {
                self.untranslated(model, handle);
                None
            }
            AnyModelObject::SiteWaterMainsTemperature(mains) => {
                self.translate_site_water_mains_temperature(model, mains)
            }
            AnyModelObject::CoilCoolingDXVariableSpeed(coil) => {
                self.translate_coil_cooling_dx_variable_speed(model, coil)
            }
            AnyModelObject::CoilHeatingWater(coil) => self.translate_coil_heating_water(model, coil),
            AnyModelObject::CoilHeatingDesuperheater(coil) => {
                self.translate_coil_heating_desuperheater(model, coil)
            }
            AnyModelObject::AirLoopHVACUnitarySystem(system) => {
                self.translate_air_loop_hvac_unitary_system(model, system)
            }
            _ if mapping::is_shifted(internal_type) => self.translate_shifted(model, handle),
            _ => self.translate_mapped(model, handle),
        }
    }

    fn untranslated(&mut self, model: &Model, handle: Handle) {
        if self.options.warn_on_untranslated {
            self.log.warn(format!(
                "{} has no EnergyPlus counterpart and was not translated",
                describe(model, handle)
            ));
        } else {
            debug!(channel = CHANNEL, object = %describe(model, handle), "not translated");
        }
    }

    /// Add and register the external record for `source`, named like it
    fn create_record(&mut self, model: &Model, source: Handle) -> Option<Handle> {
        let Some(object_type) = model.object_type(source).and_then(mapping::external_type) else {
            self.untranslated(model, source);
            return None;
        };
        let Some(target) = self.workspace.add_object(object_type) else {
            self.log.error(format!("Could not add {object_type} for {}", describe(model, source)));
            return None;
        };
        if let Some(name) = model.name(source) {
            self.workspace.set_name(target, &name);
        }
        self.translated.insert(source, target);
        Some(target)
    }

    /// Copy every field `i` to external field `i - 1`
    fn translate_shifted(&mut self, model: &Model, source: Handle) -> Option<Handle> {
        let target = self.create_record(model, source)?;
        for index in 1..model.workspace().num_fields(source) {
            self.copy_field(model, source, index, target, index - 1);
        }
        Some(target)
    }

    /// Copy the type's paired fields
    fn translate_mapped(&mut self, model: &Model, source: Handle) -> Option<Handle> {
        let target = self.create_record(model, source)?;
        if let Some(object_type) = model.object_type(source) {
            for (from, to) in mapping::field_pairs(object_type) {
                self.copy_field(model, source, *from, target, *to);
            }
        }
        Some(target)
    }

    /// Copy one field, translating a referenced object first
    ///
    /// Blank fields are written as their internal default, or left blank when
    /// there is none.
    fn copy_field(&mut self, model: &Model, source: Handle, index: usize, target: Handle, target_index: usize) {
        let workspace = model.workspace();
        let value = workspace.value(source, index).cloned().unwrap_or(FieldValue::Blank);
        let written = match value {
            FieldValue::Pointer(referenced) => {
                let translated = model
                    .model_object(referenced)
                    .and_then(|object| self.translate_and_map_model_object(model, object));
                match translated {
                    Some(external) => self.workspace.set_pointer(target, target_index, external),
                    None => {
                        self.log.warn(format!(
                            "{} references {}, which was not translated",
                            describe(model, source),
                            describe(model, referenced)
                        ));
                        true
                    }
                }
            }
            FieldValue::Blank => match workspace.get_string(source, index) {
                Some(default) => self.workspace.set_string(target, target_index, &default),
                None => self.workspace.set_string(target, target_index, ""),
            },
            FieldValue::Double(value) => self.workspace.set_double(target, target_index, value),
            FieldValue::Integer(value) => self.workspace.set_int(target, target_index, value),
            FieldValue::String(text) => self.workspace.set_string(target, target_index, &text),
        };
        if !written {
            let field = workspace
                .idd_object(source)
                .and_then(|o| o.field(index))
                .map_or("<unknown>", |f| f.name);
            self.log.warn(format!(
                "{}: value of '{field}' is not valid for EnergyPlus and was dropped",
                describe(model, source)
            ));
        }
    }

    fn translate_site_water_mains_temperature(
        &mut self,
        model: &Model,
        mains: SiteWaterMainsTemperature,
    ) -> Option<Handle> {
        let source = mains.handle();
        let target = self.create_record(model, source)?;
        let method = if mains.temperature_schedule(model).is_some() {
            self.copy_field(model, source, water_mains::SCHEDULE, target, water_mains::SCHEDULE);
            "Schedule"
        } else if mains.has_correlation_inputs(model) {
            for index in [water_mains::ANNUAL_AVERAGE, water_mains::MAXIMUM_DIFFERENCE] {
                self.copy_field(model, source, index, target, index);
            }
            "Correlation"
        } else {
            self.log.warn(
                "Site:WaterMainsTemperature has neither a temperature schedule nor correlation inputs, \
                 using CorrelationFromWeatherFile",
            );
            "CorrelationFromWeatherFile"
        };
        self.workspace
            .set_string(target, water_mains::CALCULATION_METHOD, method);
        Some(target)
    }

    fn translate_coil_cooling_dx_variable_speed(
        &mut self,
        model: &Model,
        coil: CoilCoolingDXVariableSpeed,
    ) -> Option<Handle> {
        let target = self.translate_mapped(model, coil.handle())?;
        if let Err(err) = coil.energy_part_load_fraction_curve(model) {
            self.log.error(err.to_string());
        }

        let speeds = coil.speeds(model);
        if speeds.is_empty() {
            self.log.error(format!("{} has no speed data", describe(model, coil.handle())));
            return Some(target);
        }
        if !self
            .workspace
            .set_int(target, variable_speed::NUMBER_OF_SPEEDS, speeds.len() as i64)
        {
            self.log.error(format!(
                "{} has {} speeds, more than EnergyPlus accepts",
                describe(model, coil.handle()),
                speeds.len()
            ));
        }
        for speed in speeds {
            let Some(start) = self
                .workspace
                .push_extensible_group(target)
                .and_then(|group| self.workspace.group_start(target, group))
            else {
                continue;
            };
            for (offset, index) in variable_speed::SPEED_FIELDS.iter().enumerate() {
                self.copy_field(model, speed.handle(), *index, target, start + offset);
            }
        }
        Some(target)
    }

    fn translate_coil_heating_water(&mut self, model: &Model, coil: CoilHeatingWater) -> Option<Handle> {
        let target = self.translate_mapped(model, coil.handle())?;
        if coil.plant_loop(model).is_some() {
            let name = coil.name(model).unwrap_or_default();
            self.workspace
                .set_string(target, water_coil::WATER_INLET_NODE, &format!("{name} Water Inlet Node"));
            self.workspace
                .set_string(target, water_coil::WATER_OUTLET_NODE, &format!("{name} Water Outlet Node"));
        } else {
            self.log.warn(format!(
                "{} is not connected to a plant loop",
                describe(model, coil.handle())
            ));
        }
        Some(target)
    }

    fn translate_coil_heating_desuperheater(
        &mut self,
        model: &Model,
        coil: CoilHeatingDesuperheater,
    ) -> Option<Handle> {
        let target = self.translate_mapped(model, coil.handle())?;
        if coil.heating_source(model).is_none() {
            self.log.error(format!("{} has no heating source", describe(model, coil.handle())));
            return Some(target);
        }
        self.copy_typed_reference(
            model,
            coil.handle(),
            desuperheater::INTERNAL_SOURCE,
            target,
            desuperheater::SOURCE_TYPE,
            desuperheater::SOURCE_NAME,
        )?;
        Some(target)
    }

    /// Copy a reference written as an object type and name pair
    fn copy_typed_reference(
        &mut self,
        model: &Model,
        source: Handle,
        index: usize,
        target: Handle,
        type_index: usize,
        name_index: usize,
    ) -> Option<Handle> {
        model.workspace().get_target(source, index)?;
        self.copy_field(model, source, index, target, name_index);
        let external = self.workspace.get_target(target, name_index)?;
        let object_type = self.workspace.object_type(external)?;
        self.workspace.set_string(target, type_index, object_type.name());
        Some(external)
    }

    fn translate_air_loop_hvac_unitary_system(
        &mut self,
        model: &Model,
        system: AirLoopHVACUnitarySystem,
    ) -> Option<Handle> {
        let source = system.handle();
        let target = self.translate_mapped(model, source)?;

        let component = |slot: ComponentSlot, this: &mut Self| {
            this.copy_typed_reference(model, source, slot.internal, target, slot.type_index, slot.name_index)
                .map(|external| (slot.label, external))
        };
        let fan = component(unitary::FAN, self);
        let cooling = component(unitary::COOLING_COIL, self);
        let heating = component(unitary::HEATING_COIL, self);
        let supplemental = component(unitary::SUPPLEMENTAL_HEATING_COIL, self);

        let blow_through = match system.fan_placement(model) {
            Some(placement) => placement.eq_ignore_ascii_case("BlowThrough"),
            None => {
                if fan.is_some() {
                    self.workspace
                        .set_string(target, unitary::FAN_PLACEMENT, "DrawThrough");
                }
                false
            }
        };
        let order = if blow_through {
            [fan, cooling, heating, supplemental]
        } else {
            [cooling, heating, fan, supplemental]
        };
        let chain: Vec<(&str, Handle)> = order.into_iter().flatten().collect();

        let base = system.name(model).unwrap_or_default();
        let air_inlet = format!("{base} Air Inlet Node");
        let air_outlet = format!("{base} Air Outlet Node");
        self.workspace.set_string(target, unitary::AIR_INLET_NODE, &air_inlet);
        self.workspace.set_string(target, unitary::AIR_OUTLET_NODE, &air_outlet);

        for (position, (label, external)) in chain.iter().enumerate() {
            let inlet = match position.checked_sub(1).and_then(|p| chain.get(p)) {
                Some((previous, _)) => format!("{base} {previous} - {label} Node"),
                None => air_inlet.clone(),
            };
            let outlet = match chain.get(position + 1) {
                Some((next, _)) => format!("{base} {label} - {next} Node"),
                None => air_outlet.clone(),
            };
            self.set_air_nodes(*external, &inlet, &outlet);
        }
        Some(target)
    }

    fn set_air_nodes(&mut self, component: Handle, inlet: &str, outlet: &str) {
        let Some((inlet_index, outlet_index)) = self
            .workspace
            .object_type(component)
            .and_then(mapping::air_nodes)
        else {
            return;
        };
        self.workspace.set_string(component, inlet_index, inlet);
        self.workspace.set_string(component, outlet_index, outlet);
    }
}

/// `Type 'Name'` for diagnostics
fn describe(model: &Model, handle: Handle) -> String {
    let object_type = model
        .object_type(handle)
        .map_or("<missing object>", IddObjectType::name);
    match model.name(handle) {
        Some(name) => format!("{object_type} '{name}'"),
        None => object_type.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CoilCoolingDXVariableSpeedSpeedData, CoilHeatingElectric, CurveQuadratic, Fan, FanOnOff, HeatingCoil,
        ModelObject, PlantLoop, ScheduleCompact, ScheduleConstant, SiteGroundTemperatureDeep, ThermalZone,
    };

    fn external(workspace: &Workspace, object_type: IddObjectType) -> Vec<Handle> {
        workspace.objects_by_type(object_type)
    }

    #[test]
    fn test_version_first_and_optional() {
        let mut model = Model::new();
        ThermalZone::new(&mut model);

        let mut translator = ForwardTranslator::new();
        let workspace = translator.translate_model(&model);
        assert_eq!(workspace.handles().len(), 2);
        let first = workspace.handles()[0];
        assert_eq!(workspace.object_type(first), Some(IddObjectType::Version));
        assert_eq!(workspace.get_string(first, 0).as_deref(), Some("9.6"));

        let config = TranslatorConfig::new().with_version_record(false);
        let mut translator = ForwardTranslator::from_config(&config);
        let workspace = translator.translate_model(&model);
        assert!(external(&workspace, IddObjectType::Version).is_empty());
    }

    #[test]
    fn test_zone_fields() {
        let mut model = Model::new();
        let zone = ThermalZone::new(&mut model);
        zone.set_name(&mut model, "Core");
        zone.set_multiplier(&mut model, 3);
        zone.set_volume(&mut model, 250.0);

        let workspace = ForwardTranslator::new().translate_model_object(&model, zone.handle());
        let zones = external(&workspace, IddObjectType::Zone);
        assert_eq!(zones.len(), 1);
        assert_eq!(workspace.name(zones[0]).as_deref(), Some("Core"));
        assert_eq!(workspace.get_int(zones[0], 6), Some(3));
        assert_eq!(workspace.get_string(zones[0], 7).as_deref(), Some("autocalculate"));
        assert_eq!(workspace.get_double(zones[0], 8), Some(250.0));
    }

    #[test]
    fn test_references_translated_once() {
        let mut model = Model::new();
        let schedule = ScheduleConstant::new(&mut model);
        let first = CoilHeatingElectric::new(&mut model);
        let second = CoilHeatingElectric::new(&mut model);
        first.set_availability_schedule(&mut model, schedule.into());
        second.set_availability_schedule(&mut model, schedule.into());

        let workspace = ForwardTranslator::new().translate_model(&model);
        let schedules = external(&workspace, IddObjectType::ScheduleConstant);
        assert_eq!(schedules.len(), 1);
        for coil in external(&workspace, IddObjectType::CoilHeatingElectric) {
            assert_eq!(workspace.get_target(coil, 1), Some(schedules[0]));
        }
        assert_eq!(external(&workspace, IddObjectType::ScheduleTypeLimits).len(), 1);
    }

    #[test]
    fn test_fan_curves_follow_the_fan() {
        let mut model = Model::new();
        let fan = FanOnOff::new(&mut model);

        let workspace = ForwardTranslator::new().translate_model_object(&model, fan.handle());
        let fans = external(&workspace, IddObjectType::FanOnOff);
        assert_eq!(fans.len(), 1);
        assert_eq!(workspace.get_double(fans[0], 3), Some(300.0));
        assert_eq!(workspace.get_string(fans[0], 4).as_deref(), Some("autosize"));
        let power = workspace.get_target(fans[0], 9).unwrap();
        assert_eq!(workspace.object_type(power), Some(IddObjectType::CurveCubic));
        let efficiency = workspace.get_target(fans[0], 10).unwrap();
        assert_eq!(workspace.object_type(efficiency), Some(IddObjectType::CurveQuadratic));
    }

    #[test]
    fn test_schedule_compact_shifts_by_one() {
        let mut model = Model::new();
        let schedule = ScheduleCompact::new(&mut model);
        schedule.clear_values(&mut model);
        for value in ["Through: 12/31", "For: AllDays", "Until: 24:00", "1"] {
            assert!(schedule.push_value(&mut model, value));
        }

        let workspace = ForwardTranslator::new().translate_model_object(&model, schedule.handle());
        let records = external(&workspace, IddObjectType::ScheduleCompact);
        assert_eq!(records.len(), 1);
        let internal_fields = model.workspace().num_fields(schedule.handle());
        assert_eq!(workspace.num_fields(records[0]), internal_fields - 1);
        for index in 1..internal_fields {
            assert_eq!(
                workspace.get_string(records[0], index - 1),
                model.workspace().get_string(schedule.handle(), index)
            );
        }
    }

    #[test]
    fn test_ground_temperatures() {
        let mut model = Model::new();
        let deep = model.unique::<SiteGroundTemperatureDeep>();
        let values = [
            19.527, 19.502, 19.536, 19.598, 20.002, 21.64, 22.225, 22.375, 21.449, 20.121, 19.802, 19.633,
        ];
        assert!(deep.set_monthly_temperatures(&mut model, &values));

        let workspace = ForwardTranslator::new().translate_model(&model);
        let records = external(&workspace, IddObjectType::SiteGroundTemperatureDeep);
        assert_eq!(records.len(), 1);
        assert_eq!(workspace.num_fields(records[0]), 12);
        for (index, expected) in values.iter().enumerate() {
            let actual = workspace.get_double(records[0], index).unwrap();
            assert!((actual - expected).abs() < 0.001);
        }
    }

    #[test]
    fn test_water_mains_methods() {
        let mut model = Model::new();
        let mains = model.unique::<SiteWaterMainsTemperature>();

        let mut translator = ForwardTranslator::new();
        let workspace = translator.translate_model(&model);
        let record = external(&workspace, IddObjectType::SiteWaterMainsTemperature)[0];
        assert_eq!(workspace.get_string(record, 0).as_deref(), Some("CorrelationFromWeatherFile"));
        assert_eq!(translator.warnings().len(), 1);

        assert!(mains.set_annual_average_outdoor_air_temperature(&mut model, 9.69));
        assert!(mains.set_maximum_difference_in_monthly_average_outdoor_air_temperatures(&mut model, 28.1));
        let workspace = translator.translate_model(&model);
        let record = external(&workspace, IddObjectType::SiteWaterMainsTemperature)[0];
        assert_eq!(workspace.num_fields(record), 4);
        assert_eq!(workspace.get_string(record, 0).as_deref(), Some("Correlation"));
        assert!(workspace.is_field_empty(record, 1));
        assert_eq!(workspace.get_double(record, 2), Some(9.69));
        assert_eq!(workspace.get_double(record, 3), Some(28.1));
        assert!(translator.warnings().is_empty());

        let schedule = ScheduleConstant::new(&mut model);
        assert!(mains.set_temperature_schedule(&mut model, schedule.into()));
        let workspace = translator.translate_model(&model);
        let record = external(&workspace, IddObjectType::SiteWaterMainsTemperature)[0];
        assert_eq!(workspace.get_string(record, 0).as_deref(), Some("Schedule"));
        assert!(workspace.get_target(record, 1).is_some());
        assert!(workspace.is_field_empty(record, 2));
    }

    #[test]
    fn test_variable_speed_coil_writes_speed_groups() {
        let mut model = Model::new();
        let coil = CoilCoolingDXVariableSpeed::new(&mut model);

        let mut translator = ForwardTranslator::new();
        translator.translate_model_object(&model, coil.handle());
        assert_eq!(translator.errors().len(), 1);
        assert!(translator.errors()[0].message.contains("no speed data"));

        for capacity in [5000.0, 10000.0] {
            let speed = CoilCoolingDXVariableSpeedSpeedData::new(&mut model);
            speed.set_reference_unit_gross_rated_total_cooling_capacity(&mut model, capacity);
            assert!(coil.add_speed(&mut model, speed));
        }
        let workspace = translator.translate_model_object(&model, coil.handle());
        assert!(translator.errors().is_empty());
        let record = external(&workspace, IddObjectType::CoilCoolingDXVariableSpeed)[0];
        assert_eq!(workspace.get_int(record, 3), Some(2));
        assert_eq!(workspace.num_extensible_groups(record), 2);
        let start = workspace.group_start(record, 1).unwrap();
        assert_eq!(workspace.get_double(record, start), Some(10000.0));
        let curve = workspace.get_target(record, start + 6).unwrap();
        assert_eq!(workspace.object_type(curve), Some(IddObjectType::CurveBiquadratic));
        assert!(external(&workspace, IddObjectType::CurveQuadratic).len() >= 3);
    }

    #[test]
    fn test_missing_part_load_curve_is_an_error() {
        let mut model = Model::new();
        let coil = CoilCoolingDXVariableSpeed::new(&mut model);
        let speed = CoilCoolingDXVariableSpeedSpeedData::new(&mut model);
        coil.add_speed(&mut model, speed);
        let curve = coil.energy_part_load_fraction_curve(&model).unwrap();
        model.remove_record(curve.handle());

        let mut translator = ForwardTranslator::new();
        translator.translate_model(&model);
        assert_eq!(translator.errors().len(), 1);
        assert!(translator.errors()[0].message.contains("Energy Part Load Fraction Curve"));
    }

    #[test]
    fn test_water_coil_nodes_need_a_plant_loop() {
        let mut model = Model::new();
        let coil = CoilHeatingWater::new(&mut model);
        coil.set_name(&mut model, "Reheat");

        let mut translator = ForwardTranslator::new();
        let workspace = translator.translate_model_object(&model, coil.handle());
        assert_eq!(translator.warnings().len(), 1);
        let record = external(&workspace, IddObjectType::CoilHeatingWater)[0];
        assert!(workspace.is_field_empty(record, 4));

        let plant_loop = PlantLoop::new(&mut model);
        plant_loop.add_demand_branch_for_component(&mut model, coil);
        let workspace = translator.translate_model_object(&model, coil.handle());
        assert!(translator.warnings().is_empty());
        let record = external(&workspace, IddObjectType::CoilHeatingWater)[0];
        assert_eq!(workspace.get_string(record, 4).as_deref(), Some("Reheat Water Inlet Node"));
        assert_eq!(workspace.get_string(record, 5).as_deref(), Some("Reheat Water Outlet Node"));
    }

    #[test]
    fn test_desuperheater_source_type_and_name() {
        let mut model = Model::new();
        let coil = CoilHeatingDesuperheater::new(&mut model);

        let mut translator = ForwardTranslator::new();
        translator.translate_model_object(&model, coil.handle());
        assert_eq!(translator.errors().len(), 1);

        let dx = CoilCoolingDXVariableSpeed::new(&mut model);
        let speed = CoilCoolingDXVariableSpeedSpeedData::new(&mut model);
        dx.add_speed(&mut model, speed);
        assert!(coil.set_heating_source(&mut model, dx.into()));
        let workspace = translator.translate_model_object(&model, coil.handle());
        assert!(translator.errors().is_empty());
        let record = external(&workspace, IddObjectType::CoilHeatingDesuperheater)[0];
        assert_eq!(workspace.get_string(record, 5).as_deref(), Some("Coil:Cooling:DX:VariableSpeed"));
        assert_eq!(workspace.get_string(record, 6), dx.name(&model));
    }

    #[test]
    fn test_untranslated_types_warn_only_when_asked() {
        let mut model = Model::new();
        PlantLoop::new(&mut model);

        let mut translator = ForwardTranslator::new();
        translator.translate_model(&model);
        assert!(translator.warnings().is_empty());

        let mut translator = ForwardTranslator::from_config(&TranslatorConfig::strict());
        let workspace = translator.translate_model(&model);
        // the loop and its demand list
        assert_eq!(translator.warnings().len(), 2);
        assert_eq!(workspace.num_objects(), 1);
    }

    #[test]
    fn test_unitary_blow_through_node_chain() {
        let mut model = Model::new();
        let system = AirLoopHVACUnitarySystem::new(&mut model);
        system.set_name(&mut model, "AHU");
        let fan = FanOnOff::new(&mut model);
        let heating = CoilHeatingElectric::new(&mut model);
        assert!(system.set_supply_fan(&mut model, Fan::OnOff(fan)));
        assert!(system.set_heating_coil(&mut model, HeatingCoil::Electric(heating)));
        assert!(system.set_fan_placement(&mut model, "BlowThrough"));

        let workspace = ForwardTranslator::new().translate_model(&model);
        let record = external(&workspace, IddObjectType::AirLoopHVACUnitarySystem)[0];
        assert_eq!(workspace.get_string(record, 5).as_deref(), Some("AHU Air Inlet Node"));
        assert_eq!(workspace.get_string(record, 6).as_deref(), Some("AHU Air Outlet Node"));
        assert_eq!(workspace.get_string(record, 7).as_deref(), Some("Fan:OnOff"));
        assert_eq!(workspace.get_string(record, 11).as_deref(), Some("Coil:Heating:Electric"));
        assert!(workspace.is_field_empty(record, 14));

        let fan_record = external(&workspace, IddObjectType::FanOnOff)[0];
        assert_eq!(workspace.get_string(fan_record, 7).as_deref(), Some("AHU Air Inlet Node"));
        assert_eq!(workspace.get_string(fan_record, 8).as_deref(), Some("AHU Fan - Heating Coil Node"));
        let coil_record = external(&workspace, IddObjectType::CoilHeatingElectric)[0];
        assert_eq!(workspace.get_string(coil_record, 4).as_deref(), Some("AHU Fan - Heating Coil Node"));
        assert_eq!(workspace.get_string(coil_record, 5).as_deref(), Some("AHU Air Outlet Node"));
    }

    #[test]
    fn test_unitary_draw_through_is_the_default() {
        let mut model = Model::new();
        let system = AirLoopHVACUnitarySystem::new(&mut model);
        system.set_name(&mut model, "DOAS");
        let fan = FanOnOff::new(&mut model);
        let cooling = CoilCoolingDXVariableSpeed::new(&mut model);
        let supplemental = CoilHeatingElectric::new(&mut model);
        system.set_supply_fan(&mut model, Fan::OnOff(fan));
        system.set_cooling_coil(&mut model, cooling.into());
        system.set_supplemental_heating_coil(&mut model, HeatingCoil::Electric(supplemental));

        let workspace = ForwardTranslator::new().translate_model(&model);
        let record = external(&workspace, IddObjectType::AirLoopHVACUnitarySystem)[0];
        assert_eq!(workspace.get_string(record, 9).as_deref(), Some("DrawThrough"));

        let coil_record = external(&workspace, IddObjectType::CoilCoolingDXVariableSpeed)[0];
        assert_eq!(workspace.get_string(coil_record, 1).as_deref(), Some("DOAS Air Inlet Node"));
        assert_eq!(workspace.get_string(coil_record, 2).as_deref(), Some("DOAS Cooling Coil - Fan Node"));
        let fan_record = external(&workspace, IddObjectType::FanOnOff)[0];
        assert_eq!(workspace.get_string(fan_record, 7).as_deref(), Some("DOAS Cooling Coil - Fan Node"));
        assert_eq!(
            workspace.get_string(fan_record, 8).as_deref(),
            Some("DOAS Fan - Supplemental Coil Node")
        );
        let supplemental_record = external(&workspace, IddObjectType::CoilHeatingElectric)[0];
        assert_eq!(
            workspace.get_string(supplemental_record, 4).as_deref(),
            Some("DOAS Fan - Supplemental Coil Node")
        );
        assert_eq!(
            workspace.get_string(supplemental_record, 5).as_deref(),
            Some("DOAS Air Outlet Node")
        );
    }

    #[test]
    fn test_export_renders_idf_text() {
        let mut model = Model::new();
        let curve = CurveQuadratic::new(&mut model);
        curve.set_name(&mut model, "Bad, !Name");

        let result = ForwardTranslator::new().export(&model).unwrap();
        assert_eq!(result.format, "idf");
        assert!(result.content.starts_with("Version,"));
        assert!(result.content.contains("Curve:Quadratic,"));
        assert!(result.content.contains("Bad\\, \\!Name"));
    }

    #[test]
    fn test_export_rejects_ownership_cycles() {
        let mut model = Model::new();
        let list = crate::model::ModelObjectList::new(&mut model);
        list.add_model_object(&mut model, list);
        let err = ForwardTranslator::new().export(&model).unwrap_err();
        assert!(matches!(err, ExportError::ValidationError(_)));
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.idf");
        let mut model = Model::new();
        ThermalZone::new(&mut model);
        let result = ForwardTranslator::new().export_to_file(&model, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), result.content);
    }

    #[test]
    fn test_blank_internal_field_without_default_stays_blank() {
        let mut model = Model::new();
        let coil = CoilHeatingElectric::new(&mut model);
        let workspace = ForwardTranslator::new().translate_model_object(&model, coil.handle());
        let record = external(&workspace, IddObjectType::CoilHeatingElectric)[0];
        assert_eq!(workspace.value(record, 1), Some(&FieldValue::Blank));
        assert_eq!(workspace.get_string(record, 3).as_deref(), Some("autosize"));
    }
}
