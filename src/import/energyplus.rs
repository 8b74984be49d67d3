//! EnergyPlus IDF importer
//!
//! [`ReverseTranslator`] rebuilds a [`Model`] from an external-dialect
//! [`Workspace`]. Records are translated on demand the first time something
//! references them, so the physical order of the file does not matter.

use crate::config::{ReverseTranslatorOptions, TranslatorConfig};
use crate::idd::mapping::{self, desuperheater, unitary, variable_speed};
use crate::idd::{Dialect, IddFieldKind, IddFile, IddObjectType};
use crate::import::{ImportError, ImportResult};
use crate::log::{LogMessage, LogSink};
use crate::model::{CoilCoolingDXVariableSpeed, CoilCoolingDXVariableSpeedSpeedData, ConcreteModelObject, Model};
use crate::workspace::{read_workspace, FieldValue, Handle, Workspace};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};
use uuid::Uuid;

const CHANNEL: &str = "energyplus.ReverseTranslator";

/// Namespace of the deterministic handles given to imported records
const HANDLE_NAMESPACE: Uuid = Uuid::from_u128(0x5a0e_1c7e_3f2b_4d19_9c6e_0b7d_e2a4_f851);

/// Translator from EnergyPlus IDF to the internal model
#[derive(Debug)]
pub struct ReverseTranslator {
    options: ReverseTranslatorOptions,
    log: LogSink,
    model: Model,
    translated: HashMap<Handle, Option<Handle>>,
}

impl Default for ReverseTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReverseTranslator {
    pub fn new() -> Self {
        Self::with_options(ReverseTranslatorOptions::default())
    }

    pub fn with_options(options: ReverseTranslatorOptions) -> Self {
        Self {
            options,
            log: LogSink::new(CHANNEL),
            model: Model::new(),
            translated: HashMap::new(),
        }
    }

    pub fn from_config(config: &TranslatorConfig) -> Self {
        Self::with_options(config.reverse.clone())
    }

    pub fn options(&self) -> &ReverseTranslatorOptions {
        &self.options
    }

    pub fn errors(&self) -> Vec<LogMessage> {
        self.log.errors()
    }

    pub fn warnings(&self) -> Vec<LogMessage> {
        self.log.warnings()
    }

    pub fn messages(&self) -> &[LogMessage] {
        self.log.messages()
    }

    /// Translate every record of `workspace`
    ///
    /// An internal-dialect workspace is rejected with a logged error and an
    /// empty model.
    pub fn translate_workspace(&mut self, workspace: &Workspace) -> Model {
        self.log.clear();
        self.translated.clear();
        self.model = Model::new();

        if workspace.dialect() != Dialect::EnergyPlus {
            self.log
                .error("Cannot reverse translate a workspace that is not in the EnergyPlus dialect");
            return std::mem::take(&mut self.model);
        }

        for handle in workspace.handles() {
            self.translate_and_map_workspace_object(workspace, *handle);
        }

        info!(
            channel = CHANNEL,
            objects = self.model.num_objects(),
            warnings = self.log.warnings().len(),
            errors = self.log.errors().len(),
            "translated workspace"
        );
        std::mem::take(&mut self.model)
    }

    /// Parse IDF text and translate it
    pub fn load_model(&mut self, text: &str) -> Result<Model, ImportError> {
        let workspace = read_workspace(text, IddFile::energyplus())?;
        Ok(self.translate_workspace(&workspace))
    }

    /// [`load_model`](Self::load_model) returning the diagnostics alongside
    pub fn import(&mut self, text: &str) -> Result<ImportResult, ImportError> {
        let model = self.load_model(text)?;
        Ok(ImportResult {
            model,
            warnings: self.warnings(),
            errors: self.errors(),
        })
    }

    /// Read an IDF file and [`import`](Self::import) it
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<ImportResult, ImportError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        self.import(&text)
    }

    fn translate_and_map_workspace_object(&mut self, workspace: &Workspace, external: Handle) -> Option<Handle> {
        if let Some(existing) = self.translated.get(&external) {
            return *existing;
        }
        let object_type = workspace.object_type(external)?;
        if object_type == IddObjectType::Version {
            debug!(channel = CHANNEL, "Version is not translated");
            self.translated.insert(external, None);
            return None;
        }
        let Some(internal_type) = mapping::internal_type(object_type) else {
            self.log.warn(format!(
                "{} has no internal counterpart and was not translated",
                describe(workspace, external)
            ));
            self.translated.insert(external, None);
            return None;
        };

        let internal = self.create_record(workspace, external, internal_type);
        self.translated.insert(external, internal);
        let internal = internal?;

        if mapping::is_shifted(internal_type) {
            for index in 0..workspace.num_fields(external) {
                self.copy_field(workspace, external, index, internal, index + 1);
            }
            return Some(internal);
        }

        for (to, from) in mapping::field_pairs(internal_type) {
            self.copy_field(workspace, external, *from, internal, *to);
        }
        match internal_type {
            IddObjectType::OsCoilCoolingDXVariableSpeed => {
                self.translate_speeds(workspace, external, internal);
            }
            IddObjectType::OsCoilHeatingDesuperheater => self.copy_field(
                workspace,
                external,
                desuperheater::SOURCE_NAME,
                internal,
                desuperheater::INTERNAL_SOURCE,
            ),
            IddObjectType::OsAirLoopHVACUnitarySystem => {
                for slot in [
                    unitary::FAN,
                    unitary::HEATING_COIL,
                    unitary::COOLING_COIL,
                    unitary::SUPPLEMENTAL_HEATING_COIL,
                ] {
                    self.copy_field(workspace, external, slot.name_index, internal, slot.internal);
                }
            }
            _ => {}
        }
        Some(internal)
    }

    /// Add the internal record for `external`, reusing a unique instance
    fn create_record(
        &mut self,
        workspace: &Workspace,
        external: Handle,
        internal_type: IddObjectType,
    ) -> Option<Handle> {
        let name = workspace.name(external);
        let model_workspace = self.model.workspace_mut();
        let is_unique = model_workspace
            .idd()
            .object(internal_type)
            .is_some_and(|o| o.is_unique());
        let existing = is_unique
            .then(|| model_workspace.objects_by_type(internal_type).first().copied())
            .flatten();

        let handle = match existing {
            Some(handle) => Some(handle),
            None => {
                let key = format!("{}:{}", internal_type.name(), name.as_deref().unwrap_or_default());
                let handle = Uuid::new_v5(&HANDLE_NAMESPACE, key.as_bytes());
                model_workspace
                    .add_object_with_handle(internal_type, handle)
                    .or_else(|| model_workspace.add_object(internal_type))
            }
        };
        let Some(handle) = handle else {
            self.log.error(format!(
                "Could not add {internal_type} for {}",
                describe(workspace, external)
            ));
            return None;
        };
        if let Some(name) = name {
            model_workspace.set_name(handle, &name);
        }
        Some(handle)
    }

    /// Copy one external field into the model, translating references first
    ///
    /// Blank external fields leave the internal field blank, which reads back
    /// as the internal default.
    fn copy_field(&mut self, workspace: &Workspace, external: Handle, index: usize, internal: Handle, to: usize) {
        let value = workspace.value(external, index).cloned().unwrap_or(FieldValue::Blank);
        let written = match value {
            FieldValue::Blank => true,
            FieldValue::Pointer(target) => match self.translate_and_map_workspace_object(workspace, target) {
                Some(translated) => self.model.workspace_mut().set_pointer(internal, to, translated),
                None => {
                    self.log.warn(format!(
                        "{} references {}, which was not translated",
                        describe(workspace, external),
                        describe(workspace, target)
                    ));
                    true
                }
            },
            FieldValue::String(text) => {
                let is_reference = workspace
                    .idd_object(external)
                    .and_then(|o| o.field(index))
                    .is_some_and(|f| matches!(f.kind, IddFieldKind::Object(_)));
                if is_reference && self.options.strict_references {
                    self.log.warn(format!(
                        "{} references '{text}', which does not exist",
                        describe(workspace, external)
                    ));
                }
                self.model.workspace_mut().set_string(internal, to, &text)
            }
            FieldValue::Double(number) => self.model.workspace_mut().set_double(internal, to, number),
            FieldValue::Integer(number) => self.model.workspace_mut().set_int(internal, to, number),
        };
        if !written {
            let field = workspace
                .idd_object(external)
                .and_then(|o| o.field(index))
                .map_or("<unknown>", |f| f.name);
            self.log.warn(format!(
                "{}: value of '{field}' could not be stored and was dropped",
                describe(workspace, external)
            ));
        }
    }

    /// Turn each speed group into a speed data object on the coil's list
    fn translate_speeds(&mut self, workspace: &Workspace, external: Handle, internal: Handle) {
        let coil = CoilCoolingDXVariableSpeed::wrap(internal);
        let coil_name = workspace.name(external).unwrap_or_default();
        let groups = workspace.num_extensible_groups(external);

        let declared = workspace
            .get_int(external, variable_speed::NUMBER_OF_SPEEDS)
            .unwrap_or_default();
        if usize::try_from(declared).ok() != Some(groups) {
            self.log.warn(format!(
                "{} declares {declared} speeds but lists {groups}",
                describe(workspace, external)
            ));
        }

        for group in 0..groups {
            let Some(start) = workspace.group_start(external, group) else {
                continue;
            };
            let Some(speed) = self
                .model
                .workspace_mut()
                .add_object(CoilCoolingDXVariableSpeedSpeedData::IDD_OBJECT_TYPE)
            else {
                continue;
            };
            self.model
                .workspace_mut()
                .set_name(speed, &format!("{coil_name} Speed {}", group + 1));
            for (offset, to) in variable_speed::SPEED_FIELDS.iter().enumerate() {
                self.copy_field(workspace, external, start + offset, speed, *to);
            }
            if !coil.add_speed(&mut self.model, CoilCoolingDXVariableSpeedSpeedData::wrap(speed)) {
                self.log.error(format!("Could not attach speed {} to '{coil_name}'", group + 1));
            }
        }
    }
}

fn describe(workspace: &Workspace, handle: Handle) -> String {
    let object_type = workspace
        .object_type(handle)
        .map_or("<missing object>", IddObjectType::name);
    match workspace.name(handle) {
        Some(name) => format!("{object_type} '{name}'"),
        None => object_type.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AirLoopHVACUnitarySystem, CoilHeatingDesuperheater, CoilHeatingElectric, ObjectHandle, ScheduleConstant,
        SiteGroundTemperatureDeep,
    };

    const FORWARD_REFERENCE_IDF: &str = "
Version,
  9.6;                     !- Version Identifier

Coil:Heating:Electric,
  Reheat,                  !- Name
  Always On,               !- Availability Schedule Name
  0.95,                    !- Efficiency
  autosize;                !- Nominal Capacity

Schedule:Constant,
  Always On,               !- Name
  ,                        !- Schedule Type Limits Name
  1;                       !- Hourly Value
";

    #[test]
    fn test_forward_references_resolve() {
        let mut translator = ReverseTranslator::new();
        let model = translator.load_model(FORWARD_REFERENCE_IDF).unwrap();
        assert!(translator.warnings().is_empty());

        let coil = model.object_by_name::<CoilHeatingElectric>("Reheat").unwrap();
        let schedule = model.object_by_name::<ScheduleConstant>("Always On").unwrap();
        assert_eq!(
            coil.availability_schedule(&model).map(|s| s.handle()),
            Some(schedule.handle())
        );
        assert_eq!(coil.efficiency(&model), 0.95);
        assert!(coil.is_nominal_capacity_autosized(&model));
        assert_eq!(schedule.value(&model), 1.0);
    }

    #[test]
    fn test_version_is_not_translated() {
        let mut translator = ReverseTranslator::new();
        let model = translator.load_model(FORWARD_REFERENCE_IDF).unwrap();
        assert!(model.workspace().objects_by_type(IddObjectType::OsVersion).is_empty());
        assert_eq!(model.num_objects(), 2);
    }

    #[test]
    fn test_handles_are_deterministic() {
        let first = ReverseTranslator::new().load_model(FORWARD_REFERENCE_IDF).unwrap();
        let second = ReverseTranslator::new().load_model(FORWARD_REFERENCE_IDF).unwrap();
        assert_eq!(first.workspace().handles(), second.workspace().handles());
    }

    #[test]
    fn test_unresolved_names_are_kept() {
        let text = "Coil:Heating:Electric,\n  Reheat,\n  Missing Schedule;\n";

        let mut translator = ReverseTranslator::new();
        let model = translator.load_model(text).unwrap();
        assert_eq!(translator.warnings().len(), 1);
        let coil = model.object_by_name::<CoilHeatingElectric>("Reheat").unwrap();
        assert_eq!(
            model.workspace().value(coil.handle(), 2),
            Some(&FieldValue::String("Missing Schedule".to_string()))
        );

        let config = TranslatorConfig::new().with_strict_references(false);
        let mut translator = ReverseTranslator::from_config(&config);
        translator.load_model(text).unwrap();
        assert!(translator.warnings().is_empty());
    }

    #[test]
    fn test_ground_temperatures_shift_back() {
        let text = "Site:GroundTemperature:Deep,
  19.527, 19.502, 19.536, 19.598, 20.002, 21.64,
  22.225, 22.375, 21.449, 20.121, 19.802, 19.633;
";
        let mut model = ReverseTranslator::new().load_model(text).unwrap();
        let deep = model.optional_unique::<SiteGroundTemperatureDeep>().unwrap();
        let values = deep.monthly_temperatures(&model);
        assert_eq!(values[0], 19.527);
        assert_eq!(values[11], 19.633);
        assert_eq!(model.unique::<SiteGroundTemperatureDeep>(), deep);
    }

    #[test]
    fn test_speed_groups_become_speed_data() {
        let mut source = Model::new();
        let coil = CoilCoolingDXVariableSpeed::new(&mut source);
        crate::model::ModelObject::set_name(&coil, &mut source, "DX");
        for capacity in [4000.0, 8000.0] {
            let speed = CoilCoolingDXVariableSpeedSpeedData::new(&mut source);
            speed.set_reference_unit_gross_rated_total_cooling_capacity(&mut source, capacity);
            coil.add_speed(&mut source, speed);
        }
        let workspace = crate::export::ForwardTranslator::new().translate_model(&source);

        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&workspace);
        assert!(translator.warnings().is_empty());
        let coil = model.object_by_name::<CoilCoolingDXVariableSpeed>("DX").unwrap();
        let speeds = coil.speeds(&model);
        assert_eq!(speeds.len(), 2);
        assert_eq!(speeds[0].name(&model).as_deref(), Some("DX Speed 1"));
        assert_eq!(speeds[1].reference_unit_gross_rated_total_cooling_capacity(&model), 8000.0);
        assert!(speeds[1].total_cooling_capacity_function_of_temperature_curve(&model).is_some());
        assert!(coil.energy_part_load_fraction_curve(&model).is_ok());
    }

    #[test]
    fn test_desuperheater_source_resolves() {
        let mut source = Model::new();
        let dx = CoilCoolingDXVariableSpeed::new(&mut source);
        let speed = CoilCoolingDXVariableSpeedSpeedData::new(&mut source);
        dx.add_speed(&mut source, speed);
        let coil = CoilHeatingDesuperheater::new(&mut source);
        coil.set_heating_source(&mut source, dx.into());
        let workspace = crate::export::ForwardTranslator::new().translate_model(&source);

        let model = ReverseTranslator::new().translate_workspace(&workspace);
        let coil = model.objects::<CoilHeatingDesuperheater>()[0];
        let dx = model.objects::<CoilCoolingDXVariableSpeed>()[0];
        assert_eq!(coil.heating_source(&model).map(|s| s.handle()), Some(dx.handle()));
    }

    #[test]
    fn test_unitary_components_resolve() {
        let mut source = Model::new();
        let system = AirLoopHVACUnitarySystem::new(&mut source);
        let heating = CoilHeatingElectric::new(&mut source);
        system.set_heating_coil(&mut source, heating.into());
        system.set_fan_placement(&mut source, "BlowThrough");
        let workspace = crate::export::ForwardTranslator::new().translate_model(&source);

        let model = ReverseTranslator::new().translate_workspace(&workspace);
        let system = model.objects::<AirLoopHVACUnitarySystem>()[0];
        let heating = system.heating_coil(&model).unwrap();
        assert_eq!(model.object_type(heating.handle()), Some(IddObjectType::OsCoilHeatingElectric));
        assert!(system.supply_fan(&model).is_none());
        assert_eq!(system.fan_placement(&model).as_deref(), Some("BlowThrough"));
    }

    #[test]
    fn test_internal_dialect_is_rejected() {
        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&Workspace::openstudio());
        assert_eq!(model.num_objects(), 0);
        assert_eq!(translator.errors().len(), 1);
    }

    #[test]
    fn test_parse_errors_propagate() {
        let err = ReverseTranslator::new()
            .load_model("Not:A:Type,\n  x;\n")
            .unwrap_err();
        assert!(matches!(err, ImportError::ParseError(_)));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.idf");
        std::fs::write(&path, FORWARD_REFERENCE_IDF).unwrap();
        let result = ReverseTranslator::new().load_file(&path).unwrap();
        assert_eq!(result.model.num_objects(), 2);
        assert!(result.errors.is_empty());
    }
}
