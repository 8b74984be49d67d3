//! Forward and reverse translation tests

use energy_modelling_sdk::idd::IddObjectType;
use energy_modelling_sdk::model::{
    AirLoopHVACUnitarySystem, CoilCoolingDXVariableSpeed, CoilCoolingDXVariableSpeedSpeedData,
    CoilHeatingDesuperheater, CoilHeatingElectric, CoilHeatingWater, CurveQuadratic, Fan, FanConstantVolume,
    FanOnOff, HeatingCoil, PlantLoop, ScheduleCompact, ScheduleConstant, SiteGroundTemperatureDeep,
    SiteWaterMainsTemperature, ThermalZone,
};
use energy_modelling_sdk::{
    read_workspace, write_workspace, ForwardTranslator, Handle, IddFile, Model, ModelObject, ObjectHandle,
    ReverseTranslator, Workspace,
};

const DEEP_GROUND_TEMPERATURES: [f64; 12] = [
    19.527, 19.502, 19.536, 19.598, 20.002, 21.64, 22.225, 22.375, 21.449, 20.121, 19.802, 19.633,
];

fn single(workspace: &Workspace, object_type: IddObjectType) -> Handle {
    let handles = workspace.objects_by_type(object_type);
    assert_eq!(handles.len(), 1, "expected one {object_type}");
    handles[0]
}

/// Field text for comparison, numeric where both sides are numeric
fn field_text(workspace: &Workspace, handle: Handle, index: usize) -> Option<String> {
    match workspace.get_double(handle, index) {
        Some(number) => Some(format!("{number:.6}")),
        None => workspace.get_string(handle, index),
    }
}

fn populated_model() -> Model {
    let mut model = Model::new();

    let schedule = ScheduleConstant::new(&mut model);
    schedule.set_name(&mut model, "Always On");
    schedule.set_value(&mut model, 1.0);

    let zone = ThermalZone::new(&mut model);
    zone.set_name(&mut model, "Office");
    zone.set_multiplier(&mut model, 2);
    zone.set_ceiling_height(&mut model, 3.5);
    zone.set_volume(&mut model, 420.0);

    let fan = FanConstantVolume::new(&mut model);
    fan.set_name(&mut model, "Supply Fan");
    fan.set_availability_schedule(&mut model, schedule.into());
    fan.set_fan_total_efficiency(&mut model, 0.65);
    fan.set_pressure_rise(&mut model, 550.0);
    fan.set_maximum_flow_rate(&mut model, 1.25);
    fan.set_motor_efficiency(&mut model, 0.9);
    fan.set_motor_in_airstream_fraction(&mut model, 0.5);
    fan.set_end_use_subcategory(&mut model, "Ventilation");

    let coil = CoilHeatingElectric::new(&mut model);
    coil.set_name(&mut model, "Reheat");
    coil.set_availability_schedule(&mut model, schedule.into());
    coil.set_efficiency(&mut model, 0.98);
    coil.set_nominal_capacity(&mut model, 12000.0);

    let curve = CurveQuadratic::new(&mut model);
    curve.set_name(&mut model, "Part Load");
    curve.set_coefficients(&mut model, [0.85, 0.15, 0.0]);
    curve.set_minimum_value_of_x(&mut model, Some(0.0));
    curve.set_maximum_value_of_x(&mut model, Some(1.0));

    model
}

/// Objects the translators handle field by field rather than by a pair table
fn hvac_model() -> Model {
    let mut model = Model::new();

    let deep = model.unique::<SiteGroundTemperatureDeep>();
    deep.set_monthly_temperatures(&mut model, &DEEP_GROUND_TEMPERATURES);
    let mains = model.unique::<SiteWaterMainsTemperature>();
    mains.set_annual_average_outdoor_air_temperature(&mut model, 9.69);
    mains.set_maximum_difference_in_monthly_average_outdoor_air_temperatures(&mut model, 28.1);

    let preheat = CoilHeatingWater::new(&mut model);
    preheat.set_name(&mut model, "Preheat");
    let plant_loop = PlantLoop::new(&mut model);
    plant_loop.add_demand_branch_for_component(&mut model, preheat);

    let dx = CoilCoolingDXVariableSpeed::new(&mut model);
    dx.set_name(&mut model, "DX");
    for capacity in [4000.0, 8000.0, 12000.0] {
        let speed = CoilCoolingDXVariableSpeedSpeedData::new(&mut model);
        speed.set_reference_unit_gross_rated_total_cooling_capacity(&mut model, capacity);
        dx.add_speed(&mut model, speed);
    }

    let reclaim = CoilHeatingDesuperheater::new(&mut model);
    reclaim.set_name(&mut model, "Reclaim");
    reclaim.set_heating_source(&mut model, dx.into());

    let system = AirLoopHVACUnitarySystem::new(&mut model);
    system.set_name(&mut model, "AHU");
    let fan = FanOnOff::new(&mut model);
    fan.set_name(&mut model, "AHU Fan");
    let heating = CoilHeatingElectric::new(&mut model);
    heating.set_name(&mut model, "AHU Heating");
    system.set_supply_fan(&mut model, Fan::OnOff(fan));
    system.set_cooling_coil(&mut model, dx.into());
    system.set_heating_coil(&mut model, HeatingCoil::Electric(heating));
    system.set_fan_placement(&mut model, "BlowThrough");

    model
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_deep_ground_temperatures() {
        let mut model = Model::new();
        let deep = model.unique::<SiteGroundTemperatureDeep>();
        assert!(deep.set_monthly_temperatures(&mut model, &DEEP_GROUND_TEMPERATURES));

        let workspace = ForwardTranslator::new().translate_model(&model);
        let record = single(&workspace, IddObjectType::SiteGroundTemperatureDeep);
        assert_eq!(workspace.num_fields(record), 12);
        for (index, expected) in DEEP_GROUND_TEMPERATURES.iter().enumerate() {
            let actual = workspace.get_double(record, index).unwrap();
            assert!((actual - expected).abs() < 0.001, "month {index}: {actual}");
        }
    }

    #[test]
    fn test_water_mains_correlation() {
        let mut model = Model::new();
        let mains = model.unique::<SiteWaterMainsTemperature>();
        mains.set_annual_average_outdoor_air_temperature(&mut model, 9.69);
        mains.set_maximum_difference_in_monthly_average_outdoor_air_temperatures(&mut model, 28.1);

        let workspace = ForwardTranslator::new().translate_model(&model);
        let record = single(&workspace, IddObjectType::SiteWaterMainsTemperature);
        assert_eq!(workspace.num_fields(record), 4);
        assert_eq!(workspace.get_string(record, 0).as_deref(), Some("Correlation"));
        assert_eq!(workspace.get_string(record, 1), None);
        assert_eq!(workspace.get_double(record, 2), Some(9.69));
        assert_eq!(workspace.get_double(record, 3), Some(28.1));
    }

    #[test]
    fn test_compact_schedule_fields_shift() {
        let mut model = Model::new();
        let schedule = ScheduleCompact::new(&mut model);
        let values = [
            "Through: 6/30",
            "For: Weekdays",
            "Until: 08:00",
            "0",
            "Until: 18:00",
            "1",
            "For: AllOtherDays",
            "Until: 24:00",
            "0",
            "Through: 12/31",
            "For: AllDays",
            "Until: 24:00",
            "0",
        ];
        for value in values {
            assert!(schedule.push_value(&mut model, value));
        }
        let internal = model.workspace();
        let n = internal.num_fields(schedule.handle()) - 1;

        let workspace = ForwardTranslator::new().translate_model(&model);
        let record = single(&workspace, IddObjectType::ScheduleCompact);
        assert_eq!(workspace.num_fields(record), n);
        for index in 0..n {
            assert_eq!(
                workspace.get_string(record, index),
                internal.get_string(schedule.handle(), index + 1),
                "field {index}"
            );
        }
    }
}

mod round_trip_tests {
    use super::*;

    #[test]
    fn test_fields_survive_forward_and_reverse() {
        let source = populated_model();
        let idf = ForwardTranslator::new().export(&source).unwrap().content;

        let mut reverse = ReverseTranslator::new();
        let result = reverse.import(&idf).unwrap();
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
        let model = result.model;

        for object in source.model_objects() {
            let object_type = object.idd_object_type();
            let name = source.name(object.handle()).unwrap();
            let copy = model
                .workspace()
                .object_by_name(object_type, &name)
                .unwrap_or_else(|| panic!("{object_type} '{name}' missing after round trip"));
            for index in 1..source.workspace().num_fields(object.handle()) {
                assert_eq!(
                    field_text(model.workspace(), copy, index),
                    field_text(source.workspace(), object.handle(), index),
                    "{object_type} '{name}' field {index}"
                );
            }
        }
    }

    #[test]
    fn test_special_cased_objects_survive() {
        let source = hvac_model();
        let mut forward = ForwardTranslator::new();
        let idf = forward.export(&source).unwrap().content;
        assert!(forward.errors().is_empty(), "{:?}", forward.errors());
        assert!(forward.warnings().is_empty(), "{:?}", forward.warnings());

        let workspace = read_workspace(&idf, IddFile::energyplus()).unwrap();
        let mains = single(&workspace, IddObjectType::SiteWaterMainsTemperature);
        assert_eq!(workspace.get_string(mains, 0).as_deref(), Some("Correlation"));
        let preheat = single(&workspace, IddObjectType::CoilHeatingWater);
        assert_eq!(workspace.get_string(preheat, 4).as_deref(), Some("Preheat Water Inlet Node"));
        assert_eq!(workspace.get_string(preheat, 5).as_deref(), Some("Preheat Water Outlet Node"));
        let dx = single(&workspace, IddObjectType::CoilCoolingDXVariableSpeed);
        assert_eq!(workspace.get_int(dx, 3), Some(3));
        assert_eq!(workspace.num_extensible_groups(dx), 3);
        assert_eq!(workspace.get_string(dx, 1).as_deref(), Some("AHU Fan - Cooling Coil Node"));
        assert_eq!(workspace.get_string(dx, 2).as_deref(), Some("AHU Cooling Coil - Heating Coil Node"));
        let reclaim = single(&workspace, IddObjectType::CoilHeatingDesuperheater);
        assert_eq!(
            workspace.get_string(reclaim, 5).as_deref(),
            Some("Coil:Cooling:DX:VariableSpeed")
        );
        assert_eq!(workspace.get_string(reclaim, 6).as_deref(), Some("DX"));
        let system = single(&workspace, IddObjectType::AirLoopHVACUnitarySystem);
        assert_eq!(workspace.get_string(system, 5).as_deref(), Some("AHU Air Inlet Node"));
        assert_eq!(workspace.get_string(system, 6).as_deref(), Some("AHU Air Outlet Node"));

        let mut reverse = ReverseTranslator::new();
        let model = reverse.translate_workspace(&workspace);
        assert!(reverse.errors().is_empty(), "{:?}", reverse.errors());
        assert!(reverse.warnings().is_empty(), "{:?}", reverse.warnings());

        let deep = model.optional_unique::<SiteGroundTemperatureDeep>().unwrap();
        assert_eq!(deep.monthly_temperatures(&model), DEEP_GROUND_TEMPERATURES.to_vec());
        let mains = model.optional_unique::<SiteWaterMainsTemperature>().unwrap();
        assert!(mains.temperature_schedule(&model).is_none());
        assert_eq!(mains.annual_average_outdoor_air_temperature(&model), Some(9.69));
        assert_eq!(
            mains.maximum_difference_in_monthly_average_outdoor_air_temperatures(&model),
            Some(28.1)
        );

        assert!(model.object_by_name::<CoilHeatingWater>("Preheat").is_some());

        let dx = model.object_by_name::<CoilCoolingDXVariableSpeed>("DX").unwrap();
        let capacities: Vec<f64> = dx
            .speeds(&model)
            .iter()
            .map(|speed| speed.reference_unit_gross_rated_total_cooling_capacity(&model))
            .collect();
        assert_eq!(capacities, vec![4000.0, 8000.0, 12000.0]);

        let reclaim = model.object_by_name::<CoilHeatingDesuperheater>("Reclaim").unwrap();
        assert_eq!(reclaim.heating_source(&model).map(|s| s.handle()), Some(dx.handle()));

        let system = model.object_by_name::<AirLoopHVACUnitarySystem>("AHU").unwrap();
        assert_eq!(system.fan_placement(&model).as_deref(), Some("BlowThrough"));
        let fan = model.object_by_name::<FanOnOff>("AHU Fan").unwrap();
        assert_eq!(system.supply_fan(&model).map(|f| f.handle()), Some(fan.handle()));
        assert_eq!(system.cooling_coil(&model).map(|c| c.handle()), Some(dx.handle()));
        let heating = model.object_by_name::<CoilHeatingElectric>("AHU Heating").unwrap();
        assert_eq!(system.heating_coil(&model).map(|c| c.handle()), Some(heating.handle()));
    }

    #[test]
    fn test_format_characters_in_names_survive() {
        let mut source = Model::new();
        let curve = CurveQuadratic::new(&mut source);
        curve.set_name(&mut source, "Bad, !Name");

        let reloaded = Model::load_str(&source.to_osm_string()).unwrap();
        assert!(reloaded.object_by_name::<CurveQuadratic>("Bad, !Name").is_some());

        let workspace = ForwardTranslator::new().translate_model(&reloaded);
        let text = write_workspace(&workspace);
        let parsed = read_workspace(&text, IddFile::energyplus()).unwrap();
        let model = ReverseTranslator::new().translate_workspace(&parsed);
        let curves = model.objects::<CurveQuadratic>();
        assert_eq!(curves.len(), 1);
        assert_eq!(curves[0].name(&model).as_deref(), Some("Bad, !Name"));
    }

    #[test]
    fn test_record_order_does_not_matter() {
        let source = populated_model();
        let workspace = ForwardTranslator::new().translate_model(&source);
        let text = write_workspace(&workspace);

        let mut records: Vec<&str> = text.split("\n\n").filter(|r| !r.trim().is_empty()).collect();
        records.reverse();
        let reversed = records.join("\n\n");

        let model = ReverseTranslator::new().load_model(&reversed).unwrap();
        let coil = model.object_by_name::<CoilHeatingElectric>("Reheat").unwrap();
        let schedule = model.object_by_name::<ScheduleConstant>("Always On").unwrap();
        assert_eq!(
            coil.availability_schedule(&model).map(|s| s.handle()),
            Some(schedule.handle())
        );
    }
}

mod concurrency_tests {
    use super::*;
    use std::thread;

    fn model_with_warnings() -> Model {
        let mut model = populated_model();
        model.unique::<SiteWaterMainsTemperature>();
        CoilHeatingWater::new(&mut model);
        let system = AirLoopHVACUnitarySystem::new(&mut model);
        let fan = FanConstantVolume::new(&mut model);
        let coil = CoilHeatingElectric::new(&mut model);
        system.set_supply_fan(&mut model, Fan::ConstantVolume(fan));
        system.set_heating_coil(&mut model, HeatingCoil::Electric(coil));
        model
    }

    #[test]
    fn test_independent_translators_agree() {
        let model = model_with_warnings();
        let mut baseline = ForwardTranslator::new();
        let expected_workspace = baseline.translate_model(&model);
        let expected = baseline.warnings().len();
        assert_eq!(expected, 2);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let model = model.clone();
                thread::spawn(move || {
                    let mut translator = ForwardTranslator::new();
                    let workspace = translator.translate_model(&model);
                    (translator.warnings().len(), workspace.num_objects())
                })
            })
            .collect();

        for handle in handles {
            let (warnings, objects) = handle.join().unwrap();
            assert_eq!(warnings, expected);
            assert_eq!(objects, expected_workspace.num_objects());
        }
    }

    #[test]
    fn test_translator_state_resets_between_runs() {
        let model = model_with_warnings();
        let mut translator = ForwardTranslator::new();
        let first = translator.translate_model(&model).num_objects();
        let warnings = translator.warnings().len();
        let second = translator.translate_model(&model).num_objects();
        assert_eq!(first, second);
        assert_eq!(translator.warnings().len(), warnings);
    }
}
