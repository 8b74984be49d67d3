//! Model object tests

use energy_modelling_sdk::model::{
    AirLoopHVACUnitarySystem, CoilHeatingElectric, CurveQuadratic, Fan, FanOnOff, HeatingCoil, ModelObjectList,
    ScheduleConstant, ThermalZone,
};
use energy_modelling_sdk::{Model, ModelObject, ObjectHandle, ReferenceValidator};

mod object_list_tests {
    use super::*;

    #[test]
    fn test_members_keep_insertion_order() {
        let mut model = Model::new();
        let list = ModelObjectList::new(&mut model);
        let zones: Vec<ThermalZone> = (0..4).map(|_| ThermalZone::new(&mut model)).collect();
        for zone in &zones {
            assert!(list.add_model_object(&mut model, *zone));
        }
        assert_eq!(list.model_objects::<ThermalZone>(&model), zones);

        assert!(list.remove_model_object(&mut model, zones[1]));
        assert_eq!(
            list.model_objects::<ThermalZone>(&model),
            vec![zones[0], zones[2], zones[3]]
        );
        assert!(model.contains(zones[1].handle()));

        list.remove_all_model_objects(&mut model);
        assert_eq!(list.size(&model), 0);
        assert!(zones.iter().all(|z| model.contains(z.handle())));
    }

    #[test]
    fn test_removing_the_list_removes_members() {
        let mut model = Model::new();
        let list = ModelObjectList::new(&mut model);
        let curve = CurveQuadratic::new(&mut model);
        list.add_model_object(&mut model, curve);

        list.remove(&mut model);
        assert!(!model.contains(list.handle()));
        assert!(!model.contains(curve.handle()));
    }
}

mod clone_tests {
    use super::*;

    fn system_model() -> (Model, AirLoopHVACUnitarySystem, ScheduleConstant) {
        let mut model = Model::new();
        let schedule = ScheduleConstant::new(&mut model);
        let system = AirLoopHVACUnitarySystem::new(&mut model);
        let fan = FanOnOff::new(&mut model);
        let coil = CoilHeatingElectric::new(&mut model);
        assert!(system.set_availability_schedule(&mut model, schedule.into()));
        assert!(system.set_supply_fan(&mut model, Fan::OnOff(fan)));
        assert!(system.set_heating_coil(&mut model, HeatingCoil::Electric(coil)));
        (model, system, schedule)
    }

    #[test]
    fn test_owned_components_are_copied() {
        let (source, system, schedule) = system_model();
        let mut target = Model::new();
        let copy = system.clone_into_model(&source, &mut target);

        let original_fan = system.supply_fan(&source).unwrap();
        let cloned_fan = copy.supply_fan(&target).unwrap();
        assert_ne!(original_fan.handle(), cloned_fan.handle());
        let original_coil = system.heating_coil(&source).unwrap();
        let cloned_coil = copy.heating_coil(&target).unwrap();
        assert_ne!(original_coil.handle(), cloned_coil.handle());

        // shared resources keep their identity
        assert_eq!(
            copy.availability_schedule(&target).map(|s| s.handle()),
            Some(schedule.handle())
        );
        assert!(ReferenceValidator::new().validate_model(&target).is_valid());
    }

    #[test]
    fn test_clone_within_a_model_shares_the_schedule() {
        let (mut model, system, schedule) = system_model();
        let copy = system.clone_object(&mut model);

        assert_ne!(copy.handle(), system.handle());
        assert_ne!(
            copy.supply_fan(&model).map(|f| f.handle()),
            system.supply_fan(&model).map(|f| f.handle())
        );
        assert_eq!(
            copy.availability_schedule(&model).map(|s| s.handle()),
            Some(schedule.handle())
        );
        assert_eq!(model.objects::<FanOnOff>().len(), 2);
        assert_eq!(model.objects::<ScheduleConstant>().len(), 1);
    }

    #[test]
    fn test_remove_takes_owned_components() {
        let (mut model, system, schedule) = system_model();
        let fan = system.supply_fan(&model).unwrap();
        system.remove(&mut model);

        assert!(!model.contains(fan.handle()));
        assert!(model.objects::<CoilHeatingElectric>().is_empty());
        assert!(model.contains(schedule.handle()));
    }
}

mod defaulted_field_tests {
    use super::*;

    #[test]
    fn test_set_and_reset_restore_the_default() {
        let mut model = Model::new();
        let zone = ThermalZone::new(&mut model);
        assert!(zone.is_multiplier_defaulted(&model));
        assert_eq!(zone.multiplier(&model), 1);

        assert!(zone.set_multiplier(&mut model, 4));
        assert!(!zone.is_multiplier_defaulted(&model));
        assert_eq!(zone.multiplier(&model), 4);

        zone.reset_multiplier(&mut model);
        assert!(zone.is_multiplier_defaulted(&model));
        assert_eq!(zone.multiplier(&model), 1);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut model = Model::new();
        let zone = ThermalZone::new(&mut model);
        assert!(!zone.set_multiplier(&mut model, 0));
        assert!(zone.is_multiplier_defaulted(&model));
    }
}
