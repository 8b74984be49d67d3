//! Field correspondence between the internal and external dialects
//!
//! Tables pair an internal field index with the external index holding the
//! same value. Types whose external layout is the internal one without the
//! handle field are "shifted": internal index `i` is external `i - 1`.

use super::IddObjectType as T;

/// `(internal, external)` field index pairs
pub type FieldPairs = &'static [(usize, usize)];

/// Internal type and its external counterpart
pub const TYPE_PAIRS: &[(T, T)] = &[
    (T::OsVersion, T::Version),
    (T::OsScheduleTypeLimits, T::ScheduleTypeLimits),
    (T::OsScheduleCompact, T::ScheduleCompact),
    (T::OsScheduleConstant, T::ScheduleConstant),
    (T::OsCurveQuadratic, T::CurveQuadratic),
    (T::OsCurveCubic, T::CurveCubic),
    (T::OsCurveBiquadratic, T::CurveBiquadratic),
    (T::OsSiteWaterMainsTemperature, T::SiteWaterMainsTemperature),
    (T::OsSiteGroundTemperatureDeep, T::SiteGroundTemperatureDeep),
    (T::OsSiteGroundTemperatureShallow, T::SiteGroundTemperatureShallow),
    (T::OsSiteGroundTemperatureBuildingSurface, T::SiteGroundTemperatureBuildingSurface),
    (T::OsThermalZone, T::Zone),
    (T::OsFanConstantVolume, T::FanConstantVolume),
    (T::OsFanOnOff, T::FanOnOff),
    (T::OsCoilCoolingDXVariableSpeed, T::CoilCoolingDXVariableSpeed),
    (T::OsCoilHeatingElectric, T::CoilHeatingElectric),
    (T::OsCoilHeatingWater, T::CoilHeatingWater),
    (T::OsCoilHeatingDesuperheater, T::CoilHeatingDesuperheater),
    (T::OsAirLoopHVACUnitarySystem, T::AirLoopHVACUnitarySystem),
];

/// External counterpart of an internal type
pub fn external_type(internal: T) -> Option<T> {
    TYPE_PAIRS.iter().find(|(i, _)| *i == internal).map(|(_, e)| *e)
}

/// Internal counterpart of an external type
pub fn internal_type(external: T) -> Option<T> {
    TYPE_PAIRS.iter().find(|(_, e)| *e == external).map(|(i, _)| *i)
}

/// Whether the external layout is the internal one minus the handle
pub fn is_shifted(internal: T) -> bool {
    matches!(
        internal,
        T::OsScheduleTypeLimits
            | T::OsScheduleCompact
            | T::OsScheduleConstant
            | T::OsCurveQuadratic
            | T::OsCurveCubic
            | T::OsCurveBiquadratic
            | T::OsSiteGroundTemperatureDeep
            | T::OsSiteGroundTemperatureShallow
            | T::OsSiteGroundTemperatureBuildingSurface
    )
}

/// Field pairs of a non-shifted type, excluding fields handled specially
pub fn field_pairs(internal: T) -> FieldPairs {
    match internal {
        T::OsSiteWaterMainsTemperature => WATER_MAINS,
        T::OsThermalZone => ZONE,
        T::OsFanConstantVolume => FAN_CONSTANT_VOLUME,
        T::OsFanOnOff => FAN_ON_OFF,
        T::OsCoilCoolingDXVariableSpeed => COIL_COOLING_DX_VARIABLE_SPEED,
        T::OsCoilHeatingElectric => COIL_HEATING_ELECTRIC,
        T::OsCoilHeatingWater => COIL_HEATING_WATER,
        T::OsCoilHeatingDesuperheater => COIL_HEATING_DESUPERHEATER,
        T::OsAirLoopHVACUnitarySystem => UNITARY_SYSTEM,
        _ => &[],
    }
}

const WATER_MAINS: FieldPairs = &[(1, 1), (2, 2), (3, 3)];

const ZONE: FieldPairs = &[(2, 6), (3, 7), (4, 8)];

const FAN_CONSTANT_VOLUME: FieldPairs = &[(2, 1), (3, 2), (4, 3), (5, 4), (6, 5), (7, 6), (8, 9)];

const FAN_ON_OFF: FieldPairs = &[
    (2, 1),
    (3, 2),
    (4, 3),
    (5, 4),
    (6, 5),
    (7, 6),
    (8, 9),
    (9, 10),
    (10, 11),
];

const COIL_COOLING_DX_VARIABLE_SPEED: FieldPairs = &[
    (2, 4),
    (3, 5),
    (4, 6),
    (5, 7),
    (6, 8),
    (7, 9),
    (8, 10),
    (9, 11),
    (10, 12),
    (11, 13),
    (12, 14),
    (13, 15),
    (14, 16),
];

const COIL_HEATING_ELECTRIC: FieldPairs = &[(2, 1), (3, 2), (4, 3)];

const COIL_HEATING_WATER: FieldPairs = &[
    (2, 1),
    (3, 2),
    (4, 3),
    (5, 8),
    (6, 9),
    (7, 10),
    (8, 11),
    (9, 12),
    (10, 13),
    (11, 14),
];

/// The heating source is written with its object type, see [`desuperheater`]
const COIL_HEATING_DESUPERHEATER: FieldPairs = &[(2, 1), (3, 2), (5, 8)];

/// Components are written with their object type, see [`unitary`]
const UNITARY_SYSTEM: FieldPairs = &[
    (2, 1),
    (3, 2),
    (4, 3),
    (5, 4),
    (7, 9),
    (8, 10),
    (10, 13),
    (12, 16),
    (13, 17),
    (14, 18),
    (16, 21),
    (17, 22),
    (18, 23),
    (19, 24),
    (20, 25),
    (21, 26),
    (22, 27),
    (23, 28),
    (24, 29),
    (25, 30),
    (26, 31),
];

pub mod water_mains {
    pub const CALCULATION_METHOD: usize = 0;
    pub const SCHEDULE: usize = 1;
    pub const ANNUAL_AVERAGE: usize = 2;
    pub const MAXIMUM_DIFFERENCE: usize = 3;
}

pub mod variable_speed {
    pub const NUMBER_OF_SPEEDS: usize = 3;
    /// Internal speed data fields, in external group order
    pub const SPEED_FIELDS: [usize; 10] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
}

pub mod water_coil {
    pub const WATER_INLET_NODE: usize = 4;
    pub const WATER_OUTLET_NODE: usize = 5;
}

pub mod desuperheater {
    pub const INTERNAL_SOURCE: usize = 4;
    pub const SOURCE_TYPE: usize = 5;
    pub const SOURCE_NAME: usize = 6;
}

/// A component slot of the unitary system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSlot {
    pub internal: usize,
    pub type_index: usize,
    pub name_index: usize,
    /// Word used in derived node names
    pub label: &'static str,
}

pub mod unitary {
    use super::ComponentSlot;

    pub const AIR_INLET_NODE: usize = 5;
    pub const AIR_OUTLET_NODE: usize = 6;
    pub const FAN_PLACEMENT: usize = 9;
    pub const INTERNAL_FAN_PLACEMENT: usize = 7;

    pub const FAN: ComponentSlot = ComponentSlot {
        internal: 6,
        type_index: 7,
        name_index: 8,
        label: "Fan",
    };
    pub const COOLING_COIL: ComponentSlot = ComponentSlot {
        internal: 11,
        type_index: 14,
        name_index: 15,
        label: "Cooling Coil",
    };
    pub const HEATING_COIL: ComponentSlot = ComponentSlot {
        internal: 9,
        type_index: 11,
        name_index: 12,
        label: "Heating Coil",
    };
    pub const SUPPLEMENTAL_HEATING_COIL: ComponentSlot = ComponentSlot {
        internal: 15,
        type_index: 19,
        name_index: 20,
        label: "Supplemental Coil",
    };
}

/// Air inlet and outlet node fields of an external air-side component
pub fn air_nodes(external: T) -> Option<(usize, usize)> {
    match external {
        T::FanConstantVolume | T::FanOnOff => Some((7, 8)),
        T::CoilCoolingDXVariableSpeed => Some((1, 2)),
        T::CoilHeatingElectric => Some((4, 5)),
        T::CoilHeatingWater => Some((6, 7)),
        T::CoilHeatingDesuperheater => Some((3, 4)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idd::{IddFieldKind, IddFile};

    #[test]
    fn test_type_pairs_cross_dialects() {
        for (internal, external) in TYPE_PAIRS {
            assert_eq!(external_type(*internal), Some(*external));
            assert_eq!(internal_type(*external), Some(*internal));
            assert!(IddFile::openstudio().object(*internal).is_some());
            assert!(IddFile::energyplus().object(*external).is_some());
        }
        assert_eq!(external_type(T::OsPlantLoop), None);
    }

    #[test]
    fn test_paired_fields_have_matching_kinds() {
        let internal_idd = IddFile::openstudio();
        let external_idd = IddFile::energyplus();
        for (internal, external) in TYPE_PAIRS {
            let (Some(i), Some(e)) = (internal_idd.object(*internal), external_idd.object(*external)) else {
                panic!("missing schema for {internal}");
            };
            for (from, to) in field_pairs(*internal) {
                let (Some(a), Some(b)) = (i.field(*from), e.field(*to)) else {
                    panic!("{internal} field {from} or {external} field {to} missing");
                };
                assert_eq!(
                    std::mem::discriminant(&a.kind),
                    std::mem::discriminant(&b.kind),
                    "{internal} '{}' vs {external} '{}'",
                    a.name,
                    b.name
                );
            }
        }
    }

    #[test]
    fn test_unitary_doas_temperature_uses_energyplus_name() {
        let internal = IddFile::openstudio();
        let external = IddFile::energyplus();
        let i = internal.object(T::OsAirLoopHVACUnitarySystem).unwrap();
        let e = external.object(T::AirLoopHVACUnitarySystem).unwrap();
        let (from, to) = field_pairs(T::OsAirLoopHVACUnitarySystem)
            .iter()
            .find(|(from, _)| i.field(*from).unwrap().name == "DOAS DX Cooling Coil Leaving Minimum Air Temperature")
            .copied()
            .unwrap();
        assert_eq!((from, to), (13, 17));
        assert_eq!(e.field(to).unwrap().name, "DOAS DX Cooling Coil Leaving Minimum Air Temperature");
        assert_eq!(e.field(28).unwrap().name, "Maximum Supply Air Temperature");
    }

    #[test]
    fn test_shifted_layouts_line_up() {
        let internal_idd = IddFile::openstudio();
        let external_idd = IddFile::energyplus();
        for (internal, external) in TYPE_PAIRS.iter().filter(|(i, _)| is_shifted(*i)) {
            let (Some(i), Some(e)) = (internal_idd.object(*internal), external_idd.object(*external)) else {
                panic!("missing schema for {internal}");
            };
            assert_eq!(i.num_fixed_fields(), e.num_fixed_fields() + 1, "{internal}");
            assert_eq!(i.extensible_group_len(), e.extensible_group_len(), "{internal}");
            assert_eq!(i.field(0).map(|f| &f.kind), Some(&IddFieldKind::Handle));
        }
    }

    #[test]
    fn test_air_nodes_are_text_fields() {
        let external_idd = IddFile::energyplus();
        for object_type in [
            T::FanConstantVolume,
            T::FanOnOff,
            T::CoilCoolingDXVariableSpeed,
            T::CoilHeatingElectric,
            T::CoilHeatingWater,
            T::CoilHeatingDesuperheater,
        ] {
            let (inlet, outlet) = air_nodes(object_type).unwrap_or_default();
            let idd = external_idd.object(object_type).unwrap();
            assert!(idd.field(inlet).unwrap().name.contains("Inlet Node"));
            assert!(idd.field(outlet).unwrap().name.contains("Outlet Node"));
        }
    }
}
