//! Heating and cooling coils

pub mod cooling_dx_variable_speed;
pub mod heating_desuperheater;
pub mod heating_electric;
pub mod heating_water;

pub use cooling_dx_variable_speed::{CoilCoolingDXVariableSpeed, CoilCoolingDXVariableSpeedSpeedData};
pub use heating_desuperheater::CoilHeatingDesuperheater;
pub use heating_electric::CoilHeatingElectric;
pub use heating_water::CoilHeatingWater;

use super::macros::model_object_enum;

model_object_enum! {
    /// Any cooling coil a unitary system accepts
    CoolingCoil {
        DXVariableSpeed(CoilCoolingDXVariableSpeed),
    }
}

model_object_enum! {
    /// Any heating coil, main or supplemental
    HeatingCoil {
        Electric(CoilHeatingElectric),
        Water(CoilHeatingWater),
        Desuperheater(CoilHeatingDesuperheater),
    }
}

model_object_enum! {
    /// Coils whose rejected heat a desuperheater can reclaim
    DesuperheaterSource {
        CoilCoolingDXVariableSpeed(CoilCoolingDXVariableSpeed),
    }
}
