//! External (EnergyPlus IDF) record layouts

use super::openstudio::{
    output_limits, x_limits, xy_limits, CURVE_INPUT_UNITS, CURVE_OUTPUT_UNITS, FLOW_METHODS,
    MONTH_FIELDS, NUMERIC_TYPES, UNIT_TYPES, YES_NO,
};
use super::refs::*;
use super::{Dialect, IddField, IddFile, IddObject, IddObjectType as T, AUTOSIZE};

const FAN_TYPES: &[&str] = &["Fan:ConstantVolume", "Fan:OnOff"];
const HEATING_COIL_TYPES: &[&str] = &[
    "Coil:Heating:Electric",
    "Coil:Heating:Water",
    "Coil:Heating:Desuperheater",
];
const COOLING_COIL_TYPES: &[&str] = &["Coil:Cooling:DX:VariableSpeed"];

pub(super) fn build() -> IddFile {
    IddFile::new(
        Dialect::EnergyPlus,
        [
            version(),
            schedule_type_limits(),
            schedule_compact(),
            schedule_constant(),
            curve_quadratic(),
            curve_cubic(),
            curve_biquadratic(),
            site_water_mains_temperature(),
            ground_temperature(T::SiteGroundTemperatureDeep, "16"),
            ground_temperature(T::SiteGroundTemperatureShallow, "13"),
            ground_temperature(T::SiteGroundTemperatureBuildingSurface, "18"),
            zone(),
            fan_constant_volume(),
            fan_on_off(),
            coil_cooling_dx_variable_speed(),
            coil_heating_electric(),
            coil_heating_water(),
            coil_heating_desuperheater(),
            unitary_system(),
        ],
    )
}

fn version() -> IddObject {
    IddObject::new(T::Version)
        .add_field(IddField::alpha("Version Identifier").default("9.6"))
        .unique()
}

fn schedule_type_limits() -> IddObject {
    IddObject::new(T::ScheduleTypeLimits)
        .add_name()
        .add_field(IddField::real("Lower Limit Value"))
        .add_field(IddField::real("Upper Limit Value"))
        .add_field(IddField::choice("Numeric Type", NUMERIC_TYPES))
        .add_field(IddField::choice("Unit Type", UNIT_TYPES).default("Dimensionless"))
        .reference(SCHEDULE_TYPE_LIMITS_NAMES)
}

fn schedule_compact() -> IddObject {
    IddObject::new(T::ScheduleCompact)
        .add_name()
        .add_field(IddField::object("Schedule Type Limits Name", &[SCHEDULE_TYPE_LIMITS_NAMES]))
        .add_extensible(IddField::alpha("Field"))
        .reference(SCHEDULE_NAMES)
}

fn schedule_constant() -> IddObject {
    IddObject::new(T::ScheduleConstant)
        .add_name()
        .add_field(IddField::object("Schedule Type Limits Name", &[SCHEDULE_TYPE_LIMITS_NAMES]))
        .add_field(IddField::real("Hourly Value").default("0"))
        .reference(SCHEDULE_NAMES)
}

fn curve_quadratic() -> IddObject {
    let object = IddObject::new(T::CurveQuadratic)
        .add_name()
        .add_field(IddField::real("Coefficient1 Constant"))
        .add_field(IddField::real("Coefficient2 x"))
        .add_field(IddField::real("Coefficient3 x**2"));
    output_limits(x_limits(object))
        .add_field(IddField::choice("Input Unit Type for X", CURVE_INPUT_UNITS).default("Dimensionless"))
        .add_field(IddField::choice("Output Unit Type", CURVE_OUTPUT_UNITS).default("Dimensionless"))
        .reference(UNIVARIATE_FUNCTIONS)
}

fn curve_cubic() -> IddObject {
    let object = IddObject::new(T::CurveCubic)
        .add_name()
        .add_field(IddField::real("Coefficient1 Constant"))
        .add_field(IddField::real("Coefficient2 x"))
        .add_field(IddField::real("Coefficient3 x**2"))
        .add_field(IddField::real("Coefficient4 x**3"));
    output_limits(x_limits(object))
        .add_field(IddField::choice("Input Unit Type for X", CURVE_INPUT_UNITS).default("Dimensionless"))
        .add_field(IddField::choice("Output Unit Type", CURVE_OUTPUT_UNITS).default("Dimensionless"))
        .reference(UNIVARIATE_FUNCTIONS)
}

fn curve_biquadratic() -> IddObject {
    let object = IddObject::new(T::CurveBiquadratic)
        .add_name()
        .add_field(IddField::real("Coefficient1 Constant"))
        .add_field(IddField::real("Coefficient2 x"))
        .add_field(IddField::real("Coefficient3 x**2"))
        .add_field(IddField::real("Coefficient4 y"))
        .add_field(IddField::real("Coefficient5 y**2"))
        .add_field(IddField::real("Coefficient6 x*y"));
    output_limits(xy_limits(object))
        .add_field(IddField::choice("Input Unit Type for X", CURVE_INPUT_UNITS).default("Dimensionless"))
        .add_field(IddField::choice("Input Unit Type for Y", CURVE_INPUT_UNITS).default("Dimensionless"))
        .add_field(IddField::choice("Output Unit Type", CURVE_OUTPUT_UNITS).default("Dimensionless"))
        .reference(BIVARIATE_FUNCTIONS)
}

fn site_water_mains_temperature() -> IddObject {
    IddObject::new(T::SiteWaterMainsTemperature)
        .add_field(IddField::choice(
            "Calculation Method",
            &["Schedule", "Correlation", "CorrelationFromWeatherFile"],
        ).default("CorrelationFromWeatherFile"))
        .add_field(IddField::object("Temperature Schedule Name", &[SCHEDULE_NAMES]))
        .add_field(IddField::real("Annual Average Outdoor Air Temperature"))
        .add_field(IddField::real("Maximum Difference In Monthly Average Outdoor Air Temperatures").min(0.0))
        .unique()
}

fn ground_temperature(object_type: T, default: &'static str) -> IddObject {
    MONTH_FIELDS
        .iter()
        .fold(IddObject::new(object_type), |object, name| {
            object.add_field(IddField::real(name).default(default))
        })
        .unique()
}

fn zone() -> IddObject {
    IddObject::new(T::Zone)
        .add_name()
        .add_field(IddField::real("Direction of Relative North").default("0"))
        .add_field(IddField::real("X Origin").default("0"))
        .add_field(IddField::real("Y Origin").default("0"))
        .add_field(IddField::real("Z Origin").default("0"))
        .add_field(IddField::integer("Type").default("1"))
        .add_field(IddField::integer("Multiplier").default("1").min(1.0))
        .add_field(IddField::real("Ceiling Height").autocalculatable().default("autocalculate"))
        .add_field(IddField::real("Volume").autocalculatable().default("autocalculate"))
        .reference(ZONE_NAMES)
}

fn fan_constant_volume() -> IddObject {
    IddObject::new(T::FanConstantVolume)
        .add_name()
        .add_field(IddField::object("Availability Schedule Name", &[SCHEDULE_NAMES]))
        .add_field(IddField::real("Fan Total Efficiency").default("0.7").min_exclusive(0.0).max(1.0))
        .add_field(IddField::real("Pressure Rise"))
        .add_field(IddField::real("Maximum Flow Rate").autosizable().min(0.0))
        .add_field(IddField::real("Motor Efficiency").default("0.9").min_exclusive(0.0).max(1.0))
        .add_field(IddField::real("Motor In Airstream Fraction").default("1.0").min(0.0).max(1.0))
        .add_field(IddField::alpha("Air Inlet Node Name"))
        .add_field(IddField::alpha("Air Outlet Node Name"))
        .add_field(IddField::alpha("End-Use Subcategory").default("General"))
        .reference(FAN_NAMES)
}

fn fan_on_off() -> IddObject {
    IddObject::new(T::FanOnOff)
        .add_name()
        .add_field(IddField::object("Availability Schedule Name", &[SCHEDULE_NAMES]))
        .add_field(IddField::real("Fan Total Efficiency").default("0.6").min_exclusive(0.0).max(1.0))
        .add_field(IddField::real("Pressure Rise"))
        .add_field(IddField::real("Maximum Flow Rate").autosizable().min(0.0))
        .add_field(IddField::real("Motor Efficiency").default("0.8").min_exclusive(0.0).max(1.0))
        .add_field(IddField::real("Motor In Airstream Fraction").default("1.0").min(0.0).max(1.0))
        .add_field(IddField::alpha("Air Inlet Node Name"))
        .add_field(IddField::alpha("Air Outlet Node Name"))
        .add_field(IddField::object(
            "Fan Power Ratio Function of Speed Ratio Curve Name",
            &[UNIVARIATE_FUNCTIONS],
        ))
        .add_field(IddField::object(
            "Fan Efficiency Ratio Function of Speed Ratio Curve Name",
            &[UNIVARIATE_FUNCTIONS],
        ))
        .add_field(IddField::alpha("End-Use Subcategory").default("General"))
        .reference(FAN_NAMES)
}

fn coil_cooling_dx_variable_speed() -> IddObject {
    IddObject::new(T::CoilCoolingDXVariableSpeed)
        .add_name()
        .add_field(IddField::alpha("Indoor Air Inlet Node Name"))
        .add_field(IddField::alpha("Indoor Air Outlet Node Name"))
        .add_field(IddField::integer("Number of Speeds").default("2").min(1.0).max(10.0))
        .add_field(IddField::integer("Nominal Speed Level").default("2").min(1.0))
        .add_field(IddField::real("Gross Rated Total Cooling Capacity At Selected Nominal Speed Level")
            .autosizable()
            .default(AUTOSIZE))
        .add_field(IddField::real("Rated Air Flow Rate At Selected Nominal Speed Level")
            .autosizable()
            .default(AUTOSIZE))
        .add_field(IddField::real("Nominal Time for Condensate to Begin Leaving the Coil")
            .default("0")
            .min(0.0))
        .add_field(IddField::real("Initial Moisture Evaporation Rate Divided by Steady-State AC Latent Capacity")
            .default("0")
            .min(0.0))
        .add_field(IddField::object("Energy Part Load Fraction Curve Name", &[UNIVARIATE_FUNCTIONS]))
        .add_field(IddField::choice("Condenser Type", &["AirCooled", "EvaporativelyCooled"]).default("AirCooled"))
        .add_field(IddField::real("Evaporative Condenser Pump Rated Power Consumption")
            .autosizable()
            .default("0")
            .min(0.0))
        .add_field(IddField::real("Crankcase Heater Capacity").default("0").min(0.0))
        .add_field(IddField::real("Maximum Outdoor Dry-Bulb Temperature for Crankcase Heater Operation")
            .default("10")
            .min(0.0))
        .add_field(IddField::real("Basin Heater Capacity").default("0").min(0.0))
        .add_field(IddField::real("Basin Heater Setpoint Temperature").default("2").min(2.0))
        .add_field(IddField::object("Basin Heater Operating Schedule Name", &[SCHEDULE_NAMES]))
        .add_extensible(IddField::real("Speed Reference Unit Gross Rated Total Cooling Capacity").min_exclusive(0.0))
        .add_extensible(IddField::real("Speed Reference Unit Gross Rated Sensible Heat Ratio")
            .min_exclusive(0.0)
            .max(1.0))
        .add_extensible(IddField::real("Speed Reference Unit Gross Rated Cooling COP").min_exclusive(0.0))
        .add_extensible(IddField::real("Speed Reference Unit Rated Air Flow Rate").min_exclusive(0.0))
        .add_extensible(IddField::real("Speed Reference Unit Rated Condenser Air Flow Rate").min(0.0))
        .add_extensible(IddField::real("Speed Reference Unit Rated Pad Effectiveness of Evap Precooling")
            .min(0.0)
            .max(1.0))
        .add_extensible(IddField::object(
            "Speed Total Cooling Capacity Function of Temperature Curve Name",
            &[BIVARIATE_FUNCTIONS],
        ))
        .add_extensible(IddField::object(
            "Speed Total Cooling Capacity Function of Air Flow Fraction Curve Name",
            &[UNIVARIATE_FUNCTIONS],
        ))
        .add_extensible(IddField::object(
            "Speed Energy Input Ratio Function of Temperature Curve Name",
            &[BIVARIATE_FUNCTIONS],
        ))
        .add_extensible(IddField::object(
            "Speed Energy Input Ratio Function of Air Flow Fraction Curve Name",
            &[UNIVARIATE_FUNCTIONS],
        ))
        .reference(COOLING_COIL_NAMES)
        .reference(DESUPERHEATER_SOURCE_NAMES)
}

fn coil_heating_electric() -> IddObject {
    IddObject::new(T::CoilHeatingElectric)
        .add_name()
        .add_field(IddField::object("Availability Schedule Name", &[SCHEDULE_NAMES]))
        .add_field(IddField::real("Efficiency").default("1.0").min_exclusive(0.0).max(1.0))
        .add_field(IddField::real("Nominal Capacity").autosizable().min(0.0))
        .add_field(IddField::alpha("Air Inlet Node Name"))
        .add_field(IddField::alpha("Air Outlet Node Name"))
        .reference(HEATING_COIL_NAMES)
}

fn coil_heating_water() -> IddObject {
    IddObject::new(T::CoilHeatingWater)
        .add_name()
        .add_field(IddField::object("Availability Schedule Name", &[SCHEDULE_NAMES]))
        .add_field(IddField::real("U-Factor Times Area Value").autosizable().default(AUTOSIZE).min(0.0))
        .add_field(IddField::real("Maximum Water Flow Rate").autosizable().default(AUTOSIZE).min(0.0))
        .add_field(IddField::alpha("Water Inlet Node Name"))
        .add_field(IddField::alpha("Water Outlet Node Name"))
        .add_field(IddField::alpha("Air Inlet Node Name"))
        .add_field(IddField::alpha("Air Outlet Node Name"))
        .add_field(IddField::choice(
            "Performance Input Method",
            &["UFactorTimesAreaAndDesignWaterFlowRate", "NominalCapacity"],
        ).default("UFactorTimesAreaAndDesignWaterFlowRate"))
        .add_field(IddField::real("Rated Capacity").autosizable().default(AUTOSIZE).min(0.0))
        .add_field(IddField::real("Rated Inlet Water Temperature").default("82.2"))
        .add_field(IddField::real("Rated Inlet Air Temperature").default("16.6"))
        .add_field(IddField::real("Rated Outlet Water Temperature").default("71.1"))
        .add_field(IddField::real("Rated Outlet Air Temperature").default("32.2"))
        .add_field(IddField::real("Rated Ratio for Air and Water Convection").default("0.5").min_exclusive(0.0))
        .reference(HEATING_COIL_NAMES)
}

fn coil_heating_desuperheater() -> IddObject {
    IddObject::new(T::CoilHeatingDesuperheater)
        .add_name()
        .add_field(IddField::object("Availability Schedule Name", &[SCHEDULE_NAMES]))
        .add_field(IddField::real("Heat Reclaim Recovery Efficiency").default("0.8").min(0.0).max(0.9))
        .add_field(IddField::alpha("Air Inlet Node Name"))
        .add_field(IddField::alpha("Air Outlet Node Name"))
        .add_field(IddField::choice("Heating Source Object Type", COOLING_COIL_TYPES))
        .add_field(IddField::object("Heating Source Name", &[DESUPERHEATER_SOURCE_NAMES]))
        .add_field(IddField::alpha("Temperature Setpoint Node Name"))
        .add_field(IddField::real("Parasitic Electric Load").default("0").min(0.0))
        .reference(HEATING_COIL_NAMES)
}

fn unitary_system() -> IddObject {
    IddObject::new(T::AirLoopHVACUnitarySystem)
        .add_name()
        .add_field(IddField::choice("Control Type", &["Load", "SetPoint", "SingleZoneVAV"]).default("Load"))
        .add_field(IddField::object("Controlling Zone or Thermostat Location", &[ZONE_NAMES]))
        .add_field(IddField::choice(
            "Dehumidification Control Type",
            &["None", "Multimode", "CoolReheat"],
        ).default("None"))
        .add_field(IddField::object("Availability Schedule Name", &[SCHEDULE_NAMES]))
        .add_field(IddField::alpha("Air Inlet Node Name"))
        .add_field(IddField::alpha("Air Outlet Node Name"))
        .add_field(IddField::choice("Supply Fan Object Type", FAN_TYPES))
        .add_field(IddField::object("Supply Fan Name", &[FAN_NAMES]))
        .add_field(IddField::choice("Fan Placement", &["BlowThrough", "DrawThrough"]))
        .add_field(IddField::object("Supply Air Fan Operating Mode Schedule Name", &[SCHEDULE_NAMES]))
        .add_field(IddField::choice("Heating Coil Object Type", HEATING_COIL_TYPES))
        .add_field(IddField::object("Heating Coil Name", &[HEATING_COIL_NAMES]))
        .add_field(IddField::real("DX Heating Coil Sizing Ratio").default("1.0").min_exclusive(0.0))
        .add_field(IddField::choice("Cooling Coil Object Type", COOLING_COIL_TYPES))
        .add_field(IddField::object("Cooling Coil Name", &[COOLING_COIL_NAMES]))
        .add_field(IddField::choice("Use DOAS DX Cooling Coil", YES_NO).default("No"))
        .add_field(IddField::real("DOAS DX Cooling Coil Leaving Minimum Air Temperature")
            .autosizable()
            .default("2.0")
            .min(0.0)
            .max(7.2))
        .add_field(IddField::choice(
            "Latent Load Control",
            &[
                "SensibleOnlyLoadControl",
                "LatentOnlyLoadControl",
                "LatentWithSensibleLoadControl",
                "LatentOrSensibleLoadControl",
            ],
        ).default("SensibleOnlyLoadControl"))
        .add_field(IddField::choice("Supplemental Heating Coil Object Type", HEATING_COIL_TYPES))
        .add_field(IddField::object("Supplemental Heating Coil Name", &[HEATING_COIL_NAMES]))
        .add_field(IddField::choice("Cooling Supply Air Flow Rate Method", FLOW_METHODS))
        .add_field(IddField::real("Cooling Supply Air Flow Rate").autosizable().min(0.0))
        .add_field(IddField::choice("Heating Supply Air Flow Rate Method", FLOW_METHODS))
        .add_field(IddField::real("Heating Supply Air Flow Rate").autosizable().min(0.0))
        .add_field(IddField::choice("No Load Supply Air Flow Rate Method", FLOW_METHODS))
        .add_field(IddField::real("No Load Supply Air Flow Rate").autosizable().min(0.0))
        .add_field(IddField::choice("No Load Supply Air Flow Rate Control Set To Low Speed", YES_NO).default("Yes"))
        .add_field(IddField::real("Maximum Supply Air Temperature").autosizable().default("80"))
        .add_field(IddField::real("Maximum Outdoor Dry-Bulb Temperature for Supplemental Heater Operation")
            .default("21"))
        .add_field(IddField::real("Ancillary On-Cycle Electric Power").default("0").min(0.0))
        .add_field(IddField::real("Ancillary Off-Cycle Electric Power").default("0").min(0.0))
        .reference(UNITARY_SYSTEM_NAMES)
}
