//! Internal (OpenStudio) record layouts

use super::refs::*;
use super::{Dialect, IddField, IddFile, IddObject, IddObjectType as T, AUTOSIZE};

pub(super) const YES_NO: &[&str] = &["Yes", "No"];
pub(super) const NUMERIC_TYPES: &[&str] = &["Continuous", "Discrete"];
pub(super) const UNIT_TYPES: &[&str] = &[
    "Dimensionless",
    "Temperature",
    "DeltaTemperature",
    "PrecipitationRate",
    "Angle",
    "ConvectionCoefficient",
    "ActivityLevel",
    "Velocity",
    "Capacity",
    "Power",
    "Availability",
    "Percent",
    "Control",
    "Mode",
    "ControlMode",
];
pub(super) const CURVE_INPUT_UNITS: &[&str] = &[
    "Dimensionless",
    "Temperature",
    "VolumetricFlow",
    "MassFlow",
    "Power",
    "Distance",
];
pub(super) const CURVE_OUTPUT_UNITS: &[&str] = &["Dimensionless", "Capacity", "Power", "Temperature"];
pub(super) const FLOW_METHODS: &[&str] = &[
    "None",
    "SupplyAirFlowRate",
    "FlowPerFloorArea",
    "FractionOfAutosizedCoolingValue",
    "FractionOfAutosizedHeatingValue",
    "FlowPerCoolingCapacity",
    "FlowPerHeatingCapacity",
];

pub(super) fn build() -> IddFile {
    IddFile::new(
        Dialect::OpenStudio,
        [
            version(),
            model_object_list(),
            schedule_type_limits(),
            schedule_compact(),
            schedule_constant(),
            curve_quadratic(),
            curve_cubic(),
            curve_biquadratic(),
            site_water_mains_temperature(),
            ground_temperature(T::OsSiteGroundTemperatureDeep, "16"),
            ground_temperature(T::OsSiteGroundTemperatureShallow, "13"),
            ground_temperature(T::OsSiteGroundTemperatureBuildingSurface, "18"),
            thermal_zone(),
            plant_loop(),
            fan_constant_volume(),
            fan_on_off(),
            coil_cooling_dx_variable_speed(),
            coil_cooling_dx_variable_speed_speed_data(),
            coil_heating_electric(),
            coil_heating_water(),
            coil_heating_desuperheater(),
            unitary_system(),
        ],
    )
}

fn version() -> IddObject {
    IddObject::new(T::OsVersion)
        .add_handle()
        .add_field(IddField::alpha("Version Identifier").default("3.3.0"))
        .unique()
}

fn model_object_list() -> IddObject {
    IddObject::new(T::OsModelObjectList)
        .add_handle()
        .add_name()
        .add_extensible(IddField::object("Model Object", &[ALL_OBJECTS]))
        .reference(MODEL_OBJECT_LISTS)
}

fn schedule_type_limits() -> IddObject {
    IddObject::new(T::OsScheduleTypeLimits)
        .add_handle()
        .add_name()
        .add_field(IddField::real("Lower Limit Value"))
        .add_field(IddField::real("Upper Limit Value"))
        .add_field(IddField::choice("Numeric Type", NUMERIC_TYPES))
        .add_field(IddField::choice("Unit Type", UNIT_TYPES).default("Dimensionless"))
        .reference(SCHEDULE_TYPE_LIMITS_NAMES)
        .resource()
}

fn schedule_compact() -> IddObject {
    IddObject::new(T::OsScheduleCompact)
        .add_handle()
        .add_name()
        .add_field(IddField::object("Schedule Type Limits Name", &[SCHEDULE_TYPE_LIMITS_NAMES]))
        .add_extensible(IddField::alpha("Field"))
        .reference(SCHEDULE_NAMES)
        .resource()
}

fn schedule_constant() -> IddObject {
    IddObject::new(T::OsScheduleConstant)
        .add_handle()
        .add_name()
        .add_field(IddField::object("Schedule Type Limits Name", &[SCHEDULE_TYPE_LIMITS_NAMES]))
        .add_field(IddField::real("Value").default("0"))
        .reference(SCHEDULE_NAMES)
        .resource()
}

pub(super) fn x_limits(object: IddObject) -> IddObject {
    object
        .add_field(IddField::real("Minimum Value of x"))
        .add_field(IddField::real("Maximum Value of x"))
}

pub(super) fn xy_limits(object: IddObject) -> IddObject {
    x_limits(object)
        .add_field(IddField::real("Minimum Value of y"))
        .add_field(IddField::real("Maximum Value of y"))
}

pub(super) fn output_limits(object: IddObject) -> IddObject {
    object
        .add_field(IddField::real("Minimum Curve Output"))
        .add_field(IddField::real("Maximum Curve Output"))
}

fn curve_quadratic() -> IddObject {
    let object = IddObject::new(T::OsCurveQuadratic)
        .add_handle()
        .add_name()
        .add_field(IddField::real("Coefficient1 Constant").default("0"))
        .add_field(IddField::real("Coefficient2 x").default("0"))
        .add_field(IddField::real("Coefficient3 x**2").default("0"));
    output_limits(x_limits(object))
        .add_field(IddField::choice("Input Unit Type for X", CURVE_INPUT_UNITS).default("Dimensionless"))
        .add_field(IddField::choice("Output Unit Type", CURVE_OUTPUT_UNITS).default("Dimensionless"))
        .reference(UNIVARIATE_FUNCTIONS)
        .resource()
}

fn curve_cubic() -> IddObject {
    let object = IddObject::new(T::OsCurveCubic)
        .add_handle()
        .add_name()
        .add_field(IddField::real("Coefficient1 Constant").default("0"))
        .add_field(IddField::real("Coefficient2 x").default("0"))
        .add_field(IddField::real("Coefficient3 x**2").default("0"))
        .add_field(IddField::real("Coefficient4 x**3").default("0"));
    output_limits(x_limits(object))
        .add_field(IddField::choice("Input Unit Type for X", CURVE_INPUT_UNITS).default("Dimensionless"))
        .add_field(IddField::choice("Output Unit Type", CURVE_OUTPUT_UNITS).default("Dimensionless"))
        .reference(UNIVARIATE_FUNCTIONS)
        .resource()
}

fn curve_biquadratic() -> IddObject {
    let object = IddObject::new(T::OsCurveBiquadratic)
        .add_handle()
        .add_name()
        .add_field(IddField::real("Coefficient1 Constant").default("0"))
        .add_field(IddField::real("Coefficient2 x").default("0"))
        .add_field(IddField::real("Coefficient3 x**2").default("0"))
        .add_field(IddField::real("Coefficient4 y").default("0"))
        .add_field(IddField::real("Coefficient5 y**2").default("0"))
        .add_field(IddField::real("Coefficient6 x*y").default("0"));
    output_limits(xy_limits(object))
        .add_field(IddField::choice("Input Unit Type for X", CURVE_INPUT_UNITS).default("Dimensionless"))
        .add_field(IddField::choice("Input Unit Type for Y", CURVE_INPUT_UNITS).default("Dimensionless"))
        .add_field(IddField::choice("Output Unit Type", CURVE_OUTPUT_UNITS).default("Dimensionless"))
        .reference(BIVARIATE_FUNCTIONS)
        .resource()
}

fn site_water_mains_temperature() -> IddObject {
    IddObject::new(T::OsSiteWaterMainsTemperature)
        .add_handle()
        .add_field(IddField::object("Temperature Schedule Name", &[SCHEDULE_NAMES]))
        .add_field(IddField::real("Annual Average Outdoor Air Temperature"))
        .add_field(IddField::real("Maximum Difference In Monthly Average Outdoor Air Temperatures").min(0.0))
        .unique()
}

pub(super) const MONTH_FIELDS: [&str; 12] = [
    "January Ground Temperature",
    "February Ground Temperature",
    "March Ground Temperature",
    "April Ground Temperature",
    "May Ground Temperature",
    "June Ground Temperature",
    "July Ground Temperature",
    "August Ground Temperature",
    "September Ground Temperature",
    "October Ground Temperature",
    "November Ground Temperature",
    "December Ground Temperature",
];

fn ground_temperature(object_type: T, default: &'static str) -> IddObject {
    MONTH_FIELDS
        .iter()
        .fold(IddObject::new(object_type).add_handle(), |object, name| {
            object.add_field(IddField::real(name).default(default))
        })
        .unique()
}

fn thermal_zone() -> IddObject {
    IddObject::new(T::OsThermalZone)
        .add_handle()
        .add_name()
        .add_field(IddField::integer("Multiplier").default("1").min(1.0))
        .add_field(IddField::real("Ceiling Height").autocalculatable().default("autocalculate"))
        .add_field(IddField::real("Volume").autocalculatable().default("autocalculate"))
        .reference(ZONE_NAMES)
}

fn plant_loop() -> IddObject {
    IddObject::new(T::OsPlantLoop)
        .add_handle()
        .add_name()
        .add_field(IddField::choice(
            "Fluid Type",
            &["Water", "Steam", "PropyleneGlycol", "EthyleneGlycol"],
        ).default("Water"))
        .add_field(IddField::real("Maximum Loop Temperature").default("100"))
        .add_field(IddField::real("Minimum Loop Temperature").default("0"))
        .add_field(IddField::real("Maximum Loop Flow Rate").autosizable().default(AUTOSIZE).min(0.0))
        .add_field(IddField::object("Demand Component List Name", &[MODEL_OBJECT_LISTS]))
        .reference(PLANT_LOOP_NAMES)
}

fn fan_constant_volume() -> IddObject {
    IddObject::new(T::OsFanConstantVolume)
        .add_handle()
        .add_name()
        .add_field(IddField::object("Availability Schedule Name", &[SCHEDULE_NAMES]))
        .add_field(IddField::real("Fan Total Efficiency").default("0.7").min_exclusive(0.0).max(1.0))
        .add_field(IddField::real("Pressure Rise").default("250"))
        .add_field(IddField::real("Maximum Flow Rate").autosizable().default(AUTOSIZE).min(0.0))
        .add_field(IddField::real("Motor Efficiency").default("0.9").min_exclusive(0.0).max(1.0))
        .add_field(IddField::real("Motor In Airstream Fraction").default("1.0").min(0.0).max(1.0))
        .add_field(IddField::alpha("End-Use Subcategory").default("General"))
        .reference(FAN_NAMES)
}

fn fan_on_off() -> IddObject {
    IddObject::new(T::OsFanOnOff)
        .add_handle()
        .add_name()
        .add_field(IddField::object("Availability Schedule Name", &[SCHEDULE_NAMES]))
        .add_field(IddField::real("Fan Total Efficiency").default("0.6").min_exclusive(0.0).max(1.0))
        .add_field(IddField::real("Pressure Rise").default("300"))
        .add_field(IddField::real("Maximum Flow Rate").autosizable().default(AUTOSIZE).min(0.0))
        .add_field(IddField::real("Motor Efficiency").default("0.8").min_exclusive(0.0).max(1.0))
        .add_field(IddField::real("Motor In Airstream Fraction").default("1.0").min(0.0).max(1.0))
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
    IddObject::new(T::OsCoilCoolingDXVariableSpeed)
        .add_handle()
        .add_name()
        .add_field(IddField::integer("Nominal Speed Level").default("1").min(1.0))
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
        .add_field(IddField::object("Speed Data List", &[MODEL_OBJECT_LISTS]))
        .reference(COOLING_COIL_NAMES)
        .reference(DESUPERHEATER_SOURCE_NAMES)
}

fn coil_cooling_dx_variable_speed_speed_data() -> IddObject {
    IddObject::new(T::OsCoilCoolingDXVariableSpeedSpeedData)
        .add_handle()
        .add_name()
        .add_field(IddField::real("Reference Unit Gross Rated Total Cooling Capacity")
            .default("1524.1")
            .min_exclusive(0.0))
        .add_field(IddField::real("Reference Unit Gross Rated Sensible Heat Ratio")
            .default("0.75")
            .min_exclusive(0.0)
            .max(1.0))
        .add_field(IddField::real("Reference Unit Gross Rated Cooling COP").default("4").min_exclusive(0.0))
        .add_field(IddField::real("Reference Unit Rated Air Flow Rate").default("0.1359072").min_exclusive(0.0))
        .add_field(IddField::real("Reference Unit Rated Condenser Air Flow Rate").min(0.0))
        .add_field(IddField::real("Reference Unit Rated Pad Effectiveness of Evap Precooling").min(0.0).max(1.0))
        .add_field(IddField::object(
            "Total Cooling Capacity Function of Temperature Curve Name",
            &[BIVARIATE_FUNCTIONS],
        ))
        .add_field(IddField::object(
            "Total Cooling Capacity Function of Air Flow Fraction Curve Name",
            &[UNIVARIATE_FUNCTIONS],
        ))
        .add_field(IddField::object(
            "Energy Input Ratio Function of Temperature Curve Name",
            &[BIVARIATE_FUNCTIONS],
        ))
        .add_field(IddField::object(
            "Energy Input Ratio Function of Air Flow Fraction Curve Name",
            &[UNIVARIATE_FUNCTIONS],
        ))
        .reference(SPEED_DATA_NAMES)
}

fn coil_heating_electric() -> IddObject {
    IddObject::new(T::OsCoilHeatingElectric)
        .add_handle()
        .add_name()
        .add_field(IddField::object("Availability Schedule Name", &[SCHEDULE_NAMES]))
        .add_field(IddField::real("Efficiency").default("1.0").min_exclusive(0.0).max(1.0))
        .add_field(IddField::real("Nominal Capacity").autosizable().default(AUTOSIZE).min(0.0))
        .reference(HEATING_COIL_NAMES)
}

fn coil_heating_water() -> IddObject {
    IddObject::new(T::OsCoilHeatingWater)
        .add_handle()
        .add_name()
        .add_field(IddField::object("Availability Schedule Name", &[SCHEDULE_NAMES]))
        .add_field(IddField::real("U-Factor Times Area Value").autosizable().default(AUTOSIZE).min(0.0))
        .add_field(IddField::real("Maximum Water Flow Rate").autosizable().default(AUTOSIZE).min(0.0))
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
    IddObject::new(T::OsCoilHeatingDesuperheater)
        .add_handle()
        .add_name()
        .add_field(IddField::object("Availability Schedule Name", &[SCHEDULE_NAMES]))
        .add_field(IddField::real("Heat Reclaim Recovery Efficiency").default("0.8").min(0.0).max(0.9))
        .add_field(IddField::object("Heating Source Name", &[DESUPERHEATER_SOURCE_NAMES]))
        .add_field(IddField::real("Parasitic Electric Load").default("0").min(0.0))
        .reference(HEATING_COIL_NAMES)
}

fn unitary_system() -> IddObject {
    IddObject::new(T::OsAirLoopHVACUnitarySystem)
        .add_handle()
        .add_name()
        .add_field(IddField::choice("Control Type", &["Load", "SetPoint", "SingleZoneVAV"]).default("Load"))
        .add_field(IddField::object("Controlling Zone or Thermostat Location", &[ZONE_NAMES]))
        .add_field(IddField::choice(
            "Dehumidification Control Type",
            &["None", "Multimode", "CoolReheat"],
        ).default("None"))
        .add_field(IddField::object("Availability Schedule Name", &[SCHEDULE_NAMES]))
        .add_field(IddField::object("Supply Fan Name", &[FAN_NAMES]))
        .add_field(IddField::choice("Fan Placement", &["BlowThrough", "DrawThrough"]))
        .add_field(IddField::object("Supply Air Fan Operating Mode Schedule Name", &[SCHEDULE_NAMES]))
        .add_field(IddField::object("Heating Coil Name", &[HEATING_COIL_NAMES]))
        .add_field(IddField::real("DX Heating Coil Sizing Ratio").default("1.0").min_exclusive(0.0))
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
        .add_field(IddField::object("Supplemental Heating Coil Name", &[HEATING_COIL_NAMES]))
        .add_field(IddField::choice("Supply Air Flow Rate Method During Cooling Operation", FLOW_METHODS))
        .add_field(IddField::real("Supply Air Flow Rate During Cooling Operation")
            .autosizable()
            .default(AUTOSIZE)
            .min(0.0))
        .add_field(IddField::choice("Supply Air Flow Rate Method During Heating Operation", FLOW_METHODS))
        .add_field(IddField::real("Supply Air Flow Rate During Heating Operation")
            .autosizable()
            .default(AUTOSIZE)
            .min(0.0))
        .add_field(IddField::choice(
            "Supply Air Flow Rate Method When No Cooling or Heating is Required",
            FLOW_METHODS,
        ))
        .add_field(IddField::real("Supply Air Flow Rate When No Cooling or Heating is Required")
            .autosizable()
            .min(0.0))
        .add_field(IddField::choice("No Load Supply Air Flow Rate Control Set To Low Speed", YES_NO).default("Yes"))
        .add_field(IddField::real("Maximum Supply Air Temperature").autosizable().default("80"))
        .add_field(IddField::real("Maximum Outdoor Dry-Bulb Temperature for Supplemental Heater Operation")
            .default("21"))
        .add_field(IddField::real("Ancilliary On-Cycle Electric Power").default("0").min(0.0))
        .add_field(IddField::real("Ancilliary Off-Cycle Electric Power").default("0").min(0.0))
        .reference(UNITARY_SYSTEM_NAMES)
}
