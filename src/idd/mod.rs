//! Object schemas (IDD) for both workspace dialects
//!
//! An [`IddObject`] describes, per field index, the field name, the kind of
//! value it holds, its default and whether it accepts the `autosize` /
//! `autocalculate` sentinels. Records carry no self-description, so every
//! accessor in the crate is only as correct as these tables.
//!
//! The built-in files are immutable once initialised and shared through
//! [`Arc`], so any number of translators on any number of threads can hold
//! them without locking.

mod energyplus;
pub mod mapping;
mod openstudio;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Reference classes linking object-list fields to the objects they may point at
pub mod refs {
    pub const ALL_OBJECTS: &str = "AllObjects";
    pub const MODEL_OBJECT_LISTS: &str = "ModelObjectLists";
    pub const SCHEDULE_NAMES: &str = "ScheduleNames";
    pub const SCHEDULE_TYPE_LIMITS_NAMES: &str = "ScheduleTypeLimitsNames";
    pub const UNIVARIATE_FUNCTIONS: &str = "UnivariateFunctions";
    pub const BIVARIATE_FUNCTIONS: &str = "BivariateFunctions";
    pub const ZONE_NAMES: &str = "ZoneNames";
    pub const FAN_NAMES: &str = "FansCVandOnOff";
    pub const COOLING_COIL_NAMES: &str = "CoolingCoilsDXVariableSpeed";
    pub const HEATING_COIL_NAMES: &str = "HeatingCoilName";
    pub const DESUPERHEATER_SOURCE_NAMES: &str = "DesuperHeatingCoilSources";
    pub const SPEED_DATA_NAMES: &str = "CoolingCoilSpeedDataNames";
    pub const PLANT_LOOP_NAMES: &str = "PlantLoops";
    pub const UNITARY_SYSTEM_NAMES: &str = "UnitarySystems";
}

/// Sentinel accepted by autosizable numeric fields
pub const AUTOSIZE: &str = "autosize";
/// Sentinel accepted by autocalculatable numeric fields
pub const AUTOCALCULATE: &str = "autocalculate";

/// Which schema family a record type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    /// Internal schema; every record carries a handle field at index 0
    OpenStudio,
    /// External interchange schema; name at index 0, references by name
    EnergyPlus,
}

macro_rules! idd_object_types {
    ($( $dialect:ident { $( $variant:ident => $name:literal, )* } )*) => {
        /// Closed set of record types known to this crate
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum IddObjectType {
            $( $( $variant, )* )*
        }

        impl IddObjectType {
            /// Every known type, in declaration order
            pub const ALL: &'static [IddObjectType] = &[ $( $( IddObjectType::$variant, )* )* ];

            /// Schema name as written in text files (e.g. `OS:Fan:OnOff`)
            pub fn name(self) -> &'static str {
                match self {
                    $( $( IddObjectType::$variant => $name, )* )*
                }
            }

            pub fn dialect(self) -> Dialect {
                match self {
                    $( $( IddObjectType::$variant => Dialect::$dialect, )* )*
                }
            }
        }
    };
}

idd_object_types! {
    OpenStudio {
        OsVersion => "OS:Version",
        OsModelObjectList => "OS:ModelObjectList",
        OsScheduleTypeLimits => "OS:ScheduleTypeLimits",
        OsScheduleCompact => "OS:Schedule:Compact",
        OsScheduleConstant => "OS:Schedule:Constant",
        OsCurveQuadratic => "OS:Curve:Quadratic",
        OsCurveCubic => "OS:Curve:Cubic",
        OsCurveBiquadratic => "OS:Curve:Biquadratic",
        OsSiteWaterMainsTemperature => "OS:Site:WaterMainsTemperature",
        OsSiteGroundTemperatureDeep => "OS:Site:GroundTemperature:Deep",
        OsSiteGroundTemperatureShallow => "OS:Site:GroundTemperature:Shallow",
        OsSiteGroundTemperatureBuildingSurface => "OS:Site:GroundTemperature:BuildingSurface",
        OsThermalZone => "OS:ThermalZone",
        OsPlantLoop => "OS:PlantLoop",
        OsFanConstantVolume => "OS:Fan:ConstantVolume",
        OsFanOnOff => "OS:Fan:OnOff",
        OsCoilCoolingDXVariableSpeed => "OS:Coil:Cooling:DX:VariableSpeed",
        OsCoilCoolingDXVariableSpeedSpeedData => "OS:Coil:Cooling:DX:VariableSpeed:SpeedData",
        OsCoilHeatingElectric => "OS:Coil:Heating:Electric",
        OsCoilHeatingWater => "OS:Coil:Heating:Water",
        OsCoilHeatingDesuperheater => "OS:Coil:Heating:Desuperheater",
        OsAirLoopHVACUnitarySystem => "OS:AirLoopHVAC:UnitarySystem",
    }
    EnergyPlus {
        Version => "Version",
        ScheduleTypeLimits => "ScheduleTypeLimits",
        ScheduleCompact => "Schedule:Compact",
        ScheduleConstant => "Schedule:Constant",
        CurveQuadratic => "Curve:Quadratic",
        CurveCubic => "Curve:Cubic",
        CurveBiquadratic => "Curve:Biquadratic",
        SiteWaterMainsTemperature => "Site:WaterMainsTemperature",
        SiteGroundTemperatureDeep => "Site:GroundTemperature:Deep",
        SiteGroundTemperatureShallow => "Site:GroundTemperature:Shallow",
        SiteGroundTemperatureBuildingSurface => "Site:GroundTemperature:BuildingSurface",
        Zone => "Zone",
        FanConstantVolume => "Fan:ConstantVolume",
        FanOnOff => "Fan:OnOff",
        CoilCoolingDXVariableSpeed => "Coil:Cooling:DX:VariableSpeed",
        CoilHeatingElectric => "Coil:Heating:Electric",
        CoilHeatingWater => "Coil:Heating:Water",
        CoilHeatingDesuperheater => "Coil:Heating:Desuperheater",
        AirLoopHVACUnitarySystem => "AirLoopHVAC:UnitarySystem",
    }
}

impl IddObjectType {
    /// Look up a type by its schema name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for IddObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric bound on a real or integer field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Inclusive(f64),
    Exclusive(f64),
}

/// Kind of value a field position holds
#[derive(Debug, Clone, PartialEq)]
pub enum IddFieldKind {
    /// Record identity (internal dialect only, always index 0)
    Handle,
    /// Free text
    Alpha,
    /// One of a fixed set of keys, matched case-insensitively
    Choice(&'static [&'static str]),
    Real,
    Integer,
    /// Reference to another record belonging to one of these classes
    Object(&'static [&'static str]),
}

/// Schema entry for one field position
#[derive(Debug, Clone, PartialEq)]
pub struct IddField {
    pub name: &'static str,
    pub kind: IddFieldKind,
    pub default: Option<&'static str>,
    pub autosizable: bool,
    pub autocalculatable: bool,
    pub minimum: Option<Bound>,
    pub maximum: Option<Bound>,
}

impl IddField {
    fn new(name: &'static str, kind: IddFieldKind) -> Self {
        Self {
            name,
            kind,
            default: None,
            autosizable: false,
            autocalculatable: false,
            minimum: None,
            maximum: None,
        }
    }

    pub fn alpha(name: &'static str) -> Self {
        Self::new(name, IddFieldKind::Alpha)
    }

    pub fn choice(name: &'static str, keys: &'static [&'static str]) -> Self {
        Self::new(name, IddFieldKind::Choice(keys))
    }

    pub fn real(name: &'static str) -> Self {
        Self::new(name, IddFieldKind::Real)
    }

    pub fn integer(name: &'static str) -> Self {
        Self::new(name, IddFieldKind::Integer)
    }

    pub fn object(name: &'static str, classes: &'static [&'static str]) -> Self {
        Self::new(name, IddFieldKind::Object(classes))
    }

    pub fn default(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    pub fn autosizable(mut self) -> Self {
        self.autosizable = true;
        self
    }

    pub fn autocalculatable(mut self) -> Self {
        self.autocalculatable = true;
        self
    }

    pub fn min(mut self, value: f64) -> Self {
        self.minimum = Some(Bound::Inclusive(value));
        self
    }

    pub fn min_exclusive(mut self, value: f64) -> Self {
        self.minimum = Some(Bound::Exclusive(value));
        self
    }

    pub fn max(mut self, value: f64) -> Self {
        self.maximum = Some(Bound::Inclusive(value));
        self
    }

    pub fn max_exclusive(mut self, value: f64) -> Self {
        self.maximum = Some(Bound::Exclusive(value));
        self
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, IddFieldKind::Real | IddFieldKind::Integer)
    }

    pub fn is_object_list(&self) -> bool {
        matches!(self.kind, IddFieldKind::Object(_))
    }

    /// Allowed keys for a choice field; empty for every other kind
    pub fn keys(&self) -> &'static [&'static str] {
        match self.kind {
            IddFieldKind::Choice(keys) => keys,
            _ => &[],
        }
    }

    /// Whether `value` lies inside the declared bounds
    pub fn in_bounds(&self, value: f64) -> bool {
        let above_min = match self.minimum {
            Some(Bound::Inclusive(min)) => value >= min,
            Some(Bound::Exclusive(min)) => value > min,
            None => true,
        };
        let below_max = match self.maximum {
            Some(Bound::Inclusive(max)) => value <= max,
            Some(Bound::Exclusive(max)) => value < max,
            None => true,
        };
        above_min && below_max
    }

    /// Whether `value` is a sentinel this field accepts in place of a number
    pub fn accepts_sentinel(&self, value: &str) -> bool {
        (self.autosizable && value.eq_ignore_ascii_case(AUTOSIZE))
            || (self.autocalculatable && value.eq_ignore_ascii_case(AUTOCALCULATE))
    }
}

/// Schema of one record type
#[derive(Debug, Clone)]
pub struct IddObject {
    object_type: IddObjectType,
    fields: Vec<IddField>,
    extensible: Vec<IddField>,
    name_index: Option<usize>,
    references: Vec<&'static str>,
    unique: bool,
    resource: bool,
}

impl IddObject {
    pub fn new(object_type: IddObjectType) -> Self {
        Self {
            object_type,
            fields: Vec::new(),
            extensible: Vec::new(),
            name_index: None,
            references: Vec::new(),
            unique: false,
            resource: false,
        }
    }

    pub(crate) fn add_handle(mut self) -> Self {
        self.fields.push(IddField::new("Handle", IddFieldKind::Handle));
        self
    }

    pub(crate) fn add_name(mut self) -> Self {
        self.name_index = Some(self.fields.len());
        self.fields.push(IddField::alpha("Name"));
        self
    }

    pub(crate) fn add_field(mut self, field: IddField) -> Self {
        self.fields.push(field);
        self
    }

    pub(crate) fn add_extensible(mut self, field: IddField) -> Self {
        self.extensible.push(field);
        self
    }

    pub(crate) fn reference(mut self, class: &'static str) -> Self {
        self.references.push(class);
        self
    }

    pub(crate) fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub(crate) fn resource(mut self) -> Self {
        self.resource = true;
        self
    }

    pub fn object_type(&self) -> IddObjectType {
        self.object_type
    }

    pub fn type_name(&self) -> &'static str {
        self.object_type.name()
    }

    pub fn has_handle_field(&self) -> bool {
        matches!(self.fields.first(), Some(f) if f.kind == IddFieldKind::Handle)
    }

    pub fn name_index(&self) -> Option<usize> {
        self.name_index
    }

    pub fn num_fixed_fields(&self) -> usize {
        self.fields.len()
    }

    pub fn extensible_group_len(&self) -> usize {
        self.extensible.len()
    }

    pub fn is_extensible(&self) -> bool {
        !self.extensible.is_empty()
    }

    /// At most one instance may exist per workspace
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Shared objects (schedules, curves) that travel with anything referencing them
    pub fn is_resource(&self) -> bool {
        self.resource
    }

    pub fn references(&self) -> &[&'static str] {
        &self.references
    }

    /// Whether records of this type may be targeted from a field of `classes`
    pub fn belongs_to_any(&self, classes: &[&str]) -> bool {
        classes.iter().any(|class| {
            *class == refs::ALL_OBJECTS || self.references.iter().any(|r| r == class)
        })
    }

    pub fn fixed_fields(&self) -> &[IddField] {
        &self.fields
    }

    pub fn extensible_fields(&self) -> &[IddField] {
        &self.extensible
    }

    /// Schema entry for a field index, folding extensible indices onto the group template
    pub fn field(&self, index: usize) -> Option<&IddField> {
        if index < self.fields.len() {
            return self.fields.get(index);
        }
        if self.extensible.is_empty() {
            return None;
        }
        let offset = (index - self.fields.len()) % self.extensible.len();
        self.extensible.get(offset)
    }

    /// Index of the named fixed field, ignoring case
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Allowed keys of a choice field
    pub fn key_names(&self, index: usize) -> Vec<&'static str> {
        self.field(index).map(|f| f.keys().to_vec()).unwrap_or_default()
    }

    /// Prefix for generated names, e.g. `Coil Heating Electric`
    pub fn default_name_prefix(&self) -> String {
        let name = self.type_name();
        let name = name.strip_prefix("OS:").unwrap_or(name);
        name.replace(':', " ")
    }
}

/// Immutable collection of record schemas for one dialect
#[derive(Debug, Clone)]
pub struct IddFile {
    dialect: Dialect,
    objects: BTreeMap<IddObjectType, IddObject>,
}

static OPENSTUDIO_IDD: Lazy<Arc<IddFile>> = Lazy::new(|| Arc::new(openstudio::build()));
static ENERGYPLUS_IDD: Lazy<Arc<IddFile>> = Lazy::new(|| Arc::new(energyplus::build()));

impl IddFile {
    /// Build a file from schema objects
    ///
    /// Objects of the wrong dialect are ignored.
    pub fn new(dialect: Dialect, objects: impl IntoIterator<Item = IddObject>) -> Self {
        let objects = objects
            .into_iter()
            .filter(|o| o.object_type.dialect() == dialect)
            .map(|o| (o.object_type, o))
            .collect();
        Self { dialect, objects }
    }

    /// Shared internal schema
    pub fn openstudio() -> Arc<IddFile> {
        Arc::clone(&OPENSTUDIO_IDD)
    }

    /// Shared external schema
    pub fn energyplus() -> Arc<IddFile> {
        Arc::clone(&ENERGYPLUS_IDD)
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn object(&self, object_type: IddObjectType) -> Option<&IddObject> {
        self.objects.get(&object_type)
    }

    /// Look up a schema by its text name, ignoring case
    pub fn object_by_name(&self, name: &str) -> Option<&IddObject> {
        IddObjectType::from_name(name).and_then(|t| self.object(t))
    }

    /// Known types ordered by schema name
    pub fn object_types(&self) -> Vec<IddObjectType> {
        let mut types: Vec<IddObjectType> = self.objects.keys().copied().collect();
        types.sort_by_key(|t| t.name());
        types
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_round_trip() {
        for t in IddObjectType::ALL {
            assert_eq!(IddObjectType::from_name(t.name()), Some(*t));
        }
        assert_eq!(
            IddObjectType::from_name("schedule:compact"),
            Some(IddObjectType::ScheduleCompact)
        );
        assert_eq!(IddObjectType::from_name("Not:A:Type"), None);
    }

    #[test]
    fn test_every_type_has_a_schema() {
        let os = IddFile::openstudio();
        let ep = IddFile::energyplus();
        for t in IddObjectType::ALL {
            let file = match t.dialect() {
                Dialect::OpenStudio => &os,
                Dialect::EnergyPlus => &ep,
            };
            assert!(file.object(*t).is_some(), "missing schema for {t}");
        }
    }

    #[test]
    fn test_internal_records_lead_with_handle() {
        let os = IddFile::openstudio();
        for t in os.object_types() {
            assert!(os.object(t).unwrap().has_handle_field(), "{t}");
        }
        let ep = IddFile::energyplus();
        for t in ep.object_types() {
            assert!(!ep.object(t).unwrap().has_handle_field(), "{t}");
        }
    }

    #[test]
    fn test_extensible_field_lookup() {
        let ep = IddFile::energyplus();
        let schedule = ep.object(IddObjectType::ScheduleCompact).unwrap();
        assert_eq!(schedule.num_fixed_fields(), 2);
        assert_eq!(schedule.field(7).unwrap().name, "Field");
    }

    #[test]
    fn test_bounds() {
        let field = IddField::real("Efficiency").min_exclusive(0.0).max(1.0);
        assert!(field.in_bounds(1.0));
        assert!(!field.in_bounds(0.0));
        assert!(!field.in_bounds(1.2));
    }

    #[test]
    fn test_default_name_prefix() {
        let os = IddFile::openstudio();
        let coil = os.object(IddObjectType::OsCoilHeatingElectric).unwrap();
        assert_eq!(coil.default_name_prefix(), "Coil Heating Electric");
    }
}
