//! Schedules and schedule type limits

use super::macros::{declare_model_object, model_object_enum};
use super::schedule_type_registry::is_compatible;
use super::{ConcreteModelObject, Model, ModelObject, ObjectHandle};
use tracing::debug;

mod limits_fields {
    pub const LOWER_LIMIT_VALUE: usize = 2;
    pub const UPPER_LIMIT_VALUE: usize = 3;
    pub const NUMERIC_TYPE: usize = 4;
    pub const UNIT_TYPE: usize = 5;
}

/// Both schedule kinds keep their limits reference at the same index
const SCHEDULE_TYPE_LIMITS_NAME: usize = 2;
const CONSTANT_VALUE: usize = 3;
const FIRST_COMPACT_FIELD: usize = 3;

/// Physical unit family of a limits unit type
///
/// Unit types without a physical unit (`Dimensionless`, `Availability`,
/// `ControlMode` and the like) share the empty family.
pub fn units(unit_type: &str) -> &'static str {
    match unit_type.trim().to_ascii_lowercase().as_str() {
        "temperature" => "C",
        "deltatemperature" => "deltaC",
        "precipitationrate" | "velocity" => "m/s",
        "angle" => "deg",
        "convectioncoefficient" => "W/m2-K",
        "activitylevel" => "W/person",
        "capacity" | "power" => "W",
        "percent" => "%",
        _ => "",
    }
}

declare_model_object! {
    /// Bounds and unit of the values a schedule may take
    ScheduleTypeLimits => OsScheduleTypeLimits
}

impl ModelObject for ScheduleTypeLimits {}

impl ScheduleTypeLimits {
    pub fn new(model: &mut Model) -> Self {
        Self(model.add_record(Self::IDD_OBJECT_TYPE))
    }

    pub fn lower_limit_value(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, limits_fields::LOWER_LIMIT_VALUE)
    }

    pub fn set_lower_limit_value(&self, model: &mut Model, value: Option<f64>) -> bool {
        model.set_optional_double(self.0, limits_fields::LOWER_LIMIT_VALUE, value)
    }

    pub fn upper_limit_value(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, limits_fields::UPPER_LIMIT_VALUE)
    }

    pub fn set_upper_limit_value(&self, model: &mut Model, value: Option<f64>) -> bool {
        model.set_optional_double(self.0, limits_fields::UPPER_LIMIT_VALUE, value)
    }

    pub fn numeric_type(&self, model: &Model) -> Option<String> {
        model.optional_string(self.0, limits_fields::NUMERIC_TYPE)
    }

    pub fn set_numeric_type(&self, model: &mut Model, numeric_type: &str) -> bool {
        model.set_string(self.0, limits_fields::NUMERIC_TYPE, numeric_type)
    }

    pub fn reset_numeric_type(&self, model: &mut Model) {
        model.reset(self.0, limits_fields::NUMERIC_TYPE);
    }

    pub fn unit_type(&self, model: &Model) -> String {
        model.required_string(self.0, limits_fields::UNIT_TYPE)
    }

    pub fn is_unit_type_defaulted(&self, model: &Model) -> bool {
        model.is_defaulted(self.0, limits_fields::UNIT_TYPE)
    }

    pub fn set_unit_type(&self, model: &mut Model, unit_type: &str) -> bool {
        model.set_string(self.0, limits_fields::UNIT_TYPE, unit_type)
    }

    pub fn reset_unit_type(&self, model: &mut Model) {
        model.reset(self.0, limits_fields::UNIT_TYPE);
    }

    pub fn units(&self, model: &Model) -> &'static str {
        units(&self.unit_type(model))
    }
}

declare_model_object! {
    /// Schedule written in the compact `Through:/For:/Until:` syntax
    ScheduleCompact => OsScheduleCompact
}

impl ModelObject for ScheduleCompact {}

impl ScheduleCompact {
    pub fn new(model: &mut Model) -> Self {
        Self(model.add_record(Self::IDD_OBJECT_TYPE))
    }

    /// Compact schedule holding `value` all year
    pub fn with_constant_value(model: &mut Model, value: f64) -> Self {
        let schedule = Self::new(model);
        schedule.set_to_constant_value(model, value);
        schedule
    }

    /// Text of every compact field, in order
    pub fn values(&self, model: &Model) -> Vec<String> {
        let workspace = model.workspace();
        (FIRST_COMPACT_FIELD..workspace.num_fields(self.0))
            .map(|index| workspace.get_string(self.0, index).unwrap_or_default())
            .collect()
    }

    pub fn push_value(&self, model: &mut Model, value: &str) -> bool {
        let Some(group) = model.workspace_mut().push_extensible_group(self.0) else {
            return false;
        };
        let index = FIRST_COMPACT_FIELD + group;
        let stored = model.set_string(self.0, index, value);
        if !stored {
            model.workspace_mut().erase_extensible_group(self.0, group);
        }
        stored
    }

    pub fn clear_values(&self, model: &mut Model) {
        model.workspace_mut().clear_extensible_groups(self.0);
    }

    pub fn set_to_constant_value(&self, model: &mut Model, value: f64) -> bool {
        self.clear_values(model);
        let text = crate::workspace::format_number(value);
        ["Through: 12/31", "For: AllDays", "Until: 24:00", text.as_str()]
            .iter()
            .all(|field| self.push_value(model, field))
    }

    /// The single value of a schedule built by [`set_to_constant_value`](Self::set_to_constant_value)
    pub fn constant_value(&self, model: &Model) -> Option<f64> {
        match self.values(model).as_slice() {
            [_, _, _, value] => value.trim().parse().ok(),
            _ => None,
        }
    }
}

declare_model_object! {
    /// Schedule holding one value at all times
    ScheduleConstant => OsScheduleConstant
}

impl ModelObject for ScheduleConstant {}

impl ScheduleConstant {
    pub fn new(model: &mut Model) -> Self {
        Self(model.add_record(Self::IDD_OBJECT_TYPE))
    }

    pub fn value(&self, model: &Model) -> f64 {
        model.required_double(self.0, CONSTANT_VALUE)
    }

    pub fn set_value(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, CONSTANT_VALUE, value)
    }
}

model_object_enum! {
    /// Any schedule a schedule-typed field may reference
    Schedule {
        Compact(ScheduleCompact),
        Constant(ScheduleConstant),
    }
}

impl Schedule {
    pub fn schedule_type_limits(&self, model: &Model) -> Option<ScheduleTypeLimits> {
        model.target(self.handle(), SCHEDULE_TYPE_LIMITS_NAME)
    }

    /// Assign limits, refusing ones incompatible with a field already using this schedule
    pub fn set_schedule_type_limits(&self, model: &mut Model, limits: ScheduleTypeLimits) -> bool {
        let keys = model.schedule_type_keys(self.handle());
        let incompatible = keys.iter().find(|key| {
            model
                .schedule_types()
                .schedule_type(**key)
                .is_some_and(|schedule_type| !is_compatible(schedule_type, model, limits, false))
        });
        if let Some(key) = incompatible {
            debug!(schedule = %self.handle(), class = key.class_name, field = key.display_name, "limits rejected");
            return false;
        }
        model.set_target(self.handle(), SCHEDULE_TYPE_LIMITS_NAME, limits.handle())
    }

    /// Clear the limits unless a typed field uses this schedule
    pub fn reset_schedule_type_limits(&self, model: &mut Model) -> bool {
        if !model.schedule_type_keys(self.handle()).is_empty() {
            return false;
        }
        model.reset_target(self.handle(), SCHEDULE_TYPE_LIMITS_NAME);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FanOnOff;

    #[test]
    fn test_units_families() {
        assert_eq!(units("Availability"), units("Dimensionless"));
        assert_eq!(units("ControlMode"), "");
        assert_eq!(units("temperature"), "C");
        assert_ne!(units("Temperature"), units("DeltaTemperature"));
    }

    #[test]
    fn test_limits_accessors() {
        let mut model = Model::new();
        let limits = ScheduleTypeLimits::new(&mut model);
        assert!(limits.is_unit_type_defaulted(&model));
        assert_eq!(limits.unit_type(&model), "Dimensionless");
        assert!(limits.set_unit_type(&mut model, "temperature"));
        assert_eq!(limits.unit_type(&model), "Temperature");
        assert!(!limits.set_unit_type(&mut model, "Furlongs"));
        assert!(limits.set_lower_limit_value(&mut model, Some(-5.0)));
        assert_eq!(limits.lower_limit_value(&model), Some(-5.0));
        assert!(limits.set_lower_limit_value(&mut model, None));
        assert_eq!(limits.lower_limit_value(&model), None);
    }

    #[test]
    fn test_compact_constant_value() {
        let mut model = Model::new();
        let schedule = ScheduleCompact::with_constant_value(&mut model, 0.5);
        assert_eq!(schedule.values(&model).len(), 4);
        assert_eq!(schedule.values(&model)[0], "Through: 12/31");
        assert_eq!(schedule.constant_value(&model), Some(0.5));
        schedule.clear_values(&mut model);
        assert!(schedule.values(&model).is_empty());
        assert_eq!(schedule.constant_value(&model), None);
    }

    #[test]
    fn test_constant_value_default() {
        let mut model = Model::new();
        let schedule = ScheduleConstant::new(&mut model);
        assert_eq!(schedule.value(&model), 0.0);
        assert!(schedule.set_value(&mut model, 21.0));
        assert_eq!(schedule.value(&model), 21.0);
    }

    #[test]
    fn test_limits_checked_against_users() {
        let mut model = Model::new();
        let schedule = ScheduleConstant::new(&mut model);
        let fan = FanOnOff::new(&mut model);
        assert!(fan.set_availability_schedule(&mut model, schedule.into()));
        let schedule = Schedule::from(schedule);
        assert!(!schedule.reset_schedule_type_limits(&mut model));

        let temperature = ScheduleTypeLimits::new(&mut model);
        temperature.set_unit_type(&mut model, "Temperature");
        assert!(!schedule.set_schedule_type_limits(&mut model, temperature));
        assert_eq!(
            schedule.schedule_type_limits(&model).and_then(|l| l.name(&model)).as_deref(),
            Some("OnOff")
        );
    }
}
