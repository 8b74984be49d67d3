//! Schedule type table
//!
//! Every schedule-typed reference field is described by a [`ScheduleType`]:
//! whether it expects continuous or discrete values, its unit type and its
//! bounds. Setting a schedule on such a field checks the schedule's type
//! limits against this description, or assigns limits when it has none.

use super::schedules::{units, Schedule, ScheduleTypeLimits};
use super::{Model, ModelObject, ObjectHandle};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::debug;

/// `(class, field use)` pair naming one schedule-typed field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleTypeKey {
    pub class_name: &'static str,
    pub display_name: &'static str,
}

impl ScheduleTypeKey {
    pub const fn new(class_name: &'static str, display_name: &'static str) -> Self {
        Self {
            class_name,
            display_name,
        }
    }
}

/// Expected shape of the values a schedule field accepts
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleType {
    pub class_name: &'static str,
    pub display_name: &'static str,
    /// Facade accessor the field is exposed through
    pub relationship: &'static str,
    pub continuous: bool,
    /// Empty when the values are a plain dimensionless quantity
    pub unit_type: &'static str,
    pub lower_limit: Option<f64>,
    pub upper_limit: Option<f64>,
}

impl ScheduleType {
    const fn new(
        class_name: &'static str,
        display_name: &'static str,
        relationship: &'static str,
        continuous: bool,
        unit_type: &'static str,
        lower_limit: Option<f64>,
        upper_limit: Option<f64>,
    ) -> Self {
        Self {
            class_name,
            display_name,
            relationship,
            continuous,
            unit_type,
            lower_limit,
            upper_limit,
        }
    }

    pub fn key(&self) -> ScheduleTypeKey {
        ScheduleTypeKey::new(self.class_name, self.display_name)
    }

    /// Name of the limits created for this type
    pub fn default_limits_name(&self) -> &'static str {
        let unit_interval = self.lower_limit == Some(0.0) && self.upper_limit == Some(1.0);
        match self.unit_type {
            "" if self.continuous && unit_interval => "Fractional",
            "" if self.continuous => "Dimensionless",
            "" if unit_interval => "Binary",
            "" => "Integer",
            "Availability" => "OnOff",
            other => other,
        }
    }
}

const UNIT: (Option<f64>, Option<f64>) = (Some(0.0), Some(1.0));

const BUILTIN_TYPES: &[ScheduleType] = &[
    ScheduleType::new("AirLoopHVACUnitarySystem", "Availability", "availabilitySchedule", false, "Availability", UNIT.0, UNIT.1),
    ScheduleType::new(
        "AirLoopHVACUnitarySystem",
        "Supply Air Fan Operating Mode",
        "supplyAirFanOperatingModeSchedule",
        false,
        "ControlMode",
        UNIT.0,
        UNIT.1,
    ),
    ScheduleType::new(
        "CoilCoolingDXVariableSpeed",
        "Basin Heater Operating",
        "basinHeaterOperatingSchedule",
        false,
        "Availability",
        UNIT.0,
        UNIT.1,
    ),
    ScheduleType::new("CoilHeatingDesuperheater", "Availability", "availabilitySchedule", false, "Availability", UNIT.0, UNIT.1),
    ScheduleType::new("CoilHeatingElectric", "Availability", "availabilitySchedule", false, "Availability", UNIT.0, UNIT.1),
    ScheduleType::new("CoilHeatingWater", "Availability", "availabilitySchedule", false, "Availability", UNIT.0, UNIT.1),
    ScheduleType::new("FanConstantVolume", "Availability", "availabilitySchedule", false, "Availability", UNIT.0, UNIT.1),
    ScheduleType::new("FanOnOff", "Availability", "availabilitySchedule", false, "Availability", UNIT.0, UNIT.1),
    ScheduleType::new("SiteWaterMainsTemperature", "Temperature", "temperatureSchedule", true, "Temperature", None, None),
];

static BUILTIN: Lazy<Arc<ScheduleTypeRegistry>> =
    Lazy::new(|| Arc::new(ScheduleTypeRegistry::new(BUILTIN_TYPES.to_vec())));

/// Immutable table of schedule types, shared between models
#[derive(Debug, Clone, Default)]
pub struct ScheduleTypeRegistry {
    types: Vec<ScheduleType>,
}

impl ScheduleTypeRegistry {
    pub fn new(types: Vec<ScheduleType>) -> Self {
        Self { types }
    }

    /// Table covering every facade in this crate
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Classes with at least one schedule field, sorted
    pub fn class_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.types.iter().map(|t| t.class_name).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    pub fn schedule_types(&self, class_name: &str) -> Vec<&ScheduleType> {
        self.types
            .iter()
            .filter(|t| t.class_name == class_name)
            .collect()
    }

    pub fn schedule_type(&self, key: ScheduleTypeKey) -> Option<&ScheduleType> {
        self.types.iter().find(|t| t.key() == key)
    }
}

/// Whether `candidate` limits can serve a field of `schedule_type`
///
/// Unit types must agree and the candidate's bounds must lie within the
/// type's. When `stringent`, a type with no bound also rejects candidates
/// that impose one. Continuous versus discrete is not checked.
pub fn is_compatible(
    schedule_type: &ScheduleType,
    model: &Model,
    candidate: ScheduleTypeLimits,
    stringent: bool,
) -> bool {
    if units(schedule_type.unit_type) != units(&candidate.unit_type(model)) {
        return false;
    }
    let lower = candidate.lower_limit_value(model);
    let lower_ok = match schedule_type.lower_limit {
        Some(required) => lower.is_some_and(|value| value >= required),
        None => !stringent || lower.is_none(),
    };
    let upper = candidate.upper_limit_value(model);
    let upper_ok = match schedule_type.upper_limit {
        Some(required) => upper.is_some_and(|value| value <= required),
        None => !stringent || upper.is_none(),
    };
    lower_ok && upper_ok
}

/// Reuse limits named after `schedule_type` when compatible, else create them
pub fn get_or_create_schedule_type_limits(model: &mut Model, schedule_type: &ScheduleType) -> ScheduleTypeLimits {
    let name = schedule_type.default_limits_name();
    let existing = model
        .objects::<ScheduleTypeLimits>()
        .into_iter()
        .filter(|limits| {
            limits
                .name(model)
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        })
        .find(|limits| is_compatible(schedule_type, model, *limits, true));
    if let Some(limits) = existing {
        return limits;
    }

    let limits = ScheduleTypeLimits::new(model);
    limits.set_name(model, name);
    limits.set_lower_limit_value(model, schedule_type.lower_limit);
    limits.set_upper_limit_value(model, schedule_type.upper_limit);
    limits.set_numeric_type(model, if schedule_type.continuous { "Continuous" } else { "Discrete" });
    if !schedule_type.unit_type.is_empty() {
        limits.set_unit_type(model, schedule_type.unit_type);
    }
    debug!(name, "created schedule type limits");
    limits
}

/// Check a schedule's limits against `key`, assigning limits when it has none
///
/// Keys missing from the model's table accept any schedule.
pub fn check_or_assign_schedule_type_limits(model: &mut Model, key: ScheduleTypeKey, schedule: Schedule) -> bool {
    let Some(schedule_type) = model.schedule_types().schedule_type(key).cloned() else {
        return true;
    };
    match schedule.schedule_type_limits(model) {
        Some(limits) => is_compatible(&schedule_type, model, limits, false),
        None => {
            let limits = get_or_create_schedule_type_limits(model, &schedule_type);
            let assigned = schedule.set_schedule_type_limits(model, limits);
            if !assigned && model.workspace().sources(limits.handle()).is_empty() {
                limits.remove(model);
            }
            assigned
        }
    }
}

/// Limits already in the model that strictly suit `key`
pub fn compatible_schedule_type_limits(model: &Model, key: ScheduleTypeKey) -> Vec<ScheduleTypeLimits> {
    let Some(schedule_type) = model.schedule_types().schedule_type(key) else {
        return Vec::new();
    };
    model
        .objects::<ScheduleTypeLimits>()
        .into_iter()
        .filter(|limits| is_compatible(schedule_type, model, *limits, true))
        .collect()
}

/// Schedules usable for `key`; untyped schedules always qualify
pub fn compatible_schedules(model: &Model, key: ScheduleTypeKey) -> Vec<Schedule> {
    let ok = compatible_schedule_type_limits(model, key);
    model
        .workspace()
        .handles()
        .iter()
        .filter_map(|h| model.get::<Schedule>(*h))
        .filter(|schedule| schedule.schedule_type_limits(model).is_none_or(|l| ok.contains(&l)))
        .collect()
}
