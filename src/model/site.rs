//! Site-level boundary conditions
//!
//! All four objects are unique: obtain them with [`Model::unique`].

use super::macros::declare_model_object;
use super::{Model, ModelObject, Schedule, ScheduleTypeKey, UniqueModelObject};
use crate::workspace::Handle;
use chrono::Month;

mod mains_fields {
    pub const TEMPERATURE_SCHEDULE_NAME: usize = 1;
    pub const ANNUAL_AVERAGE_OUTDOOR_AIR_TEMPERATURE: usize = 2;
    pub const MAXIMUM_DIFFERENCE_IN_MONTHLY_AVERAGE_OUTDOOR_AIR_TEMPERATURES: usize = 3;
}

use mains_fields as mains;

const TEMPERATURE_KEY: ScheduleTypeKey = ScheduleTypeKey::new("SiteWaterMainsTemperature", "Temperature");

declare_model_object! {
    /// Water mains temperature, either scheduled or correlated from outdoor air
    SiteWaterMainsTemperature => OsSiteWaterMainsTemperature
}

impl UniqueModelObject for SiteWaterMainsTemperature {}

impl ModelObject for SiteWaterMainsTemperature {
    fn schedule_type_keys(&self, model: &Model, schedule: Handle) -> Vec<ScheduleTypeKey> {
        model.keys_for_fields(
            self.0,
            schedule,
            &[(mains::TEMPERATURE_SCHEDULE_NAME, TEMPERATURE_KEY)],
        )
    }
}

impl SiteWaterMainsTemperature {
    pub fn temperature_schedule(&self, model: &Model) -> Option<Schedule> {
        model.target(self.0, mains::TEMPERATURE_SCHEDULE_NAME)
    }

    pub fn set_temperature_schedule(&self, model: &mut Model, schedule: Schedule) -> bool {
        model.set_schedule(self.0, mains::TEMPERATURE_SCHEDULE_NAME, TEMPERATURE_KEY, schedule)
    }

    pub fn reset_temperature_schedule(&self, model: &mut Model) {
        model.reset_target(self.0, mains::TEMPERATURE_SCHEDULE_NAME);
    }

    pub fn annual_average_outdoor_air_temperature(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, mains::ANNUAL_AVERAGE_OUTDOOR_AIR_TEMPERATURE)
    }

    pub fn set_annual_average_outdoor_air_temperature(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, mains::ANNUAL_AVERAGE_OUTDOOR_AIR_TEMPERATURE, value)
    }

    pub fn reset_annual_average_outdoor_air_temperature(&self, model: &mut Model) {
        model.reset(self.0, mains::ANNUAL_AVERAGE_OUTDOOR_AIR_TEMPERATURE);
    }

    pub fn maximum_difference_in_monthly_average_outdoor_air_temperatures(&self, model: &Model) -> Option<f64> {
        model.optional_double(
            self.0,
            mains::MAXIMUM_DIFFERENCE_IN_MONTHLY_AVERAGE_OUTDOOR_AIR_TEMPERATURES,
        )
    }

    /// Negative differences are rejected
    pub fn set_maximum_difference_in_monthly_average_outdoor_air_temperatures(
        &self,
        model: &mut Model,
        value: f64,
    ) -> bool {
        model.set_double(
            self.0,
            mains::MAXIMUM_DIFFERENCE_IN_MONTHLY_AVERAGE_OUTDOOR_AIR_TEMPERATURES,
            value,
        )
    }

    pub fn reset_maximum_difference_in_monthly_average_outdoor_air_temperatures(&self, model: &mut Model) {
        model.reset(
            self.0,
            mains::MAXIMUM_DIFFERENCE_IN_MONTHLY_AVERAGE_OUTDOOR_AIR_TEMPERATURES,
        );
    }

    /// Whether both correlation inputs are present
    pub fn has_correlation_inputs(&self, model: &Model) -> bool {
        self.annual_average_outdoor_air_temperature(model).is_some()
            && self
                .maximum_difference_in_monthly_average_outdoor_air_temperatures(model)
                .is_some()
    }
}

/// Field of `month`; the handle occupies field 0
fn month_index(month: Month) -> usize {
    month.number_from_month() as usize
}

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Declare a unique object holding twelve monthly ground temperatures
macro_rules! ground_temperature {
    ($(#[$meta:meta])* $name:ident => $object_type:ident) => {
        declare_model_object! {
            $(#[$meta])*
            $name => $object_type
        }

        impl ModelObject for $name {}
        impl UniqueModelObject for $name {}

        impl $name {
            pub fn temperature(&self, model: &Model, month: Month) -> f64 {
                model.required_double(self.0, month_index(month))
            }

            pub fn is_temperature_defaulted(&self, model: &Model, month: Month) -> bool {
                model.is_defaulted(self.0, month_index(month))
            }

            pub fn set_temperature(&self, model: &mut Model, month: Month, value: f64) -> bool {
                model.set_double(self.0, month_index(month), value)
            }

            pub fn reset_temperature(&self, model: &mut Model, month: Month) {
                model.reset(self.0, month_index(month));
            }

            /// January through December
            pub fn monthly_temperatures(&self, model: &Model) -> Vec<f64> {
                MONTHS.iter().map(|month| self.temperature(model, *month)).collect()
            }

            /// Set all twelve months at once; any other length is rejected
            pub fn set_monthly_temperatures(&self, model: &mut Model, values: &[f64]) -> bool {
                if values.len() != MONTHS.len() {
                    return false;
                }
                MONTHS
                    .iter()
                    .zip(values)
                    .all(|(month, value)| self.set_temperature(model, *month, *value))
            }
        }
    };
}

ground_temperature! {
    /// Deep ground temperatures, default 16 C
    SiteGroundTemperatureDeep => OsSiteGroundTemperatureDeep
}

ground_temperature! {
    /// Shallow ground temperatures, default 13 C
    SiteGroundTemperatureShallow => OsSiteGroundTemperatureShallow
}

ground_temperature! {
    /// Ground temperatures under the building, default 18 C
    SiteGroundTemperatureBuildingSurface => OsSiteGroundTemperatureBuildingSurface
}
