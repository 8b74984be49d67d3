//! Supply fans
//!
//! Both fans share their leading layout, so the common accessors are
//! generated once. [`FanOnOff`] also owns two speed-ratio curves that are
//! cloned and removed with it.

use super::curves::{Curve, CurveCubic, CurveQuadratic};
use super::macros::{declare_model_object, model_object_enum};
use super::{ConcreteModelObject, Model, ModelObject, ObjectHandle, Schedule, ScheduleTypeKey};
use crate::workspace::{Handle, WorkspaceObject};

mod fields {
    pub const AVAILABILITY_SCHEDULE_NAME: usize = 2;
    pub const FAN_TOTAL_EFFICIENCY: usize = 3;
    pub const PRESSURE_RISE: usize = 4;
    pub const MAXIMUM_FLOW_RATE: usize = 5;
    pub const MOTOR_EFFICIENCY: usize = 6;
    pub const MOTOR_IN_AIRSTREAM_FRACTION: usize = 7;
}

mod on_off_fields {
    pub const FAN_POWER_RATIO_FUNCTION_OF_SPEED_RATIO_CURVE_NAME: usize = 8;
    pub const FAN_EFFICIENCY_RATIO_FUNCTION_OF_SPEED_RATIO_CURVE_NAME: usize = 9;
    pub const END_USE_SUBCATEGORY: usize = 10;
}

const CONSTANT_VOLUME_END_USE_SUBCATEGORY: usize = 8;

/// Accessors over the fields both fan layouts share
macro_rules! fan_accessors {
    ($availability:expr) => {
        pub fn availability_schedule(&self, model: &Model) -> Option<Schedule> {
            model.target(self.0, fields::AVAILABILITY_SCHEDULE_NAME)
        }

        pub fn set_availability_schedule(&self, model: &mut Model, schedule: Schedule) -> bool {
            model.set_schedule(self.0, fields::AVAILABILITY_SCHEDULE_NAME, $availability, schedule)
        }

        pub fn reset_availability_schedule(&self, model: &mut Model) {
            model.reset_target(self.0, fields::AVAILABILITY_SCHEDULE_NAME);
        }

        pub fn fan_total_efficiency(&self, model: &Model) -> f64 {
            model.required_double(self.0, fields::FAN_TOTAL_EFFICIENCY)
        }

        pub fn set_fan_total_efficiency(&self, model: &mut Model, value: f64) -> bool {
            model.set_double(self.0, fields::FAN_TOTAL_EFFICIENCY, value)
        }

        pub fn pressure_rise(&self, model: &Model) -> f64 {
            model.required_double(self.0, fields::PRESSURE_RISE)
        }

        pub fn set_pressure_rise(&self, model: &mut Model, value: f64) -> bool {
            model.set_double(self.0, fields::PRESSURE_RISE, value)
        }

        /// `None` while autosized
        pub fn maximum_flow_rate(&self, model: &Model) -> Option<f64> {
            model.optional_double(self.0, fields::MAXIMUM_FLOW_RATE)
        }

        pub fn is_maximum_flow_rate_autosized(&self, model: &Model) -> bool {
            model.is_autosized(self.0, fields::MAXIMUM_FLOW_RATE)
        }

        pub fn set_maximum_flow_rate(&self, model: &mut Model, value: f64) -> bool {
            model.set_double(self.0, fields::MAXIMUM_FLOW_RATE, value)
        }

        pub fn autosize_maximum_flow_rate(&self, model: &mut Model) {
            model.autosize(self.0, fields::MAXIMUM_FLOW_RATE);
        }

        pub fn motor_efficiency(&self, model: &Model) -> f64 {
            model.required_double(self.0, fields::MOTOR_EFFICIENCY)
        }

        pub fn set_motor_efficiency(&self, model: &mut Model, value: f64) -> bool {
            model.set_double(self.0, fields::MOTOR_EFFICIENCY, value)
        }

        pub fn motor_in_airstream_fraction(&self, model: &Model) -> f64 {
            model.required_double(self.0, fields::MOTOR_IN_AIRSTREAM_FRACTION)
        }

        pub fn set_motor_in_airstream_fraction(&self, model: &mut Model, value: f64) -> bool {
            model.set_double(self.0, fields::MOTOR_IN_AIRSTREAM_FRACTION, value)
        }
    };
}

const CONSTANT_VOLUME_AVAILABILITY: ScheduleTypeKey = ScheduleTypeKey::new("FanConstantVolume", "Availability");
const ON_OFF_AVAILABILITY: ScheduleTypeKey = ScheduleTypeKey::new("FanOnOff", "Availability");

declare_model_object! {
    /// Fan running at a fixed flow whenever available
    FanConstantVolume => OsFanConstantVolume
}

impl FanConstantVolume {
    pub fn new(model: &mut Model) -> Self {
        Self(model.add_record(Self::IDD_OBJECT_TYPE))
    }

    fan_accessors!(CONSTANT_VOLUME_AVAILABILITY);

    pub fn end_use_subcategory(&self, model: &Model) -> String {
        model.required_string(self.0, CONSTANT_VOLUME_END_USE_SUBCATEGORY)
    }

    pub fn set_end_use_subcategory(&self, model: &mut Model, value: &str) -> bool {
        model.set_string(self.0, CONSTANT_VOLUME_END_USE_SUBCATEGORY, value)
    }
}

impl ModelObject for FanConstantVolume {
    fn schedule_type_keys(&self, model: &Model, schedule: Handle) -> Vec<ScheduleTypeKey> {
        model.keys_for_fields(
            self.0,
            schedule,
            &[(fields::AVAILABILITY_SCHEDULE_NAME, CONSTANT_VOLUME_AVAILABILITY)],
        )
    }
}

declare_model_object! {
    /// Fan cycling on and off with the load
    FanOnOff => OsFanOnOff
}

const OWNED_CURVES: [usize; 2] = [
    on_off_fields::FAN_POWER_RATIO_FUNCTION_OF_SPEED_RATIO_CURVE_NAME,
    on_off_fields::FAN_EFFICIENCY_RATIO_FUNCTION_OF_SPEED_RATIO_CURVE_NAME,
];

impl FanOnOff {
    /// New fan with a cubic power ratio curve and a flat efficiency ratio curve
    pub fn new(model: &mut Model) -> Self {
        let fan = Self(model.add_record(Self::IDD_OBJECT_TYPE));

        let power_ratio = CurveCubic::new(model);
        power_ratio.set_maximum_value_of_x(model, Some(1.5));
        fan.set_fan_power_ratio_function_of_speed_ratio_curve(model, power_ratio.into());

        let efficiency_ratio = CurveQuadratic::new(model);
        efficiency_ratio.set_coefficients(model, [1.0, 0.0, 0.0]);
        efficiency_ratio.set_maximum_value_of_x(model, Some(1.5));
        fan.set_fan_efficiency_ratio_function_of_speed_ratio_curve(model, efficiency_ratio.into());

        fan
    }

    fan_accessors!(ON_OFF_AVAILABILITY);

    pub fn fan_power_ratio_function_of_speed_ratio_curve(&self, model: &Model) -> Option<Curve> {
        model.target(self.0, on_off_fields::FAN_POWER_RATIO_FUNCTION_OF_SPEED_RATIO_CURVE_NAME)
    }

    /// Univariate curves only
    pub fn set_fan_power_ratio_function_of_speed_ratio_curve(&self, model: &mut Model, curve: Curve) -> bool {
        curve.is_univariate()
            && model.set_target(
                self.0,
                on_off_fields::FAN_POWER_RATIO_FUNCTION_OF_SPEED_RATIO_CURVE_NAME,
                curve.handle(),
            )
    }

    pub fn fan_efficiency_ratio_function_of_speed_ratio_curve(&self, model: &Model) -> Option<Curve> {
        model.target(self.0, on_off_fields::FAN_EFFICIENCY_RATIO_FUNCTION_OF_SPEED_RATIO_CURVE_NAME)
    }

    /// Univariate curves only
    pub fn set_fan_efficiency_ratio_function_of_speed_ratio_curve(&self, model: &mut Model, curve: Curve) -> bool {
        curve.is_univariate()
            && model.set_target(
                self.0,
                on_off_fields::FAN_EFFICIENCY_RATIO_FUNCTION_OF_SPEED_RATIO_CURVE_NAME,
                curve.handle(),
            )
    }

    pub fn end_use_subcategory(&self, model: &Model) -> String {
        model.required_string(self.0, on_off_fields::END_USE_SUBCATEGORY)
    }

    pub fn set_end_use_subcategory(&self, model: &mut Model, value: &str) -> bool {
        model.set_string(self.0, on_off_fields::END_USE_SUBCATEGORY, value)
    }
}

impl ModelObject for FanOnOff {
    fn children(&self, model: &Model) -> Vec<Handle> {
        OWNED_CURVES
            .iter()
            .filter_map(|index| model.workspace().get_target(self.0, *index))
            .collect()
    }

    fn schedule_type_keys(&self, model: &Model, schedule: Handle) -> Vec<ScheduleTypeKey> {
        model.keys_for_fields(
            self.0,
            schedule,
            &[(fields::AVAILABILITY_SCHEDULE_NAME, ON_OFF_AVAILABILITY)],
        )
    }

    /// Curves go with the fan unless another object still uses them
    fn remove(&self, model: &mut Model) -> Vec<WorkspaceObject> {
        let curves = self.children(model);
        let mut removed = model.remove_record(self.0);
        removed.extend(model.remove_unused(curves));
        removed
    }

    fn clone_into_model(&self, source: &Model, target: &mut Model) -> Self {
        let copy = Self(target.clone_record(source, self.0, &OWNED_CURVES));
        for index in OWNED_CURVES {
            target.clone_child(source, self.0, copy.0, index);
        }
        copy
    }
}

model_object_enum! {
    /// Any supply fan
    Fan {
        ConstantVolume(FanConstantVolume),
        OnOff(FanOnOff),
    }
}

impl Fan {
    pub fn maximum_flow_rate(&self, model: &Model) -> Option<f64> {
        match self {
            Fan::ConstantVolume(fan) => fan.maximum_flow_rate(model),
            Fan::OnOff(fan) => fan.maximum_flow_rate(model),
        }
    }

    pub fn is_maximum_flow_rate_autosized(&self, model: &Model) -> bool {
        match self {
            Fan::ConstantVolume(fan) => fan.is_maximum_flow_rate_autosized(model),
            Fan::OnOff(fan) => fan.is_maximum_flow_rate_autosized(model),
        }
    }
}
