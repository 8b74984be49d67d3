//! Performance curves
//!
//! Univariate curves ([`CurveQuadratic`], [`CurveCubic`]) and the bivariate
//! [`CurveBiquadratic`]. Inputs are clamped to the declared variable limits
//! before evaluation and the result is clamped to the output limits.

use super::macros::{declare_model_object, model_object_enum};
use super::{ConcreteModelObject, Model, ModelObject};
use crate::workspace::Handle;

fn clamp(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let value = min.map_or(value, |min| value.max(min));
    max.map_or(value, |max| value.min(max))
}

/// Field positions shared by the univariate layouts
struct UnivariateLayout {
    coefficients: usize,
    minimum_x: usize,
}

impl UnivariateLayout {
    fn maximum_x(&self) -> usize {
        self.minimum_x + 1
    }
    fn minimum_output(&self) -> usize {
        self.minimum_x + 2
    }
    fn maximum_output(&self) -> usize {
        self.minimum_x + 3
    }
    fn input_unit_x(&self) -> usize {
        self.minimum_x + 4
    }
    fn output_unit(&self) -> usize {
        self.minimum_x + 5
    }

    fn evaluate(&self, model: &Model, handle: Handle, x: f64) -> f64 {
        let x = clamp(
            x,
            model.optional_double(handle, self.minimum_x),
            model.optional_double(handle, self.maximum_x()),
        );
        let result = (self.coefficients..self.minimum_x)
            .rev()
            .fold(0.0, |acc, index| acc * x + model.required_double(handle, index));
        clamp(
            result,
            model.optional_double(handle, self.minimum_output()),
            model.optional_double(handle, self.maximum_output()),
        )
    }
}

const QUADRATIC: UnivariateLayout = UnivariateLayout {
    coefficients: 2,
    minimum_x: 5,
};
const CUBIC: UnivariateLayout = UnivariateLayout {
    coefficients: 2,
    minimum_x: 6,
};

/// Accessors common to the univariate curve facades
macro_rules! univariate_accessors {
    ($layout:expr) => {
        pub fn minimum_value_of_x(&self, model: &Model) -> Option<f64> {
            model.optional_double(self.0, $layout.minimum_x)
        }

        pub fn set_minimum_value_of_x(&self, model: &mut Model, value: Option<f64>) -> bool {
            model.set_optional_double(self.0, $layout.minimum_x, value)
        }

        pub fn maximum_value_of_x(&self, model: &Model) -> Option<f64> {
            model.optional_double(self.0, $layout.maximum_x())
        }

        pub fn set_maximum_value_of_x(&self, model: &mut Model, value: Option<f64>) -> bool {
            model.set_optional_double(self.0, $layout.maximum_x(), value)
        }

        pub fn minimum_curve_output(&self, model: &Model) -> Option<f64> {
            model.optional_double(self.0, $layout.minimum_output())
        }

        pub fn set_minimum_curve_output(&self, model: &mut Model, value: Option<f64>) -> bool {
            model.set_optional_double(self.0, $layout.minimum_output(), value)
        }

        pub fn maximum_curve_output(&self, model: &Model) -> Option<f64> {
            model.optional_double(self.0, $layout.maximum_output())
        }

        pub fn set_maximum_curve_output(&self, model: &mut Model, value: Option<f64>) -> bool {
            model.set_optional_double(self.0, $layout.maximum_output(), value)
        }

        pub fn input_unit_type_for_x(&self, model: &Model) -> String {
            model.required_string(self.0, $layout.input_unit_x())
        }

        pub fn is_input_unit_type_for_x_defaulted(&self, model: &Model) -> bool {
            model.is_defaulted(self.0, $layout.input_unit_x())
        }

        pub fn set_input_unit_type_for_x(&self, model: &mut Model, unit: &str) -> bool {
            model.set_string(self.0, $layout.input_unit_x(), unit)
        }

        pub fn reset_input_unit_type_for_x(&self, model: &mut Model) {
            model.reset(self.0, $layout.input_unit_x());
        }

        pub fn output_unit_type(&self, model: &Model) -> String {
            model.required_string(self.0, $layout.output_unit())
        }

        pub fn is_output_unit_type_defaulted(&self, model: &Model) -> bool {
            model.is_defaulted(self.0, $layout.output_unit())
        }

        pub fn set_output_unit_type(&self, model: &mut Model, unit: &str) -> bool {
            model.set_string(self.0, $layout.output_unit(), unit)
        }

        pub fn reset_output_unit_type(&self, model: &mut Model) {
            model.reset(self.0, $layout.output_unit());
        }

        /// Curve value at `x`
        pub fn evaluate(&self, model: &Model, x: f64) -> f64 {
            $layout.evaluate(model, self.0, x)
        }
    };
}

declare_model_object! {
    /// `c1 + c2*x + c3*x^2`
    CurveQuadratic => OsCurveQuadratic
}

impl ModelObject for CurveQuadratic {}

impl CurveQuadratic {
    /// Identity-like curve `y = x^2` on `[0, 1]`
    pub fn new(model: &mut Model) -> Self {
        let curve = Self(model.add_record(Self::IDD_OBJECT_TYPE));
        curve.set_coefficients(model, [0.0, 0.0, 1.0]);
        curve.set_minimum_value_of_x(model, Some(0.0));
        curve.set_maximum_value_of_x(model, Some(1.0));
        curve
    }

    pub fn coefficients(&self, model: &Model) -> [f64; 3] {
        std::array::from_fn(|i| model.required_double(self.0, QUADRATIC.coefficients + i))
    }

    pub fn set_coefficients(&self, model: &mut Model, coefficients: [f64; 3]) -> bool {
        coefficients
            .iter()
            .enumerate()
            .all(|(i, c)| model.set_double(self.0, QUADRATIC.coefficients + i, *c))
    }

    univariate_accessors!(QUADRATIC);
}

declare_model_object! {
    /// `c1 + c2*x + c3*x^2 + c4*x^3`
    CurveCubic => OsCurveCubic
}

impl ModelObject for CurveCubic {}

impl CurveCubic {
    /// `y = x^3` on `[0, 1]`
    pub fn new(model: &mut Model) -> Self {
        let curve = Self(model.add_record(Self::IDD_OBJECT_TYPE));
        curve.set_coefficients(model, [0.0, 0.0, 0.0, 1.0]);
        curve.set_minimum_value_of_x(model, Some(0.0));
        curve.set_maximum_value_of_x(model, Some(1.0));
        curve
    }

    pub fn coefficients(&self, model: &Model) -> [f64; 4] {
        std::array::from_fn(|i| model.required_double(self.0, CUBIC.coefficients + i))
    }

    pub fn set_coefficients(&self, model: &mut Model, coefficients: [f64; 4]) -> bool {
        coefficients
            .iter()
            .enumerate()
            .all(|(i, c)| model.set_double(self.0, CUBIC.coefficients + i, *c))
    }

    univariate_accessors!(CUBIC);
}

mod biquadratic_fields {
    pub const COEFFICIENT1_CONSTANT: usize = 2;
    pub const MINIMUM_VALUE_OF_X: usize = 8;
    pub const MAXIMUM_VALUE_OF_X: usize = 9;
    pub const MINIMUM_VALUE_OF_Y: usize = 10;
    pub const MAXIMUM_VALUE_OF_Y: usize = 11;
    pub const MINIMUM_CURVE_OUTPUT: usize = 12;
    pub const MAXIMUM_CURVE_OUTPUT: usize = 13;
    pub const INPUT_UNIT_TYPE_FOR_X: usize = 14;
    pub const INPUT_UNIT_TYPE_FOR_Y: usize = 15;
    pub const OUTPUT_UNIT_TYPE: usize = 16;
}

use biquadratic_fields as bq;

declare_model_object! {
    /// `c1 + c2*x + c3*x^2 + c4*y + c5*y^2 + c6*x*y`
    CurveBiquadratic => OsCurveBiquadratic
}

impl ModelObject for CurveBiquadratic {}

impl CurveBiquadratic {
    /// Constant unit curve on `[0, 1] x [0, 1]`
    pub fn new(model: &mut Model) -> Self {
        let curve = Self(model.add_record(Self::IDD_OBJECT_TYPE));
        curve.set_coefficients(model, [1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        curve.set_limits(model, (0.0, 1.0), (0.0, 1.0));
        curve
    }

    pub fn coefficients(&self, model: &Model) -> [f64; 6] {
        std::array::from_fn(|i| model.required_double(self.0, bq::COEFFICIENT1_CONSTANT + i))
    }

    pub fn set_coefficients(&self, model: &mut Model, coefficients: [f64; 6]) -> bool {
        coefficients
            .iter()
            .enumerate()
            .all(|(i, c)| model.set_double(self.0, bq::COEFFICIENT1_CONSTANT + i, *c))
    }

    /// Set the `(min, max)` ranges of both variables
    pub fn set_limits(&self, model: &mut Model, x: (f64, f64), y: (f64, f64)) -> bool {
        [
            (bq::MINIMUM_VALUE_OF_X, x.0),
            (bq::MAXIMUM_VALUE_OF_X, x.1),
            (bq::MINIMUM_VALUE_OF_Y, y.0),
            (bq::MAXIMUM_VALUE_OF_Y, y.1),
        ]
        .iter()
        .all(|(index, value)| model.set_double(self.0, *index, *value))
    }

    pub fn minimum_value_of_x(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, bq::MINIMUM_VALUE_OF_X)
    }

    pub fn maximum_value_of_x(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, bq::MAXIMUM_VALUE_OF_X)
    }

    pub fn minimum_value_of_y(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, bq::MINIMUM_VALUE_OF_Y)
    }

    pub fn maximum_value_of_y(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, bq::MAXIMUM_VALUE_OF_Y)
    }

    pub fn minimum_curve_output(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, bq::MINIMUM_CURVE_OUTPUT)
    }

    pub fn set_minimum_curve_output(&self, model: &mut Model, value: Option<f64>) -> bool {
        model.set_optional_double(self.0, bq::MINIMUM_CURVE_OUTPUT, value)
    }

    pub fn maximum_curve_output(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, bq::MAXIMUM_CURVE_OUTPUT)
    }

    pub fn set_maximum_curve_output(&self, model: &mut Model, value: Option<f64>) -> bool {
        model.set_optional_double(self.0, bq::MAXIMUM_CURVE_OUTPUT, value)
    }

    pub fn input_unit_type_for_x(&self, model: &Model) -> String {
        model.required_string(self.0, bq::INPUT_UNIT_TYPE_FOR_X)
    }

    pub fn set_input_unit_type_for_x(&self, model: &mut Model, unit: &str) -> bool {
        model.set_string(self.0, bq::INPUT_UNIT_TYPE_FOR_X, unit)
    }

    pub fn input_unit_type_for_y(&self, model: &Model) -> String {
        model.required_string(self.0, bq::INPUT_UNIT_TYPE_FOR_Y)
    }

    pub fn set_input_unit_type_for_y(&self, model: &mut Model, unit: &str) -> bool {
        model.set_string(self.0, bq::INPUT_UNIT_TYPE_FOR_Y, unit)
    }

    pub fn output_unit_type(&self, model: &Model) -> String {
        model.required_string(self.0, bq::OUTPUT_UNIT_TYPE)
    }

    pub fn set_output_unit_type(&self, model: &mut Model, unit: &str) -> bool {
        model.set_string(self.0, bq::OUTPUT_UNIT_TYPE, unit)
    }

    pub fn evaluate(&self, model: &Model, x: f64, y: f64) -> f64 {
        let x = clamp(x, self.minimum_value_of_x(model), self.maximum_value_of_x(model));
        let y = clamp(y, self.minimum_value_of_y(model), self.maximum_value_of_y(model));
        let [c1, c2, c3, c4, c5, c6] = self.coefficients(model);
        let result = c1 + c2 * x + c3 * x * x + c4 * y + c5 * y * y + c6 * x * y;
        clamp(result, self.minimum_curve_output(model), self.maximum_curve_output(model))
    }
}

model_object_enum! {
    /// Any performance curve
    Curve {
        Quadratic(CurveQuadratic),
        Cubic(CurveCubic),
        Biquadratic(CurveBiquadratic),
    }
}

impl Curve {
    pub fn is_univariate(&self) -> bool {
        !matches!(self, Curve::Biquadratic(_))
    }

    /// Value at `(x, y)`; univariate curves ignore `y`
    pub fn evaluate(&self, model: &Model, x: f64, y: f64) -> f64 {
        match self {
            Curve::Quadratic(curve) => curve.evaluate(model, x),
            Curve::Cubic(curve) => curve.evaluate(model, x),
            Curve::Biquadratic(curve) => curve.evaluate(model, x, y),
        }
    }
}
