//! Thermal zones

use super::macros::declare_model_object;
use super::{ConcreteModelObject, Model, ModelObject};

mod fields {
    pub const MULTIPLIER: usize = 2;
    pub const CEILING_HEIGHT: usize = 3;
    pub const VOLUME: usize = 4;
}

declare_model_object! {
    /// Conditioned air volume served by zone equipment
    ThermalZone => OsThermalZone
}

impl ModelObject for ThermalZone {}

impl ThermalZone {
    pub fn new(model: &mut Model) -> Self {
        Self(model.add_record(Self::IDD_OBJECT_TYPE))
    }

    pub fn multiplier(&self, model: &Model) -> i64 {
        model.required_int(self.0, fields::MULTIPLIER)
    }

    pub fn is_multiplier_defaulted(&self, model: &Model) -> bool {
        model.is_defaulted(self.0, fields::MULTIPLIER)
    }

    /// Multipliers below one are rejected
    pub fn set_multiplier(&self, model: &mut Model, multiplier: i64) -> bool {
        model.set_int(self.0, fields::MULTIPLIER, multiplier)
    }

    pub fn reset_multiplier(&self, model: &mut Model) {
        model.reset(self.0, fields::MULTIPLIER);
    }

    /// `None` while autocalculated
    pub fn ceiling_height(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, fields::CEILING_HEIGHT)
    }

    pub fn is_ceiling_height_autocalculated(&self, model: &Model) -> bool {
        model.is_autocalculated(self.0, fields::CEILING_HEIGHT)
    }

    pub fn set_ceiling_height(&self, model: &mut Model, height: f64) -> bool {
        model.set_double(self.0, fields::CEILING_HEIGHT, height)
    }

    pub fn autocalculate_ceiling_height(&self, model: &mut Model) {
        model.autocalculate(self.0, fields::CEILING_HEIGHT);
    }

    /// `None` while autocalculated
    pub fn volume(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, fields::VOLUME)
    }

    pub fn is_volume_autocalculated(&self, model: &Model) -> bool {
        model.is_autocalculated(self.0, fields::VOLUME)
    }

    pub fn set_volume(&self, model: &mut Model, volume: f64) -> bool {
        model.set_double(self.0, fields::VOLUME, volume)
    }

    pub fn autocalculate_volume(&self, model: &mut Model) {
        model.autocalculate(self.0, fields::VOLUME);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_bounds() {
        let mut model = Model::new();
        let zone = ThermalZone::new(&mut model);
        assert!(zone.is_multiplier_defaulted(&model));
        assert_eq!(zone.multiplier(&model), 1);
        assert!(!zone.set_multiplier(&mut model, 0));
        assert!(zone.set_multiplier(&mut model, 4));
        assert_eq!(zone.multiplier(&model), 4);
        zone.reset_multiplier(&mut model);
        assert_eq!(zone.multiplier(&model), 1);
    }

    #[test]
    fn test_volume_autocalculate() {
        let mut model = Model::new();
        let zone = ThermalZone::new(&mut model);
        assert!(zone.is_volume_autocalculated(&model));
        assert_eq!(zone.volume(&model), None);
        assert!(zone.set_volume(&mut model, 300.0));
        assert_eq!(zone.volume(&model), Some(300.0));
        assert!(!zone.is_volume_autocalculated(&model));
        zone.autocalculate_volume(&mut model);
        assert!(zone.is_volume_autocalculated(&model));
    }
}
