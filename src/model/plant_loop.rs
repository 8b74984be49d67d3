//! Plant loops
//!
//! Topology is reduced to demand-side membership: the loop owns a private
//! [`ModelObjectList`] with one entry per demand branch component.

use super::macros::declare_model_object;
use super::{AnyModelObject, ConcreteModelObject, Model, ModelObject, ModelObjectList, ObjectHandle};
use crate::workspace::{Handle, WorkspaceObject};
use tracing::debug;

mod fields {
    pub const FLUID_TYPE: usize = 2;
    pub const MAXIMUM_LOOP_TEMPERATURE: usize = 3;
    pub const MINIMUM_LOOP_TEMPERATURE: usize = 4;
    pub const MAXIMUM_LOOP_FLOW_RATE: usize = 5;
    pub const DEMAND_COMPONENT_LIST_NAME: usize = 6;
}

declare_model_object! {
    /// Hot or chilled water loop serving coils on its demand side
    PlantLoop => OsPlantLoop
}

impl PlantLoop {
    pub fn new(model: &mut Model) -> Self {
        let plant_loop = Self(model.add_record(Self::IDD_OBJECT_TYPE));
        plant_loop.create_demand_list(model);
        plant_loop
    }

    fn create_demand_list(&self, model: &mut Model) -> ModelObjectList {
        let list = ModelObjectList::new(model);
        if let Some(name) = self.name(model) {
            list.set_name(model, &format!("{name} Demand Component List"));
        }
        model.set_target(self.0, fields::DEMAND_COMPONENT_LIST_NAME, list.handle());
        list
    }

    fn demand_list(&self, model: &Model) -> Option<ModelObjectList> {
        model.target(self.0, fields::DEMAND_COMPONENT_LIST_NAME)
    }

    /// The loop whose demand side holds `component`, if any
    pub fn for_demand_component(model: &Model, component: impl ObjectHandle) -> Option<PlantLoop> {
        model
            .objects::<PlantLoop>()
            .into_iter()
            .find(|plant_loop| {
                plant_loop
                    .demand_list(model)
                    .is_some_and(|list| list.has_model_object(model, component))
            })
    }

    /// Put `component` on a new demand branch
    ///
    /// A component sits on at most one demand side; components of another
    /// model or already connected are rejected.
    pub fn add_demand_branch_for_component(&self, model: &mut Model, component: impl ObjectHandle) -> bool {
        if !model.contains(component.handle()) {
            return false;
        }
        if let Some(existing) = Self::for_demand_component(model, component) {
            debug!(component = %component.handle(), plant_loop = %existing.0, "component already on a demand branch");
            return false;
        }
        let list = match self.demand_list(model) {
            Some(list) => list,
            None => self.create_demand_list(model),
        };
        list.add_model_object(model, component)
    }

    pub fn remove_demand_branch_with_component(&self, model: &mut Model, component: impl ObjectHandle) -> bool {
        self.demand_list(model)
            .is_some_and(|list| list.remove_model_object(model, component))
    }

    pub fn demand_components(&self, model: &Model) -> Vec<AnyModelObject> {
        self.demand_list(model)
            .map(|list| list.model_objects(model))
            .unwrap_or_default()
    }

    pub fn fluid_type(&self, model: &Model) -> String {
        model.required_string(self.0, fields::FLUID_TYPE)
    }

    pub fn set_fluid_type(&self, model: &mut Model, fluid_type: &str) -> bool {
        model.set_string(self.0, fields::FLUID_TYPE, fluid_type)
    }

    pub fn maximum_loop_temperature(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::MAXIMUM_LOOP_TEMPERATURE)
    }

    pub fn set_maximum_loop_temperature(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::MAXIMUM_LOOP_TEMPERATURE, value)
    }

    pub fn minimum_loop_temperature(&self, model: &Model) -> f64 {
        model.required_double(self.0, fields::MINIMUM_LOOP_TEMPERATURE)
    }

    pub fn set_minimum_loop_temperature(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::MINIMUM_LOOP_TEMPERATURE, value)
    }

    /// `None` while autosized
    pub fn maximum_loop_flow_rate(&self, model: &Model) -> Option<f64> {
        model.optional_double(self.0, fields::MAXIMUM_LOOP_FLOW_RATE)
    }

    pub fn is_maximum_loop_flow_rate_autosized(&self, model: &Model) -> bool {
        model.is_autosized(self.0, fields::MAXIMUM_LOOP_FLOW_RATE)
    }

    pub fn set_maximum_loop_flow_rate(&self, model: &mut Model, value: f64) -> bool {
        model.set_double(self.0, fields::MAXIMUM_LOOP_FLOW_RATE, value)
    }

    pub fn autosize_maximum_loop_flow_rate(&self, model: &mut Model) {
        model.autosize(self.0, fields::MAXIMUM_LOOP_FLOW_RATE);
    }
}

impl ModelObject for PlantLoop {
    fn children(&self, model: &Model) -> Vec<Handle> {
        self.demand_list(model).map(|list| list.handle()).into_iter().collect()
    }

    /// Remove the loop and its list
    ///
    /// Demand components used by another object are only detached; the rest
    /// are removed with the loop.
    fn remove(&self, model: &mut Model) -> Vec<WorkspaceObject> {
        let components = self.demand_components(model);
        let mut removed = Vec::new();
        if let Some(list) = self.demand_list(model) {
            list.remove_all_model_objects(model);
            removed.extend(model.remove_record(list.handle()));
        }
        removed.extend(model.remove_record(self.0));
        for component in components {
            if model.workspace().sources(component.handle()).is_empty() {
                removed.extend(component.remove(model));
            }
        }
        removed
    }

    /// The copy starts with an empty demand side
    fn clone_into_model(&self, source: &Model, target: &mut Model) -> Self {
        let copy = Self(target.clone_record(source, self.0, &[fields::DEMAND_COMPONENT_LIST_NAME]));
        copy.create_demand_list(target);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CoilHeatingWater, ThermalZone};

    #[test]
    fn test_defaults() {
        let mut model = Model::new();
        let plant_loop = PlantLoop::new(&mut model);
        assert_eq!(plant_loop.fluid_type(&model), "Water");
        assert!(plant_loop.is_maximum_loop_flow_rate_autosized(&model));
        assert_eq!(plant_loop.maximum_loop_flow_rate(&model), None);
        assert!(plant_loop.set_fluid_type(&mut model, "propyleneglycol"));
        assert_eq!(plant_loop.fluid_type(&model), "PropyleneGlycol");
        assert!(plant_loop.demand_components(&model).is_empty());
    }

    #[test]
    fn test_demand_membership_is_exclusive() {
        let mut model = Model::new();
        let first = PlantLoop::new(&mut model);
        let second = PlantLoop::new(&mut model);
        let coil = CoilHeatingWater::new(&mut model);

        assert!(first.add_demand_branch_for_component(&mut model, coil));
        assert!(!second.add_demand_branch_for_component(&mut model, coil));
        assert_eq!(PlantLoop::for_demand_component(&model, coil), Some(first));
        assert_eq!(first.demand_components(&model), vec![AnyModelObject::from(coil)]);

        assert!(first.remove_demand_branch_with_component(&mut model, coil));
        assert!(second.add_demand_branch_for_component(&mut model, coil));
        assert_eq!(PlantLoop::for_demand_component(&model, coil), Some(second));
    }

    #[test]
    fn test_remove_takes_unused_components() {
        let mut model = Model::new();
        let plant_loop = PlantLoop::new(&mut model);
        let coil = CoilHeatingWater::new(&mut model);
        let zone = ThermalZone::new(&mut model);
        plant_loop.add_demand_branch_for_component(&mut model, coil);

        plant_loop.remove(&mut model);
        assert!(!model.contains(plant_loop.handle()));
        assert!(!model.contains(coil.handle()));
        assert!(model.contains(zone.handle()));
        assert!(model.objects::<ModelObjectList>().is_empty());
    }

    #[test]
    fn test_clone_has_empty_demand_side() {
        let mut model = Model::new();
        let plant_loop = PlantLoop::new(&mut model);
        let coil = CoilHeatingWater::new(&mut model);
        plant_loop.add_demand_branch_for_component(&mut model, coil);

        let copy = plant_loop.clone_object(&mut model);
        assert_ne!(copy, plant_loop);
        assert!(copy.demand_components(&model).is_empty());
        assert_eq!(plant_loop.demand_components(&model).len(), 1);
        assert_eq!(model.objects::<ModelObjectList>().len(), 2);
    }
}
