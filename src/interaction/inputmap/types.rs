use bevy::prelude::*;
use smallvec::SmallVec;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Binary,
    Axis1,
}

/// Internal index (array position) of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub u16);

#[derive(Debug, Clone)]
pub struct ActionMeta {
    pub id: ActionId,
    pub name: String,
    pub description: String,
    pub kind: ActionKind,
}

/// A raw device source an action can be bound to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BindingSource {
    Key(KeyCode),
    PadButton(GamepadButton),
    PadAxis(GamepadAxis),
}

#[derive(Default, Debug, Clone, Copy)]
pub struct BinaryState {
    pub pressed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

#[derive(Default, Debug, Clone, Copy)]
pub struct AxisState {
    pub value: f32,
    pub active: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum ActionState {
    Binary(BinaryState),
    Axis1(AxisState),
}

/// Resolved action map: declarations, bindings and per-frame state.
#[derive(Resource, Debug, Default)]
pub struct InputMap {
    pub actions: Vec<ActionMeta>,
    pub name_to_id: HashMap<String, ActionId>,
    /// Indexed by `ActionId`; most actions carry one or two sources.
    pub bindings: Vec<SmallVec<[BindingSource; 2]>>,
    pub states: Vec<ActionState>,
}

impl InputMap {
    pub fn state(&self, name: &str) -> Option<&ActionState> {
        self.name_to_id
            .get(name)
            .map(|id| &self.states[id.0 as usize])
    }

    pub fn pressed(&self, name: &str) -> bool {
        match self.state(name) {
            Some(ActionState::Binary(b)) => b.pressed,
            Some(ActionState::Axis1(a)) => a.active,
            None => false,
        }
    }

    pub fn just_pressed(&self, name: &str) -> bool {
        match self.state(name) {
            Some(ActionState::Binary(b)) => b.just_pressed,
            _ => false,
        }
    }

    pub fn just_released(&self, name: &str) -> bool {
        match self.state(name) {
            Some(ActionState::Binary(b)) => b.just_released,
            _ => false,
        }
    }

    pub fn axis1(&self, name: &str) -> f32 {
        match self.state(name) {
            Some(ActionState::Axis1(a)) => a.value,
            _ => 0.0,
        }
    }
}
