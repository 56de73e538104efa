//! Input collaborator and the per-frame input sample.

use bevy::prelude::Resource;

/// Analogue axes read by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left (-1) to right (+1).
    Horizontal,
}

/// Digital buttons read by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Starts a jump arc.
    Jump,
    /// Replaces the vertical direction with the drop speed.
    Drop,
}

/// Source of raw player input.
pub trait InputSource {
    /// Unsmoothed axis value in `[-1, 1]`.
    fn axis_raw(&self, axis: Axis) -> f32;

    /// Whether `button` is currently held.
    fn button_held(&self, button: Button) -> bool;
}

/// Input read once per frame and shared by that frame's steps.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct InputFrame {
    /// Horizontal axis, clamped to `[-1, 1]`.
    pub horizontal: f32,
    /// Jump button held.
    pub jump: bool,
    /// Drop button held.
    pub drop: bool,
}

impl InputFrame {
    /// Reads every input the controller uses from `source`.
    ///
    /// Non-finite axis values read as centred.
    pub fn sample<S: InputSource + ?Sized>(source: &S) -> Self {
        let raw = source.axis_raw(Axis::Horizontal);
        Self {
            horizontal: if raw.is_finite() {
                raw.clamp(-1.0, 1.0)
            } else {
                0.0
            },
            jump: source.button_held(Button::Jump),
            drop: source.button_held(Button::Drop),
        }
    }
}

impl InputSource for InputFrame {
    fn axis_raw(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal,
        }
    }

    fn button_held(&self, button: Button) -> bool {
        match button {
            Button::Jump => self.jump,
            Button::Drop => self.drop,
        }
    }
}
