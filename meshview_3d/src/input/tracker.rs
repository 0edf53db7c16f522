/// Builds per-tick `InputSnapshot`s from winit events

use glam::Vec2;
use winit::event::{DeviceEvent, ElementState, MouseButton, WindowEvent};
use winit::keyboard::PhysicalKey;
use crate::config::KeyBindings;
use super::snapshot::{InputSnapshot, Keys, MouseButtons};

/// Accumulates window/device events between ticks.
///
/// Key and button state persists across ticks; pointer motion is summed
/// until `snapshot()` consumes it.
#[derive(Debug, Clone)]
pub struct InputTracker {
    bindings: KeyBindings,
    keys: Keys,
    mouse_buttons: MouseButtons,
    mouse_delta: Vec2,
}

impl InputTracker {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            keys: Keys::empty(),
            mouse_buttons: MouseButtons::empty(),
            mouse_delta: Vec2::ZERO,
        }
    }

    /// Handle a window event (keyboard, mouse buttons, focus)
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key(event.physical_key, event.state);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_button(*button, *state);
            }
            WindowEvent::Focused(false) => {
                self.release_all();
            }
            _ => {}
        }
    }

    /// Handle a raw device event (relative pointer motion)
    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.handle_mouse_motion(*delta);
        }
    }

    /// Update the held state of a bound key; unbound keys are ignored
    pub fn handle_key(&mut self, key: PhysicalKey, state: ElementState) {
        let PhysicalKey::Code(code) = key else {
            return;
        };
        let b = &self.bindings;
        let named = if code == b.forward {
            Keys::FORWARD
        } else if code == b.back {
            Keys::BACK
        } else if code == b.strafe_left {
            Keys::STRAFE_LEFT
        } else if code == b.strafe_right {
            Keys::STRAFE_RIGHT
        } else if code == b.cycle_technique {
            Keys::CYCLE_TECHNIQUE
        } else if code == b.toggle_rotation {
            Keys::TOGGLE_ROTATION
        } else {
            return;
        };
        self.keys.set(named, state.is_pressed());
    }

    /// Update the held state of the primary (left) or secondary (right) button
    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let flag = match button {
            MouseButton::Left => MouseButtons::PRIMARY,
            MouseButton::Right => MouseButtons::SECONDARY,
            _ => return,
        };
        self.mouse_buttons.set(flag, state.is_pressed());
    }

    /// Accumulate relative pointer motion
    pub fn handle_mouse_motion(&mut self, delta: (f64, f64)) {
        self.mouse_delta += Vec2::new(delta.0 as f32, delta.1 as f32);
    }

    /// Drop all held keys and buttons (focus loss)
    pub fn release_all(&mut self) {
        self.keys = Keys::empty();
        self.mouse_buttons = MouseButtons::empty();
    }

    /// Take the snapshot for this tick and reset accumulated motion
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            keys: self.keys,
            mouse_delta: self.mouse_delta,
            mouse_buttons: self.mouse_buttons,
        };
        self.mouse_delta = Vec2::ZERO;
        snapshot
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
