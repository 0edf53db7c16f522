/// Input snapshot for one tick

use bitflags::bitflags;
use glam::Vec2;

bitflags! {
    /// Named viewer keys held down during a tick
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Keys: u8 {
        const FORWARD = 1 << 0;
        const BACK = 1 << 1;
        const STRAFE_LEFT = 1 << 2;
        const STRAFE_RIGHT = 1 << 3;
        const CYCLE_TECHNIQUE = 1 << 4;
        const TOGGLE_ROTATION = 1 << 5;
    }
}

bitflags! {
    /// Pointer buttons held down during a tick
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtons: u8 {
        const PRIMARY = 1 << 0;
        const SECONDARY = 1 << 1;
    }
}

/// How pointer motion is interpreted, derived from the held buttons.
///
/// Resolution order: both buttons, primary only, secondary only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseMode {
    /// No button held; pointer motion is ignored
    Idle,
    /// Both buttons: vertical motion pans along up, horizontal along right
    Pan,
    /// Primary only: vertical motion moves along forward, horizontal turns yaw
    Dolly,
    /// Secondary only: vertical motion turns pitch, horizontal turns yaw
    Look,
}

impl MouseMode {
    /// Resolve the mode for a button mask
    pub fn from_buttons(buttons: MouseButtons) -> Self {
        if buttons.contains(MouseButtons::PRIMARY | MouseButtons::SECONDARY) {
            MouseMode::Pan
        } else if buttons.contains(MouseButtons::PRIMARY) {
            MouseMode::Dolly
        } else if buttons.contains(MouseButtons::SECONDARY) {
            MouseMode::Look
        } else {
            MouseMode::Idle
        }
    }
}

/// Everything the camera and renderer read from input in one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Keys held down
    pub keys: Keys,
    /// Relative pointer motion since the previous tick (+x right, +y down)
    pub mouse_delta: Vec2,
    /// Pointer buttons held down
    pub mouse_buttons: MouseButtons,
}

impl InputSnapshot {
    /// Snapshot with only the given keys held
    pub fn with_keys(keys: Keys) -> Self {
        Self { keys, ..Default::default() }
    }

    /// Snapshot with pointer motion and buttons, no keys
    pub fn with_mouse(mouse_delta: Vec2, mouse_buttons: MouseButtons) -> Self {
        Self { keys: Keys::empty(), mouse_delta, mouse_buttons }
    }

    /// Whether every key in `keys` is held
    pub fn is_down(&self, keys: Keys) -> bool {
        self.keys.contains(keys)
    }

    /// Pointer interpretation for this tick
    pub fn mouse_mode(&self) -> MouseMode {
        MouseMode::from_buttons(self.mouse_buttons)
    }
}
