/// Press/release edge detection for toggle keys

/// State of one toggle key as last observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerState {
    #[default]
    Released,
    Pressed,
}

/// Fires once on the Released → Pressed transition.
///
/// Holding the key across many ticks fires only on the first one; the key
/// must be seen released before it can fire again.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    state: TriggerState,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current key level, returns `true` on a press edge
    pub fn update(&mut self, is_down: bool) -> bool {
        let (next, fired) = match (self.state, is_down) {
            (TriggerState::Released, true) => (TriggerState::Pressed, true),
            (TriggerState::Released, false) => (TriggerState::Released, false),
            (TriggerState::Pressed, true) => (TriggerState::Pressed, false),
            (TriggerState::Pressed, false) => (TriggerState::Released, false),
        };
        self.state = next;
        fired
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }
}
