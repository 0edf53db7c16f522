//! Input module: per-tick input snapshots and toggle edge detection.
//!
//! The camera and renderer never poll a global input subsystem. They receive
//! an `InputSnapshot` value each tick. `InputTracker` builds those snapshots
//! from winit events.

mod snapshot;
mod edge_trigger;
mod tracker;

pub use snapshot::{InputSnapshot, Keys, MouseButtons, MouseMode};
pub use edge_trigger::{EdgeTrigger, TriggerState};
pub use tracker::InputTracker;
