//! Camera module: fly-through camera driven by per-tick input.
//!
//! The camera owns its world-space pose and derives the view, inverse-view
//! and projection matrices the renderer pushes into the shading program.

mod camera;

pub use camera::{Camera, MAX_PITCH_DEGREES};
