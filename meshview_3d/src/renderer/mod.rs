/// Renderer module - frame targets and per-frame orchestration

pub mod frame_targets;
pub mod renderer;

pub use frame_targets::*;
pub use renderer::*;
