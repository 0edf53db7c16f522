/// Graphics device module - collaborator traits implemented by backends

// Module declarations
pub mod graphics_device;
pub mod context;
pub mod buffer;
pub mod gpu_image;
pub mod input_layout;
pub mod shading_program;
pub mod render_target;
pub mod swapchain;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use context::*;
pub use buffer::*;
pub use gpu_image::*;
pub use input_layout::*;
pub use shading_program::*;
pub use render_target::*;
pub use swapchain::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
