/// Swapchain trait - for window presentation

use crate::error::Result;
use super::{Image, ImageFormat};

/// Descriptor for creating a swapchain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapchainDesc {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    /// Number of buffers in the flip chain
    pub buffer_count: u32,
}

impl SwapchainDesc {
    /// Double-buffered RGBA8 chain
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            format: ImageFormat::R8G8B8A8_UNORM,
            buffer_count: 2,
        }
    }
}

/// Swapchain for presenting rendered images to a window
pub trait Swapchain: Send + Sync {
    fn desc(&self) -> &SwapchainDesc;

    /// Fetch the image rendering goes into for the next `present`
    fn back_buffer(&self) -> Result<Box<dyn Image>>;

    /// Present the back buffer to the screen
    fn present(&mut self) -> Result<()>;
}
