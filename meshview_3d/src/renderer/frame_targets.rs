/// FrameTargets: swapchain, depth-stencil buffer and back-buffer view.
///
/// Everything the renderer clears and presents into each frame. Created in
/// one go by `create`; a failure part-way releases what was already built.

use crate::error::Result;
use crate::graphics_device::{
    DepthStencilView, GraphicsContext, GraphicsDevice, Image, ImageDesc, ImageFormat, ImageUsage,
    RenderTargetView, Swapchain, SwapchainDesc, Viewport,
};
use crate::viewer_debug;

const LOG_SOURCE: &str = "meshview::FrameTargets";

/// Depth cleared to before drawing
pub const CLEAR_DEPTH: f32 = 1.0;

/// Stencil cleared to before drawing
pub const CLEAR_STENCIL: u8 = 0;

pub struct FrameTargets {
    // Field order is drop order: reverse of creation
    render_target_view: Box<dyn RenderTargetView>,
    back_buffer: Box<dyn Image>,
    depth_stencil_view: Box<dyn DepthStencilView>,
    depth_stencil_buffer: Box<dyn Image>,
    swapchain: Box<dyn Swapchain>,
}

impl FrameTargets {
    /// Build the targets, then bind them and a full-size viewport on `context`.
    ///
    /// Creation order: swapchain, depth-stencil buffer and view, back buffer
    /// and render-target view.
    pub fn create(
        device: &dyn GraphicsDevice,
        context: &mut dyn GraphicsContext,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let swapchain = device.create_swapchain(&SwapchainDesc::new(width, height))?;

        let depth_stencil_buffer = device.create_image(
            &ImageDesc {
                label: "depth_stencil".to_string(),
                width,
                height,
                format: ImageFormat::D24_UNORM_S8_UINT,
                usage: ImageUsage::DepthStencil,
            },
            None,
        )?;
        let depth_stencil_view = device.create_depth_stencil_view(depth_stencil_buffer.as_ref())?;

        let back_buffer = swapchain.back_buffer()?;
        let render_target_view = device.create_render_target_view(back_buffer.as_ref())?;

        context.set_render_targets(render_target_view.as_ref(), Some(depth_stencil_view.as_ref()))?;
        context.set_viewport(Viewport::full(width, height))?;

        viewer_debug!(LOG_SOURCE, "frame targets ready ({}x{})", width, height);

        Ok(Self {
            render_target_view,
            back_buffer,
            depth_stencil_view,
            depth_stencil_buffer,
            swapchain,
        })
    }

    /// Clear the back buffer to `color`, depth to 1 and stencil to 0
    pub fn clear(&self, context: &mut dyn GraphicsContext, color: [f32; 4]) -> Result<()> {
        context.clear_render_target(self.render_target_view.as_ref(), color)?;
        context.clear_depth_stencil(self.depth_stencil_view.as_ref(), CLEAR_DEPTH, CLEAR_STENCIL)
    }

    pub fn present(&mut self) -> Result<()> {
        self.swapchain.present()
    }

    pub fn width(&self) -> u32 {
        self.swapchain.desc().width
    }

    pub fn height(&self) -> u32 {
        self.swapchain.desc().height
    }

    pub fn back_buffer(&self) -> &dyn Image {
        self.back_buffer.as_ref()
    }

    pub fn depth_stencil_buffer(&self) -> &dyn Image {
        self.depth_stencil_buffer.as_ref()
    }
}

#[cfg(test)]
#[path = "frame_targets_tests.rs"]
mod tests;
