/// GraphicsDevice trait - resource factory interface

use std::path::Path;
use crate::error::Result;
use super::{
    Buffer, BufferDesc, DepthStencilView, Image, ImageDesc, InputLayout, InputSignature,
    ReadView, RenderTargetView, ShadingProgram, Swapchain, SwapchainDesc, VertexLayout,
};

/// Opaque identity of a device resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(pub u64);

/// Graphics device
///
/// Central factory for GPU resources. Implemented by backends.
/// Every returned resource is exclusively owned and released on drop.
pub trait GraphicsDevice: Send + Sync {
    /// Create an immutable buffer holding `data`
    ///
    /// # Arguments
    ///
    /// * `desc` - Buffer descriptor
    /// * `data` - Initial contents; must not be empty
    fn create_buffer(&self, desc: &BufferDesc, data: &[u8]) -> Result<Box<dyn Buffer>>;

    /// Create a 2D image, optionally uploading tightly packed pixels
    fn create_image(&self, desc: &ImageDesc, data: Option<&[u8]>) -> Result<Box<dyn Image>>;

    /// Create a shader-readable view over a sampled image
    fn create_read_view(&self, image: &dyn Image) -> Result<Box<dyn ReadView>>;

    /// Create an input layout validated against a pass input signature
    fn create_input_layout(
        &self,
        layout: &VertexLayout,
        signature: &InputSignature,
    ) -> Result<Box<dyn InputLayout>>;

    /// Compile a shading program from source
    fn create_shading_program(&self, path: &Path) -> Result<Box<dyn ShadingProgram>>;

    /// Create the swapchain for the window the device was created for
    fn create_swapchain(&self, desc: &SwapchainDesc) -> Result<Box<dyn Swapchain>>;

    fn create_render_target_view(&self, image: &dyn Image) -> Result<Box<dyn RenderTargetView>>;

    fn create_depth_stencil_view(&self, image: &dyn Image) -> Result<Box<dyn DepthStencilView>>;
}
