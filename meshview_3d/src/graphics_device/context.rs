/// Graphics context trait - immediate-mode command submission

use crate::error::Result;
use super::{
    Buffer, DepthStencilView, IndexType, InputLayout, RenderTargetView, Viewport,
};

/// Primitive assembly mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    TriangleList,
    TriangleStrip,
    LineList,
}

/// Immediate context: state setting, clears and draws
///
/// Commands execute in call order. Exclusively owned by one renderer.
pub trait GraphicsContext: Send {
    /// Bind the color target and optional depth/stencil target
    fn set_render_targets(
        &mut self,
        render_target: &dyn RenderTargetView,
        depth_stencil: Option<&dyn DepthStencilView>,
    ) -> Result<()>;

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Fill a color target with an RGBA value
    fn clear_render_target(&mut self, target: &dyn RenderTargetView, color: [f32; 4]) -> Result<()>;

    /// Reset depth and stencil of a depth/stencil target
    fn clear_depth_stencil(&mut self, target: &dyn DepthStencilView, depth: f32, stencil: u8) -> Result<()>;

    fn set_primitive_topology(&mut self, topology: PrimitiveTopology) -> Result<()>;

    fn set_input_layout(&mut self, layout: &dyn InputLayout) -> Result<()>;

    /// Bind a vertex buffer to slot 0
    ///
    /// # Arguments
    ///
    /// * `buffer` - Vertex buffer
    /// * `stride` - Bytes per vertex
    /// * `offset` - Byte offset of the first vertex
    fn set_vertex_buffer(&mut self, buffer: &dyn Buffer, stride: u32, offset: u32) -> Result<()>;

    fn set_index_buffer(&mut self, buffer: &dyn Buffer, index_type: IndexType, offset: u32) -> Result<()>;

    /// Draw indexed primitives with the bound state
    fn draw_indexed(&mut self, index_count: u32, first_index: u32, base_vertex: i32) -> Result<()>;

    /// Unbind everything
    fn clear_state(&mut self);

    /// Submit pending commands to the device
    fn flush(&mut self) -> Result<()>;
}
