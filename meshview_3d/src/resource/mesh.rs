//! Drawable mesh.
//!
//! A `Mesh` owns its shading binding, its world transform, the currently
//! selected technique and, when construction succeeded, the GPU geometry
//! (input layout, immutable vertex buffer, immutable index buffer).
//!
//! Material textures are only borrowed during construction: their read-views
//! are bound into the shading program and the mesh keeps no reference.

use std::path::Path;
use glam::Mat4;
use crate::error::{Error, Result};
use crate::graphics_device::{
    Buffer, BufferDesc, BufferUsage, GraphicsContext, GraphicsDevice, IndexType, InputLayout,
    PrimitiveTopology,
};
use crate::shading::{ShadingBinding, Technique, TextureSlot};
use crate::{viewer_debug, viewer_error, viewer_info};
use super::texture::Texture;
use super::vertex::Vertex;

const LOG_SOURCE: &str = "meshview::Mesh";

// ============================================================================
// MATERIAL TEXTURES
// ============================================================================

/// Material maps forwarded to the shading binding; absent slots are skipped
#[derive(Clone, Copy, Default)]
pub struct MaterialTextures<'a> {
    pub diffuse: Option<&'a Texture>,
    pub normal: Option<&'a Texture>,
    pub specular: Option<&'a Texture>,
    pub glossiness: Option<&'a Texture>,
}

impl<'a> MaterialTextures<'a> {
    pub fn get(&self, slot: TextureSlot) -> Option<&'a Texture> {
        match slot {
            TextureSlot::Diffuse => self.diffuse,
            TextureSlot::Normal => self.normal,
            TextureSlot::Specular => self.specular,
            TextureSlot::Glossiness => self.glossiness,
        }
    }
}

// ============================================================================
// GPU GEOMETRY
// ============================================================================

/// Device-side geometry, all or nothing
struct GpuGeometry {
    // Field order is drop order: reverse of creation
    index_buffer: Box<dyn Buffer>,
    vertex_buffer: Box<dyn Buffer>,
    input_layout: Box<dyn InputLayout>,
    index_count: u32,
}

impl GpuGeometry {
    /// Create layout, vertex buffer, index buffer in that order; the first
    /// failure stops the sequence and drops whatever was already created.
    fn create(
        device: &dyn GraphicsDevice,
        shading: &ShadingBinding,
        technique: Technique,
        vertices: &[Vertex],
        indices: &[u32],
    ) -> Result<Self> {
        if vertices.is_empty() {
            return Err(Error::InvalidResource("empty vertex sequence".to_string()));
        }
        if indices.is_empty() {
            return Err(Error::InvalidResource("empty index sequence".to_string()));
        }
        let index_count = u32::try_from(indices.len())
            .map_err(|_| Error::InvalidResource(format!("{} indices exceed u32", indices.len())))?;

        let signature = shading.input_signature(technique, 0)?;
        let input_layout = device.create_input_layout(&Vertex::layout(), &signature)?;

        let vertex_buffer = device.create_buffer(
            &BufferDesc { label: "vertex_buffer".to_string(), usage: BufferUsage::Vertex },
            bytemuck::cast_slice(vertices),
        )?;

        let index_buffer = device.create_buffer(
            &BufferDesc { label: "index_buffer".to_string(), usage: BufferUsage::Index },
            bytemuck::cast_slice(indices),
        )?;

        Ok(Self { index_buffer, vertex_buffer, input_layout, index_count })
    }
}

// ============================================================================
// MESH
// ============================================================================

pub struct Mesh {
    shading: ShadingBinding,
    geometry: Option<GpuGeometry>,
    world_matrix: Mat4,
    technique: Technique,
}

impl Mesh {
    /// Build the GPU geometry and bind the material maps.
    ///
    /// A device failure is logged and leaves the mesh uninitialized:
    /// `render` then does nothing and the mesh can still be dropped.
    pub fn new(
        device: &dyn GraphicsDevice,
        shading: ShadingBinding,
        vertices: &[Vertex],
        indices: &[u32],
        textures: &MaterialTextures<'_>,
    ) -> Self {
        let technique = Technique::default();
        let mut mesh = Self {
            shading,
            geometry: None,
            world_matrix: Mat4::IDENTITY,
            technique,
        };

        match GpuGeometry::create(device, &mesh.shading, technique, vertices, indices) {
            Ok(geometry) => {
                viewer_debug!(
                    LOG_SOURCE,
                    "created mesh: {} vertices, {} indices",
                    vertices.len(),
                    geometry.index_count
                );
                mesh.geometry = Some(geometry);
                for slot in TextureSlot::ALL {
                    if let Some(texture) = textures.get(slot) {
                        mesh.shading.set_texture(slot, texture);
                    }
                }
            }
            Err(e) => {
                viewer_error!(LOG_SOURCE, "mesh creation failed: {}", e);
            }
        }

        mesh
    }

    /// Compile the shading program at `program_path`, then build the mesh.
    ///
    /// # Errors
    ///
    /// Program compilation failure is fatal; geometry failures are not (see `new`).
    pub fn load(
        device: &dyn GraphicsDevice,
        program_path: &Path,
        vertices: &[Vertex],
        indices: &[u32],
        textures: &MaterialTextures<'_>,
    ) -> Result<Self> {
        let shading = ShadingBinding::load(device, program_path)?;
        Ok(Self::new(device, shading, vertices, indices, textures))
    }

    /// Bind geometry and draw once per pass of the current technique
    pub fn render(&self, context: &mut dyn GraphicsContext) -> Result<()> {
        let Some(geometry) = &self.geometry else {
            return Ok(());
        };

        context.set_primitive_topology(PrimitiveTopology::TriangleList)?;
        context.set_input_layout(geometry.input_layout.as_ref())?;
        context.set_vertex_buffer(geometry.vertex_buffer.as_ref(), Vertex::STRIDE, 0)?;
        context.set_index_buffer(geometry.index_buffer.as_ref(), IndexType::U32, 0)?;

        for pass in 0..self.shading.pass_count(self.technique) {
            self.shading.apply_pass(self.technique, pass, context)?;
            context.draw_indexed(geometry.index_count, 0, 0)?;
        }
        Ok(())
    }

    /// Push the per-frame matrices.
    ///
    /// `view_projection` maps world to clip space; the mesh prepends its own
    /// world transform.
    pub fn set_matrix(&mut self, view_projection: &Mat4, inverse_view: &Mat4) {
        let world_view_projection = *view_projection * self.world_matrix;
        self.shading.set_world_view_proj(&world_view_projection);
        self.shading.set_world_matrix(&self.world_matrix);
        self.shading.set_inverse_view(inverse_view);
    }

    /// Select the next sampling technique and return it
    pub fn switch_technique(&mut self) -> Technique {
        self.technique = self.technique.next();
        viewer_info!(LOG_SOURCE, "sampling technique: {}", self.technique);
        self.technique
    }

    pub fn set_world_matrix(&mut self, world_matrix: Mat4) {
        self.world_matrix = world_matrix;
    }

    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    pub fn technique(&self) -> Technique {
        self.technique
    }

    /// Indices drawn per pass, zero when uninitialized
    pub fn index_count(&self) -> u32 {
        self.geometry.as_ref().map_or(0, |geometry| geometry.index_count)
    }

    /// Whether the GPU geometry exists
    pub fn is_initialized(&self) -> bool {
        self.geometry.is_some()
    }

    pub fn shading(&self) -> &ShadingBinding {
        &self.shading
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
