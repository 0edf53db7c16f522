/// Interleaved vertex record uploaded to the vertex buffer

use std::mem::{offset_of, size_of};
use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3, Vec4};
use crate::graphics_device::{VertexAttribute, VertexFormat, VertexLayout};

/// One vertex: position, texcoord, normal, tangent (w = bitangent sign).
///
/// `#[repr(C)]` and tightly packed; the byte layout is what the GPU reads.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub normal: [f32; 3],
    pub tangent: [f32; 4],
}

impl Vertex {
    /// Bytes between consecutive vertices
    pub const STRIDE: u32 = size_of::<Vertex>() as u32;

    pub fn new(position: Vec3, uv: Vec2, normal: Vec3, tangent: Vec4) -> Self {
        Self {
            position: position.to_array(),
            uv: uv.to_array(),
            normal: normal.to_array(),
            tangent: tangent.to_array(),
        }
    }

    /// Input layout matching the field order above
    pub fn layout() -> VertexLayout {
        VertexLayout {
            stride: Self::STRIDE,
            attributes: vec![
                VertexAttribute {
                    semantic: "POSITION",
                    format: VertexFormat::Float3,
                    offset: offset_of!(Vertex, position) as u32,
                },
                VertexAttribute {
                    semantic: "TEXCOORD",
                    format: VertexFormat::Float2,
                    offset: offset_of!(Vertex, uv) as u32,
                },
                VertexAttribute {
                    semantic: "NORMAL",
                    format: VertexFormat::Float3,
                    offset: offset_of!(Vertex, normal) as u32,
                },
                VertexAttribute {
                    semantic: "TANGENT",
                    format: VertexFormat::Float4,
                    offset: offset_of!(Vertex, tangent) as u32,
                },
            ],
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn uv(&self) -> Vec2 {
        Vec2::from_array(self.uv)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    pub fn tangent(&self) -> Vec4 {
        Vec4::from_array(self.tangent)
    }
}
