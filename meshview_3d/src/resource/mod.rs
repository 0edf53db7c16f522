//! Resource module
//!
//! GPU-backed objects the viewer draws with: textures and the mesh.

pub mod vertex;
pub mod texture;
pub mod mesh;

pub use vertex::Vertex;
pub use texture::Texture;
pub use mesh::{MaterialTextures, Mesh};
