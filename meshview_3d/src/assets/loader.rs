/// Asset loader trait and the file-system implementation

use std::fs;
use std::path::Path;
use crate::error::{Error, Result};
use crate::resource::Vertex;
use crate::{viewer_err, viewer_info};
use super::image_decode::decode_image;
use super::obj::parse_obj;

const LOG_SOURCE: &str = "meshview::FileAssetLoader";

/// Triangle list ready for upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    /// Three indices per triangle
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Decoded image, tightly packed RGBA8 rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl ImageData {
    /// Image filled with one color
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self { width, height, pixels }
    }
}

/// Supplies mesh and image data by path.
///
/// Failures are fatal to whoever asked: there is no fallback asset.
pub trait AssetLoader {
    fn load_mesh(&self, path: &Path) -> Result<MeshData>;

    fn load_image(&self, path: &Path) -> Result<ImageData>;
}

/// Reads OBJ meshes and PNG/JPEG/... images from disk
#[derive(Debug, Clone, Copy)]
pub struct FileAssetLoader {
    /// Convert right-handed OBJ data to the viewer's left-handed space
    pub flip_to_left_handed: bool,
}

impl Default for FileAssetLoader {
    fn default() -> Self {
        Self { flip_to_left_handed: true }
    }
}

impl FileAssetLoader {
    pub fn new(flip_to_left_handed: bool) -> Self {
        Self { flip_to_left_handed }
    }

    fn read(path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| {
            viewer_err!(LOG_SOURCE, AssetLoadFailed, "cannot read {}: {}", path.display(), e)
        })
    }
}

impl AssetLoader for FileAssetLoader {
    fn load_mesh(&self, path: &Path) -> Result<MeshData> {
        let bytes = Self::read(path)?;
        let mesh = parse_obj(&bytes, self.flip_to_left_handed).map_err(|e| {
            viewer_err!(LOG_SOURCE, AssetLoadFailed, "{}: {}", path.display(), reason(e))
        })?;
        viewer_info!(
            LOG_SOURCE,
            "loaded {}: {} vertices, {} triangles",
            path.display(),
            mesh.vertices.len(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    fn load_image(&self, path: &Path) -> Result<ImageData> {
        let bytes = Self::read(path)?;
        let image = decode_image(&bytes).map_err(|e| {
            viewer_err!(LOG_SOURCE, AssetLoadFailed, "{}: {}", path.display(), reason(e))
        })?;
        viewer_info!(LOG_SOURCE, "loaded {} ({}x{})", path.display(), image.width, image.height);
        Ok(image)
    }
}

/// Message of a decode error without the variant prefix
fn reason(error: Error) -> String {
    match error {
        Error::AssetLoadFailed(message) => message,
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
