/// Mock asset loader for unit tests (no files required)
///
/// Serves a unit quad for every mesh path and a small solid image for every
/// image path. Individual paths can be made to fail.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use glam::{Vec2, Vec3, Vec4};
use rustc_hash::FxHashSet;
use crate::error::{Error, Result};
use crate::resource::Vertex;
use super::{AssetLoader, ImageData, MeshData};

/// Quad in the XY plane facing -Z: 4 vertices, 6 indices
pub fn quad_mesh() -> MeshData {
    let normal = Vec3::NEG_Z;
    let tangent = Vec4::new(1.0, 0.0, 0.0, 1.0);
    let corner = |x: f32, y: f32, u: f32, v: f32| {
        Vertex::new(Vec3::new(x, y, 0.0), Vec2::new(u, v), normal, tangent)
    };
    MeshData {
        vertices: vec![
            corner(-1.0, 1.0, 0.0, 0.0),
            corner(1.0, 1.0, 1.0, 0.0),
            corner(1.0, -1.0, 1.0, 1.0),
            corner(-1.0, -1.0, 0.0, 1.0),
        ],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

#[derive(Default)]
pub struct MockAssetLoader {
    failing: FxHashSet<PathBuf>,
    /// Every path requested, in order
    pub requests: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockAssetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make loading `path` fail
    pub fn fail_on(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.insert(path.into());
        self
    }

    fn request(&self, path: &Path) -> Result<()> {
        self.requests.lock().unwrap().push(path.to_path_buf());
        if self.failing.contains(path) {
            return Err(Error::AssetLoadFailed(format!("mock: {}", path.display())));
        }
        Ok(())
    }
}

impl AssetLoader for MockAssetLoader {
    fn load_mesh(&self, path: &Path) -> Result<MeshData> {
        self.request(path)?;
        Ok(quad_mesh())
    }

    fn load_image(&self, path: &Path) -> Result<ImageData> {
        self.request(path)?;
        Ok(ImageData::solid(2, 2, [128, 128, 255, 255]))
    }
}
