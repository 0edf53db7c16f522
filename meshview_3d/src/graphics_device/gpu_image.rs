/// Image trait, read-view trait and image descriptor

use super::ResourceId;

/// Pixel format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum ImageFormat {
    R8G8B8A8_UNORM,
    R8G8B8A8_SRGB,
    B8G8R8A8_UNORM,
    D24_UNORM_S8_UINT,
    D32_FLOAT,
}

impl ImageFormat {
    /// Bytes per pixel
    pub fn size_bytes(&self) -> u32 {
        4
    }

    pub fn is_depth(&self) -> bool {
        matches!(self, ImageFormat::D24_UNORM_S8_UINT | ImageFormat::D32_FLOAT)
    }
}

/// How an image is bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageUsage {
    /// Sampled through a read-view
    Sampled,
    /// Color attachment
    RenderTarget,
    /// Depth/stencil attachment
    DepthStencil,
}

/// Descriptor for creating a 2D image (one mip level, one layer)
#[derive(Debug, Clone)]
pub struct ImageDesc {
    /// Debug name
    pub label: String,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub usage: ImageUsage,
}

impl ImageDesc {
    /// Size of a tightly packed pixel upload for this image
    pub fn data_size(&self) -> usize {
        self.width as usize * self.height as usize * self.format.size_bytes() as usize
    }
}

/// GPU image resource
///
/// Released when dropped.
pub trait Image: Send + Sync {
    fn desc(&self) -> &ImageDesc;
}

/// Shader-readable view over an image.
///
/// Views are bound into a `ShadingProgram` by identity; the program never
/// takes ownership.
pub trait ReadView: Send + Sync {
    fn id(&self) -> ResourceId;
}
