/// Texture: a sampled GPU image and its read-view.
///
/// Both are created in `new` and released together on drop (view first),
/// so a `Texture` never exists half-built.

use std::path::Path;
use crate::assets::{AssetLoader, ImageData};
use crate::error::Result;
use crate::graphics_device::{GraphicsDevice, Image, ImageDesc, ImageFormat, ImageUsage, ReadView};
use crate::{viewer_bail, viewer_debug};

const LOG_SOURCE: &str = "meshview::Texture";

pub struct Texture {
    name: String,
    // Field order is drop order: the view goes before its image
    read_view: Box<dyn ReadView>,
    image: Box<dyn Image>,
}

impl Texture {
    /// Upload RGBA8 pixels and create the read-view
    ///
    /// # Errors
    ///
    /// `InvalidResource` if the pixel buffer does not match the dimensions,
    /// or whatever the device reports for image or view creation.
    pub fn new(device: &dyn GraphicsDevice, name: &str, data: &ImageData) -> Result<Self> {
        if data.width == 0 || data.height == 0 {
            viewer_bail!(LOG_SOURCE, InvalidResource, "texture {} has zero size", name);
        }
        let desc = ImageDesc {
            label: name.to_string(),
            width: data.width,
            height: data.height,
            format: ImageFormat::R8G8B8A8_UNORM,
            usage: ImageUsage::Sampled,
        };
        if data.pixels.len() != desc.data_size() {
            viewer_bail!(
                LOG_SOURCE,
                InvalidResource,
                "texture {} expects {} bytes of RGBA8 pixels, got {}",
                name,
                desc.data_size(),
                data.pixels.len()
            );
        }

        let image = device.create_image(&desc, Some(&data.pixels))?;
        let read_view = device.create_read_view(image.as_ref())?;

        viewer_debug!(LOG_SOURCE, "created texture {} ({}x{})", name, data.width, data.height);

        Ok(Self {
            name: name.to_string(),
            read_view,
            image,
        })
    }

    /// Decode the image at `path` through `loader`, then upload it
    pub fn load(
        device: &dyn GraphicsDevice,
        loader: &dyn AssetLoader,
        name: &str,
        path: &Path,
    ) -> Result<Self> {
        let data = loader.load_image(path)?;
        Self::new(device, name, &data)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.image.desc().width
    }

    pub fn height(&self) -> u32 {
        self.image.desc().height
    }

    pub fn image(&self) -> &dyn Image {
        self.image.as_ref()
    }

    pub fn read_view(&self) -> &dyn ReadView {
        self.read_view.as_ref()
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
