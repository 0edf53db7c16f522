/// Image decoding to RGBA8

use crate::error::{Error, Result};
use super::loader::ImageData;

/// Decode any format the `image` crate recognizes and convert to RGBA8
pub fn decode_image(bytes: &[u8]) -> Result<ImageData> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| Error::AssetLoadFailed(format!("failed to decode image: {}", e)))?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::AssetLoadFailed("image has zero size".to_string()));
    }

    Ok(ImageData {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}
