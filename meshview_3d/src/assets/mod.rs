//! Assets module: CPU-side mesh and image data, and the loaders producing them.

mod loader;
mod obj;
mod image_decode;

#[cfg(test)]
pub mod mock_asset_loader;

pub use loader::{AssetLoader, FileAssetLoader, ImageData, MeshData};
pub use obj::parse_obj;
pub use image_decode::decode_image;
