//! Shading module: sampling techniques and the resolved shading program.

mod technique;
mod binding;

pub use technique::{ShadingParameter, Technique, TextureSlot};
pub use binding::ShadingBinding;
