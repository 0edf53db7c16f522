//! Math module: left-handed transform helpers on top of glam.
//!
//! Conventions used everywhere in the viewer:
//! - Left-handed space: +X right, +Y up, +Z forward.
//! - glam column vectors: `a * b` applies `b` first, then `a`.
//! - Clip-space depth in [0, 1].

mod transform;

pub use transform::{
    TO_RADIANS,
    fov_scale,
    perspective_fov_lh,
};
