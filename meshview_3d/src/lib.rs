/*!
# MeshView3D

Core types for an interactive single-mesh viewer.

The viewer loads a triangulated mesh and four material maps, drives a
fly-through camera from per-tick input snapshots, and renders the mesh with one
of three texture-sampling techniques (point, linear, anisotropic).

The graphics device is a collaborator expressed as traits
(`graphics_device::GraphicsDevice`, `GraphicsContext`, `ShadingProgram`, ...).
Backends implement them; the viewer only composes resources and frames.

## Architecture

- **math**: left-handed transform helpers on top of glam
- **Camera**: pose, view and projection derivation from input
- **ShadingBinding**: resolved techniques and parameters of a shading program
- **Mesh**: drawable owning its shading binding, buffers and world transform
- **Texture**: image plus read-view, created and released together
- **Renderer**: per-frame orchestration (update, clear, draw, present)
*/

// Internal modules
mod error;
pub mod log;
pub mod math;
pub mod config;
pub mod input;
pub mod camera;
pub mod graphics_device;
pub mod shading;
pub mod resource;
pub mod assets;
pub mod renderer;

// Main meshview namespace module
pub mod meshview {
    // Error types
    pub use crate::error::{Error, Result};

    // Frame orchestrator
    pub use crate::renderer::Renderer;

    // Camera
    pub use crate::camera::Camera;

    // Configuration
    pub use crate::config::{AssetPaths, CameraConfig, KeyBindings, ViewerConfig};

    // Logging sub-module (types and global slot, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger, set_logger, reset_logger,
            set_min_severity, min_severity,
        };
    }

    // Input sub-module
    pub mod input {
        pub use crate::input::*;
    }

    // Device collaborator traits
    pub mod device {
        pub use crate::graphics_device::*;
    }

    // Shading sub-module
    pub mod shading {
        pub use crate::shading::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Asset loading sub-module
    pub mod assets {
        pub use crate::assets::*;
    }
}

// Re-export math library at crate root
pub use glam;
