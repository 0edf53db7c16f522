/// Renderer: owns the device, the frame targets, the camera and the scene
/// (four material maps and one mesh), and drives them frame by frame.

use glam::Mat4;
use crate::assets::AssetLoader;
use crate::camera::Camera;
use crate::config::ViewerConfig;
use crate::error::Result;
use crate::graphics_device::{GraphicsContext, GraphicsDevice};
use crate::input::{EdgeTrigger, InputSnapshot, Keys};
use crate::math::TO_RADIANS;
use crate::resource::{MaterialTextures, Mesh, Texture};
use crate::shading::Technique;
use crate::{viewer_debug, viewer_error, viewer_info, viewer_warn};
use super::frame_targets::FrameTargets;

const LOG_SOURCE: &str = "meshview::Renderer";

/// Scene and frame orchestrator
///
/// ```no_run
/// # use meshview_3d::meshview::{Renderer, ViewerConfig};
/// # use meshview_3d::meshview::assets::FileAssetLoader;
/// # use meshview_3d::meshview::input::InputTracker;
/// # fn backend() -> (Box<dyn meshview_3d::meshview::device::GraphicsDevice>,
/// #                  Box<dyn meshview_3d::meshview::device::GraphicsContext>) { unimplemented!() }
/// let (device, context) = backend();
/// let config = ViewerConfig::default();
/// let mut tracker = InputTracker::new(config.key_bindings);
/// let mut renderer = Renderer::new(device, context, &FileAssetLoader::default(), config)?;
///
/// // once per tick, after feeding window events to the tracker
/// renderer.frame(1.0 / 60.0, &tracker.snapshot())?;
/// # Ok::<(), meshview_3d::meshview::Error>(())
/// ```
pub struct Renderer {
    // Scene, in acquisition order. Drop releases them in reverse.
    diffuse_map: Option<Texture>,
    normal_map: Option<Texture>,
    specular_map: Option<Texture>,
    glossiness_map: Option<Texture>,
    mesh: Option<Mesh>,

    /// None when device initialization failed: nothing is ever rendered
    frame_targets: Option<FrameTargets>,

    // Released after everything above, context before device
    context: Box<dyn GraphicsContext>,
    device: Box<dyn GraphicsDevice>,

    camera: Camera,
    rotation_enabled: bool,
    technique_toggle: EdgeTrigger,
    rotation_toggle: EdgeTrigger,
    config: ViewerConfig,
}

impl Renderer {
    /// Create the frame targets, the camera and the scene.
    ///
    /// A frame-target failure is logged and leaves the renderer
    /// uninitialized (`render` does nothing). Loading the textures, the mesh
    /// or the shading program is not optional.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for an unusable configuration, otherwise whatever the
    /// asset loader or program compilation reports.
    pub fn new(
        device: Box<dyn GraphicsDevice>,
        mut context: Box<dyn GraphicsContext>,
        loader: &dyn AssetLoader,
        config: ViewerConfig,
    ) -> Result<Self> {
        if let Err(e) = config.validate() {
            viewer_error!(LOG_SOURCE, "rejected configuration: {}", e);
            return Err(e);
        }

        let frame_targets = match FrameTargets::create(
            device.as_ref(),
            context.as_mut(),
            config.width,
            config.height,
        ) {
            Ok(targets) => {
                viewer_info!(LOG_SOURCE, "graphics device is initialized and ready");
                Some(targets)
            }
            Err(e) => {
                viewer_error!(LOG_SOURCE, "graphics device initialization failed: {}", e);
                None
            }
        };

        let camera = Camera::from_config(&config.camera, config.aspect_ratio());

        let mut renderer = Self {
            diffuse_map: None,
            normal_map: None,
            specular_map: None,
            glossiness_map: None,
            mesh: None,
            frame_targets,
            context,
            device,
            camera,
            rotation_enabled: true,
            technique_toggle: EdgeTrigger::new(),
            rotation_toggle: EdgeTrigger::new(),
            config,
        };

        // On failure the partially loaded scene is released by Drop
        if let Err(e) = renderer.load_scene(loader) {
            viewer_error!(LOG_SOURCE, "scene loading failed: {}", e);
            return Err(e);
        }

        Ok(renderer)
    }

    fn load_scene(&mut self, loader: &dyn AssetLoader) -> Result<()> {
        let device = self.device.as_ref();
        let paths = &self.config.assets;

        self.diffuse_map = Some(Texture::load(device, loader, "diffuse", &paths.diffuse_map)?);
        self.normal_map = Some(Texture::load(device, loader, "normal", &paths.normal_map)?);
        self.specular_map = Some(Texture::load(device, loader, "specular", &paths.specular_map)?);
        self.glossiness_map = Some(Texture::load(device, loader, "glossiness", &paths.glossiness_map)?);

        let data = loader.load_mesh(&paths.mesh)?;
        let textures = MaterialTextures {
            diffuse: self.diffuse_map.as_ref(),
            normal: self.normal_map.as_ref(),
            specular: self.specular_map.as_ref(),
            glossiness: self.glossiness_map.as_ref(),
        };
        let mesh = Mesh::load(device, &paths.shading_program, &data.vertices, &data.indices, &textures)?;

        viewer_debug!(
            LOG_SOURCE,
            "scene loaded: {} triangles from {}",
            data.triangle_count(),
            paths.mesh.display()
        );
        self.mesh = Some(mesh);
        Ok(())
    }

    /// Advance one tick: camera, mesh matrices, mesh spin, then the toggles
    pub fn update(&mut self, elapsed_seconds: f32, input: &InputSnapshot) {
        self.camera.update(elapsed_seconds, input);

        let cycle_technique = self.technique_toggle.update(input.is_down(Keys::CYCLE_TECHNIQUE));
        let toggle_rotation = self.rotation_toggle.update(input.is_down(Keys::TOGGLE_ROTATION));

        if let Some(mesh) = self.mesh.as_mut() {
            mesh.set_matrix(&self.camera.view_projection_matrix(), self.camera.inverse_view_matrix());

            if self.rotation_enabled {
                let angle = self.config.mesh_rotation_speed * elapsed_seconds * TO_RADIANS;
                let world = *mesh.world_matrix() * Mat4::from_rotation_y(angle);
                mesh.set_world_matrix(world);
            }

            if cycle_technique {
                mesh.switch_technique();
            }
        }

        if toggle_rotation {
            self.rotation_enabled = !self.rotation_enabled;
            viewer_info!(
                LOG_SOURCE,
                "mesh rotation {}",
                if self.rotation_enabled { "enabled" } else { "disabled" }
            );
        }
    }

    /// Clear, draw the mesh, present. Does nothing when uninitialized.
    pub fn render(&mut self) -> Result<()> {
        let Some(targets) = self.frame_targets.as_mut() else {
            return Ok(());
        };

        targets.clear(self.context.as_mut(), self.config.clear_color)?;
        if let Some(mesh) = &self.mesh {
            mesh.render(self.context.as_mut())?;
        }
        targets.present()
    }

    /// `update` followed by `render`
    pub fn frame(&mut self, elapsed_seconds: f32, input: &InputSnapshot) -> Result<()> {
        self.update(elapsed_seconds, input);
        self.render()
    }

    /// Whether frame targets exist and frames are drawn
    pub fn is_initialized(&self) -> bool {
        self.frame_targets.is_some()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }

    /// Technique the mesh is currently drawn with
    pub fn technique(&self) -> Technique {
        self.mesh.as_ref().map_or(Technique::default(), Mesh::technique)
    }

    pub fn rotation_enabled(&self) -> bool {
        self.rotation_enabled
    }

    pub fn frame_targets(&self) -> Option<&FrameTargets> {
        self.frame_targets.as_ref()
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        // Mesh first: it was built from the textures
        drop(self.mesh.take());

        drop(self.glossiness_map.take());
        drop(self.specular_map.take());
        drop(self.normal_map.take());
        drop(self.diffuse_map.take());

        drop(self.frame_targets.take());

        self.context.clear_state();
        if let Err(e) = self.context.flush() {
            viewer_warn!(LOG_SOURCE, "context flush failed during shutdown: {}", e);
        }

        viewer_debug!(LOG_SOURCE, "renderer resources released");
        // context, then device, are dropped by field order
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
