/// ShadingBinding: a shading program with its techniques and parameters resolved.
///
/// Resolution happens once at construction. A technique or parameter the
/// program does not expose is logged as a warning and left unset; setters
/// targeting an unset parameter do nothing, and an unset technique has zero
/// passes.

use std::path::Path;
use glam::Mat4;
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::graphics_device::{
    GraphicsContext, GraphicsDevice, InputSignature, ParameterHandle, ShadingProgram,
    TechniqueHandle,
};
use crate::resource::Texture;
use crate::{viewer_debug, viewer_err, viewer_warn};
use super::technique::{ShadingParameter, Technique, TextureSlot};

const LOG_SOURCE: &str = "meshview::ShadingBinding";

pub struct ShadingBinding {
    program: Box<dyn ShadingProgram>,
    point: Option<TechniqueHandle>,
    linear: Option<TechniqueHandle>,
    anisotropic: Option<TechniqueHandle>,
    parameters: FxHashMap<ShadingParameter, ParameterHandle>,
}

impl ShadingBinding {
    /// Resolve every technique and parameter of `program`
    pub fn new(program: Box<dyn ShadingProgram>) -> Self {
        let resolve_technique = |kind: Technique| {
            let handle = program.technique_by_name(kind.program_name());
            if handle.is_none() {
                viewer_warn!(LOG_SOURCE, "technique {} not found in program", kind.program_name());
            }
            handle
        };
        let point = resolve_technique(Technique::Point);
        let linear = resolve_technique(Technique::Linear);
        let anisotropic = resolve_technique(Technique::Anisotropic);

        let mut parameters = FxHashMap::default();
        for parameter in ShadingParameter::ALL {
            match program.parameter_by_name(parameter.name(), parameter.kind()) {
                Some(handle) => {
                    parameters.insert(parameter, handle);
                }
                None => {
                    viewer_warn!(
                        LOG_SOURCE,
                        "parameter {} ({:?}) not found in program",
                        parameter.name(),
                        parameter.kind()
                    );
                }
            }
        }

        viewer_debug!(
            LOG_SOURCE,
            "resolved {}/{} parameters",
            parameters.len(),
            ShadingParameter::ALL.len()
        );

        Self { program, point, linear, anisotropic, parameters }
    }

    /// Compile the program at `path` and resolve it.
    ///
    /// # Errors
    ///
    /// Compilation failure is returned as `Error::InitializationFailed`.
    pub fn load(device: &dyn GraphicsDevice, path: &Path) -> Result<Self> {
        let program = device.create_shading_program(path).map_err(|e| {
            viewer_err!(
                LOG_SOURCE,
                InitializationFailed,
                "failed to compile shading program {}: {}",
                path.display(),
                e
            )
        })?;
        Ok(Self::new(program))
    }

    /// Resolved handle of a technique
    pub fn technique(&self, kind: Technique) -> Option<TechniqueHandle> {
        match kind {
            Technique::Point => self.point,
            Technique::Linear => self.linear,
            Technique::Anisotropic => self.anisotropic,
        }
    }

    /// Number of passes of a technique, zero when unresolved
    pub fn pass_count(&self, kind: Technique) -> u32 {
        self.technique(kind).map_or(0, |handle| self.program.pass_count(handle))
    }

    /// Input signature of one pass of a technique
    pub fn input_signature(&self, kind: Technique, pass: u32) -> Result<InputSignature> {
        let handle = self.resolved(kind)?;
        self.program.pass_input_signature(handle, pass)
    }

    /// Apply one pass of a technique on the context
    pub fn apply_pass(&self, kind: Technique, pass: u32, context: &mut dyn GraphicsContext) -> Result<()> {
        let handle = self.resolved(kind)?;
        self.program.apply_pass(handle, pass, context)
    }

    pub fn set_world_view_proj(&mut self, matrix: &Mat4) {
        self.set_matrix(ShadingParameter::WorldViewProj, matrix);
    }

    pub fn set_world_matrix(&mut self, matrix: &Mat4) {
        self.set_matrix(ShadingParameter::WorldMatrix, matrix);
    }

    pub fn set_inverse_view(&mut self, matrix: &Mat4) {
        self.set_matrix(ShadingParameter::ViewInverse, matrix);
    }

    /// Bind a texture's read-view to a material slot
    pub fn set_texture(&mut self, slot: TextureSlot, texture: &Texture) {
        if let Some(&handle) = self.parameters.get(&slot.parameter()) {
            self.program.set_read_view(handle, texture.read_view());
        }
    }

    pub fn set_diffuse_map(&mut self, texture: &Texture) {
        self.set_texture(TextureSlot::Diffuse, texture);
    }

    pub fn set_normal_map(&mut self, texture: &Texture) {
        self.set_texture(TextureSlot::Normal, texture);
    }

    pub fn set_specular_map(&mut self, texture: &Texture) {
        self.set_texture(TextureSlot::Specular, texture);
    }

    pub fn set_glossiness_map(&mut self, texture: &Texture) {
        self.set_texture(TextureSlot::Glossiness, texture);
    }

    /// Whether a parameter resolved at construction
    pub fn is_bound(&self, parameter: ShadingParameter) -> bool {
        self.parameters.contains_key(&parameter)
    }

    fn set_matrix(&mut self, parameter: ShadingParameter, matrix: &Mat4) {
        if let Some(&handle) = self.parameters.get(&parameter) {
            self.program.set_matrix(handle, matrix);
        }
    }

    fn resolved(&self, kind: Technique) -> Result<TechniqueHandle> {
        self.technique(kind).ok_or_else(|| {
            Error::InvalidResource(format!("technique {} is not available", kind.program_name()))
        })
    }
}

#[cfg(test)]
#[path = "shading_tests.rs"]
mod tests;
