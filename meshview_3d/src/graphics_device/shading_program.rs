/// Shading program trait: a compiled effect with named techniques and parameters

use glam::Mat4;
use crate::error::Result;
use super::{GraphicsContext, InputSignature, ReadView};

/// Resolved technique inside one program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TechniqueHandle(pub u32);

/// Resolved parameter inside one program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterHandle(pub u32);

/// Type a parameter must have to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// 4x4 float matrix
    Matrix,
    /// Texture read-view
    ShaderResource,
}

/// Compiled shading program
///
/// Handles are only meaningful for the program that returned them.
pub trait ShadingProgram: Send + Sync {
    /// Look up a technique by name
    fn technique_by_name(&self, name: &str) -> Option<TechniqueHandle>;

    /// Number of passes in a technique
    fn pass_count(&self, technique: TechniqueHandle) -> u32;

    /// Input signature of one pass, for building a matching input layout
    fn pass_input_signature(&self, technique: TechniqueHandle, pass: u32) -> Result<InputSignature>;

    /// Look up a parameter by name, `None` if absent or of another kind
    fn parameter_by_name(&self, name: &str, kind: ParameterKind) -> Option<ParameterHandle>;

    /// Set a matrix parameter
    fn set_matrix(&mut self, parameter: ParameterHandle, value: &Mat4);

    /// Bind a read-view to a shader-resource parameter
    fn set_read_view(&mut self, parameter: ParameterHandle, view: &dyn ReadView);

    /// Bind the shaders and state of one pass on the context
    ///
    /// # Arguments
    ///
    /// * `technique` - Technique the pass belongs to
    /// * `pass` - Pass index, `0..pass_count(technique)`
    /// * `context` - Context the pass state is applied to
    fn apply_pass(
        &self,
        technique: TechniqueHandle,
        pass: u32,
        context: &mut dyn GraphicsContext,
    ) -> Result<()>;
}
