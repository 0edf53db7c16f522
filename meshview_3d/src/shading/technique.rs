/// Sampling techniques and the named parameters of the viewer's shading program

use std::fmt;
use crate::graphics_device::ParameterKind;

/// Texture-sampling technique, cycled at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Technique {
    #[default]
    Point,
    Linear,
    Anisotropic,
}

impl Technique {
    /// Every technique in cycle order
    pub const ALL: [Technique; 3] = [Technique::Point, Technique::Linear, Technique::Anisotropic];

    /// Next technique in the cycle, wrapping after the last
    pub fn next(self) -> Self {
        match self {
            Technique::Point => Technique::Linear,
            Technique::Linear => Technique::Anisotropic,
            Technique::Anisotropic => Technique::Point,
        }
    }

    /// Name of the technique inside the shading program
    pub fn program_name(self) -> &'static str {
        match self {
            Technique::Point => "PointTechnique",
            Technique::Linear => "LinearTechnique",
            Technique::Anisotropic => "AnisotropicTechnique",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Technique::Point => "Point",
            Technique::Linear => "Linear",
            Technique::Anisotropic => "Anisotropic",
        };
        f.write_str(name)
    }
}

/// Parameters the viewer pushes into its shading program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadingParameter {
    WorldViewProj,
    WorldMatrix,
    ViewInverse,
    DiffuseMap,
    NormalMap,
    SpecularMap,
    GlossinessMap,
}

impl ShadingParameter {
    pub const ALL: [ShadingParameter; 7] = [
        ShadingParameter::WorldViewProj,
        ShadingParameter::WorldMatrix,
        ShadingParameter::ViewInverse,
        ShadingParameter::DiffuseMap,
        ShadingParameter::NormalMap,
        ShadingParameter::SpecularMap,
        ShadingParameter::GlossinessMap,
    ];

    /// Variable name inside the shading program
    pub fn name(self) -> &'static str {
        match self {
            ShadingParameter::WorldViewProj => "gWorldViewProj",
            ShadingParameter::WorldMatrix => "gWorldMatrix",
            ShadingParameter::ViewInverse => "gViewInverseMatrix",
            ShadingParameter::DiffuseMap => "gDiffuseMap",
            ShadingParameter::NormalMap => "gNormalMap",
            ShadingParameter::SpecularMap => "gSpecularMap",
            ShadingParameter::GlossinessMap => "gGlossinessMap",
        }
    }

    pub fn kind(self) -> ParameterKind {
        match self {
            ShadingParameter::WorldViewProj
            | ShadingParameter::WorldMatrix
            | ShadingParameter::ViewInverse => ParameterKind::Matrix,
            ShadingParameter::DiffuseMap
            | ShadingParameter::NormalMap
            | ShadingParameter::SpecularMap
            | ShadingParameter::GlossinessMap => ParameterKind::ShaderResource,
        }
    }
}

/// Material map slots, in load order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Diffuse,
    Normal,
    Specular,
    Glossiness,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 4] = [
        TextureSlot::Diffuse,
        TextureSlot::Normal,
        TextureSlot::Specular,
        TextureSlot::Glossiness,
    ];

    /// Program parameter the slot binds to
    pub fn parameter(self) -> ShadingParameter {
        match self {
            TextureSlot::Diffuse => ShadingParameter::DiffuseMap,
            TextureSlot::Normal => ShadingParameter::NormalMap,
            TextureSlot::Specular => ShadingParameter::SpecularMap,
            TextureSlot::Glossiness => ShadingParameter::GlossinessMap,
        }
    }
}

impl fmt::Display for TextureSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextureSlot::Diffuse => "diffuse",
            TextureSlot::Normal => "normal",
            TextureSlot::Specular => "specular",
            TextureSlot::Glossiness => "glossiness",
        };
        f.write_str(name)
    }
}
