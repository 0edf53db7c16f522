/// Vertex input layout description and trait

/// Vertex attribute element format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexFormat {
    Float2,
    Float3,
    Float4,
}

impl VertexFormat {
    /// Returns size in bytes for this format
    pub fn size_bytes(&self) -> u32 {
        match self {
            VertexFormat::Float2 => 8,
            VertexFormat::Float3 => 12,
            VertexFormat::Float4 => 16,
        }
    }
}

/// One attribute inside an interleaved vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader input semantic (e.g. "POSITION")
    pub semantic: &'static str,
    pub format: VertexFormat,
    /// Byte offset inside the vertex
    pub offset: u32,
}

/// Interleaved vertex layout: single buffer slot, per-vertex rate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    /// Bytes between consecutive vertices
    pub stride: u32,
    pub attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    /// Whether attributes are in-bounds and non-overlapping when sorted by offset
    pub fn is_valid(&self) -> bool {
        let mut spans: Vec<(u32, u32)> = self
            .attributes
            .iter()
            .map(|a| (a.offset, a.offset + a.format.size_bytes()))
            .collect();
        spans.sort_unstable();
        spans.iter().all(|&(_, end)| end <= self.stride)
            && spans.windows(2).all(|pair| pair[0].1 <= pair[1].0)
    }
}

/// Opaque input signature of one technique pass, used to validate a layout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSignature(pub Vec<u8>);

/// Vertex input layout object
///
/// Released when dropped.
pub trait InputLayout: Send + Sync {
    fn layout(&self) -> &VertexLayout;
}
