/// Buffer trait and buffer descriptor

/// What a buffer is bound as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Vertex buffer
    Vertex,
    /// Index buffer
    Index,
}

/// Descriptor for creating an immutable buffer.
///
/// The initial contents are passed alongside; the buffer is sized exactly to
/// them and never written again.
#[derive(Debug, Clone)]
pub struct BufferDesc {
    /// Debug name
    pub label: String,
    /// Buffer usage
    pub usage: BufferUsage,
}

/// Index element width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    U16,
    U32,
}

/// Immutable GPU buffer, released on drop
pub trait Buffer: Send + Sync {
    /// Size in bytes
    fn size(&self) -> u64;

    /// Usage the buffer was created with
    fn usage(&self) -> BufferUsage;
}
