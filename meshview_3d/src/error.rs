//! Error types for the MeshView3D viewer
//!
//! This module defines the error types used throughout the viewer,
//! including device initialization, resource creation and asset loading.

use std::fmt;

/// Result type for viewer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Viewer errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (reported by the graphics device)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (buffer, image, shading program, etc.)
    InvalidResource(String),

    /// Initialization failed (device, frame targets, subsystems)
    InitializationFailed(String),

    /// A mesh or image could not be read or decoded
    AssetLoadFailed(String),

    /// Configuration values are out of range
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::AssetLoadFailed(msg) => write!(f, "Asset load failed: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an `Error` of the given variant and log it at ERROR severity.
///
/// # Example
///
/// ```no_run
/// # use meshview_3d::viewer_err;
/// let err = viewer_err!("meshview::Mesh", InvalidResource, "empty index sequence");
/// ```
#[macro_export]
macro_rules! viewer_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::viewer_error!($source, "{}", message);
        $crate::meshview::Error::$variant(message)
    }};
}

/// Log an error and return it from the current function.
///
/// # Example
///
/// ```no_run
/// # use meshview_3d::viewer_bail;
/// fn check(count: usize) -> meshview_3d::meshview::Result<()> {
///     if count == 0 {
///         viewer_bail!("meshview::Mesh", InvalidResource, "empty vertex sequence");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! viewer_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::viewer_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
