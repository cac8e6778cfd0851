//! Texture loading error types.

use std::path::PathBuf;

/// Errors that can occur while loading a bitmap texture.
///
/// Every variant is recoverable: callers may skip the texture, substitute a
/// placeholder, or stop texture-dependent rendering.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("cannot open texture {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The container header is truncated or describes an impossible image.
    #[error("corrupt bitmap header: {0}")]
    CorruptHeader(String),

    /// Fewer pixel bytes are present than the header dimensions require.
    #[error("corrupt bitmap data: expected {expected} pixel bytes, found {actual}")]
    CorruptData { expected: usize, actual: usize },

    /// A pixel buffer of the given size could not be allocated.
    #[error("out of memory allocating {bytes} bytes of pixel data")]
    OutOfMemory { bytes: usize },
}
