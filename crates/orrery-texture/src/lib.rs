//! Bitmap texture loading for sphere rendering.
//!
//! Decodes uncompressed 24-bit bitmap containers into a row-padded
//! [`PixelBuffer`], then enforces power-of-two dimensions within the
//! renderer's [`TextureLimits`], resampling to a fixed square fallback size
//! when either check fails. No GPU state is touched; uploading the result is
//! the caller's job.

mod bmp;
mod error;
mod loader;
mod pixels;

pub use bmp::{BmpHeader, DIMENSIONS_OFFSET, PIXEL_DATA_OFFSET};
pub use error::LoadError;
pub use loader::{
    DEFAULT_FALLBACK_SIZE, LoadedTexture, TextureLimits, TextureLoader, is_power_of_two, load,
};
pub use pixels::{PixelBuffer, RowOrder};
