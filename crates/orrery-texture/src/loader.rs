//! Texture loading: decode, validate dimensions, resample to the fallback size.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use image::imageops::{self, FilterType};
use tracing::debug;

use crate::bmp::read_bitmap;
use crate::error::LoadError;
use crate::pixels::PixelBuffer;

/// Side length images are resampled to when they fail dimension checks.
pub const DEFAULT_FALLBACK_SIZE: u32 = 256;

/// Renderer capability bounding texture dimensions.
pub trait TextureLimits {
    /// Largest width or height the renderer accepts.
    fn max_texture_dimension(&self) -> u32;
}

impl TextureLimits for u32 {
    fn max_texture_dimension(&self) -> u32 {
        *self
    }
}

/// Returns `true` if `n` is a positive power of two.
pub fn is_power_of_two(n: u32) -> bool {
    n.is_power_of_two()
}

/// A validated texture ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTexture {
    pub pixels: PixelBuffer,
    pub width: u32,
    pub height: u32,
    /// Whether the stored image was resampled to the fallback size.
    pub rescaled: bool,
}

impl LoadedTexture {
    /// Split into `(pixels, width, height)`.
    pub fn into_parts(self) -> (PixelBuffer, u32, u32) {
        (self.pixels, self.width, self.height)
    }
}

/// Bitmap loader with a configurable fallback size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureLoader {
    fallback_size: u32,
}

impl Default for TextureLoader {
    fn default() -> Self {
        Self {
            fallback_size: DEFAULT_FALLBACK_SIZE,
        }
    }
}

impl TextureLoader {
    /// Loader resampling non-conforming images to `size × size`.
    ///
    /// Returns `None` unless `size` is a power of two.
    pub fn with_fallback_size(size: u32) -> Option<Self> {
        is_power_of_two(size).then_some(Self {
            fallback_size: size,
        })
    }

    pub fn fallback_size(&self) -> u32 {
        self.fallback_size
    }

    /// Load and validate the bitmap at `path`.
    pub fn load(
        &self,
        path: impl AsRef<Path>,
        limits: &impl TextureLimits,
    ) -> Result<LoadedTexture, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let texture = self.decode(BufReader::new(file), limits)?;
        debug!(
            path = %path.display(),
            width = texture.width,
            height = texture.height,
            rescaled = texture.rescaled,
            "loaded texture"
        );
        Ok(texture)
    }

    /// Decode and validate a bitmap from any byte stream.
    pub fn decode(
        &self,
        mut reader: impl Read,
        limits: &impl TextureLimits,
    ) -> Result<LoadedTexture, LoadError> {
        let pixels = read_bitmap(&mut reader)?;
        let (width, height) = (pixels.width(), pixels.height());
        let max = limits.max_texture_dimension();

        let conforming =
            is_power_of_two(width) && is_power_of_two(height) && width <= max && height <= max;
        if conforming {
            return Ok(LoadedTexture {
                pixels,
                width,
                height,
                rescaled: false,
            });
        }

        debug!(
            width,
            height,
            max,
            fallback = self.fallback_size,
            "resampling non-conforming texture"
        );
        let pixels = resample(&pixels, self.fallback_size)?;
        Ok(LoadedTexture {
            width: pixels.width(),
            height: pixels.height(),
            pixels,
            rescaled: true,
        })
    }
}

/// Load `path` with the default fallback size.
pub fn load(
    path: impl AsRef<Path>,
    limits: &impl TextureLimits,
) -> Result<LoadedTexture, LoadError> {
    TextureLoader::default().load(path, limits)
}

/// Bilinear resample to `size × size`, keeping row order and channel order.
pub(crate) fn resample(src: &PixelBuffer, size: u32) -> Result<PixelBuffer, LoadError> {
    let bytes = PixelBuffer::stride_for(size)
        .checked_mul(size as usize)
        .unwrap_or(usize::MAX);
    let mut out = Vec::new();
    out.try_reserve_exact(bytes)
        .map_err(|_| LoadError::OutOfMemory { bytes })?;

    let tight = src.to_tight()?;
    let actual = tight.len();
    let image = image::RgbImage::from_raw(src.width(), src.height(), tight).ok_or(
        LoadError::CorruptData {
            expected: src.width() as usize * src.height() as usize * 3,
            actual,
        },
    )?;
    let resized = imageops::resize(&image, size, size, FilterType::Triangle);

    for row in resized.as_raw().chunks_exact(size as usize * 3) {
        out.extend_from_slice(row);
        out.resize(out.len().next_multiple_of(4), 0);
    }
    Ok(PixelBuffer::from_padded(
        out,
        size,
        size,
        src.row_order(),
    ))
}
