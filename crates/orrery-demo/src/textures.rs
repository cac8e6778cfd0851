//! Texture loading with placeholder substitution for the scene.

use std::path::Path;

use orrery_texture::{LoadError, LoadedTexture, PixelBuffer, TextureLimits, TextureLoader};
use tracing::{info, warn};

use crate::scene::TextureSlot;

const CHECKER_CELL: u32 = 16;

/// Load `path`, or substitute a checkerboard of the loader's fallback size.
///
/// Returns the texture and the error that forced the substitution, if any.
pub fn load_or_placeholder(
    loader: &TextureLoader,
    name: &str,
    path: &Path,
    limits: &impl TextureLimits,
) -> (LoadedTexture, Option<LoadError>) {
    match loader.load(path, limits) {
        Ok(texture) => {
            info!(
                "Loaded {name} texture {} ({}x{}{})",
                path.display(),
                texture.width,
                texture.height,
                if texture.rescaled { ", resampled" } else { "" }
            );
            (texture, None)
        }
        Err(e) => {
            warn!("Using placeholder for {name} texture: {e}");
            (checkerboard(loader.fallback_size()), Some(e))
        }
    }
}

/// Slots whose load failed and now hold a placeholder.
pub fn placeholder_slots(
    loads: impl IntoIterator<Item = (TextureSlot, Option<LoadError>)>,
) -> Vec<TextureSlot> {
    loads
        .into_iter()
        .filter_map(|(slot, err)| err.map(|_| slot))
        .collect()
}

/// Magenta/black checkerboard, the usual missing-texture marker.
pub fn checkerboard(size: u32) -> LoadedTexture {
    let pixels = PixelBuffer::from_fn(size, size, |x, y| {
        if (x / CHECKER_CELL + y / CHECKER_CELL) % 2 == 0 {
            [255, 0, 255]
        } else {
            [0, 0, 0]
        }
    });
    LoadedTexture {
        pixels,
        width: size,
        height: size,
        rescaled: false,
    }
}

/// Save a texture as a top-down RGB PNG.
pub fn export_png(texture: &LoadedTexture, path: &Path) -> image::ImageResult<()> {
    texture.pixels.to_rgb_image().save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_texture_gets_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let loader = TextureLoader::default();
        let (texture, err) =
            load_or_placeholder(&loader, "planet", &dir.path().join("earth.bmp"), &4096u32);
        assert!(matches!(err, Some(LoadError::FileNotFound { .. })));
        assert_eq!((texture.width, texture.height), (256, 256));
    }

    #[test]
    fn test_failed_loads_reported_as_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let loader = TextureLoader::default();
        let (_, planet_err) =
            load_or_placeholder(&loader, "planet", &dir.path().join("earth.bmp"), &4096u32);
        let slots = placeholder_slots([
            (TextureSlot::Planet, planet_err),
            (TextureSlot::Moon, None),
        ]);
        assert_eq!(slots, [TextureSlot::Planet]);
    }

    #[test]
    fn test_checkerboard_cells() {
        let tex = checkerboard(64);
        assert_eq!(tex.pixels.pixel(0, 0), Some([255, 0, 255]));
        assert_eq!(tex.pixels.pixel(CHECKER_CELL, 0), Some([0, 0, 0]));
        assert_eq!(tex.pixels.pixel(CHECKER_CELL, CHECKER_CELL), Some([255, 0, 255]));
    }

    #[test]
    fn test_export_png_roundtrip_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("placeholder.png");
        export_png(&checkerboard(32), &path).unwrap();
        let (w, h) = image::image_dimensions(&path).unwrap();
        assert_eq!((w, h), (32, 32));
    }
}
