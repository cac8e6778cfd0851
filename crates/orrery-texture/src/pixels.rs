//! Row-padded 24-bit pixel storage.

use crate::error::LoadError;

/// Vertical order in which rows are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// First stored row is the bottom of the image (positive header height).
    #[default]
    BottomUp,
    /// First stored row is the top of the image (negative header height).
    TopDown,
}

/// Three bytes per pixel in the container's channel order (blue, green, red),
/// with each row padded to a multiple of four bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    stride: usize,
    row_order: RowOrder,
}

impl PixelBuffer {
    /// Bytes per row for `width` pixels: `width * 3` rounded up to a multiple of 4.
    pub fn stride_for(width: u32) -> usize {
        (width as usize * 3).next_multiple_of(4)
    }

    /// Wraps already padded bytes. `data.len()` must equal
    /// `stride_for(width) * height`.
    pub(crate) fn from_padded(
        data: Vec<u8>,
        width: u32,
        height: u32,
        row_order: RowOrder,
    ) -> Self {
        let stride = Self::stride_for(width);
        debug_assert_eq!(data.len(), stride * height as usize);
        Self {
            data,
            width,
            height,
            stride,
            row_order,
        }
    }

    /// Build a bottom-up buffer where `f(x, y)` yields the stored `[b, g, r]`
    /// triple of the pixel `y` rows above the bottom edge.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 3]) -> Self {
        let stride = Self::stride_for(width);
        let mut data = vec![0u8; stride * height as usize];
        for (y, row) in data.chunks_exact_mut(stride.max(1)).enumerate().take(height as usize) {
            for x in 0..width {
                let i = x as usize * 3;
                row[i..i + 3].copy_from_slice(&f(x, y as u32));
            }
        }
        Self::from_padded(data, width, height, RowOrder::BottomUp)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per stored row, padding included.
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn row_order(&self) -> RowOrder {
        self.row_order
    }

    /// The raw padded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The `index`-th stored row without its padding.
    pub fn row(&self, index: u32) -> Option<&[u8]> {
        if index >= self.height {
            return None;
        }
        let start = index as usize * self.stride;
        self.data.get(start..start + self.width as usize * 3)
    }

    /// Stored `[b, g, r]` triple at column `x` of stored row `row`.
    pub fn pixel(&self, x: u32, row: u32) -> Option<[u8; 3]> {
        if x >= self.width {
            return None;
        }
        let i = x as usize * 3;
        self.row(row).map(|r| [r[i], r[i + 1], r[i + 2]])
    }

    /// Consume the buffer, returning the padded bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Rows in top-to-bottom display order.
    fn rows_top_down(&self) -> impl Iterator<Item = &[u8]> {
        let order = self.row_order;
        let height = self.height;
        (0..height).filter_map(move |i| match order {
            RowOrder::TopDown => self.row(i),
            RowOrder::BottomUp => self.row(height - 1 - i),
        })
    }

    /// Tightly packed, top-down RGB image with channels swapped to red-first.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * 3);
        for row in self.rows_top_down() {
            for bgr in row.chunks_exact(3) {
                out.extend_from_slice(&[bgr[2], bgr[1], bgr[0]]);
            }
        }
        image::RgbImage::from_vec(self.width, self.height, out)
            .unwrap_or_else(|| image::RgbImage::new(self.width, self.height))
    }

    /// Opaque RGBA variant of [`to_rgb_image`](Self::to_rgb_image).
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for row in self.rows_top_down() {
            for bgr in row.chunks_exact(3) {
                out.extend_from_slice(&[bgr[2], bgr[1], bgr[0], 255]);
            }
        }
        image::RgbaImage::from_vec(self.width, self.height, out)
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    /// Row-for-row copy without padding, in stored order and channel order.
    pub(crate) fn to_tight(&self) -> Result<Vec<u8>, LoadError> {
        let bytes = self.width as usize * self.height as usize * 3;
        let mut out = Vec::new();
        out.try_reserve_exact(bytes)
            .map_err(|_| LoadError::OutOfMemory { bytes })?;
        for i in 0..self.height {
            if let Some(row) = self.row(i) {
                out.extend_from_slice(row);
            }
        }
        Ok(out)
    }
}
