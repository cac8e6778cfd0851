//! Uncompressed 24-bit bitmap container parsing.

use std::io::{ErrorKind, Read};

use crate::error::LoadError;
use crate::pixels::{PixelBuffer, RowOrder};

/// Byte offset of the little-endian `i32` width, followed by the height.
pub const DIMENSIONS_OFFSET: usize = 0x12;

/// Byte offset at which pixel rows start; everything before is header.
pub const PIXEL_DATA_OFFSET: usize = 54;

const READ_CHUNK: usize = 16 * 1024;

/// Dimensions read from a bitmap header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub width: u32,
    pub height: u32,
    pub row_order: RowOrder,
}

impl BmpHeader {
    /// Parse the dimension fields out of a full 54-byte header.
    pub fn parse(header: &[u8; PIXEL_DATA_OFFSET]) -> Result<Self, LoadError> {
        let field = |offset: usize| {
            i32::from_le_bytes([
                header[offset],
                header[offset + 1],
                header[offset + 2],
                header[offset + 3],
            ])
        };
        let width = field(DIMENSIONS_OFFSET);
        let height = field(DIMENSIONS_OFFSET + 4);

        if width <= 0 {
            return Err(LoadError::CorruptHeader(format!("invalid width {width}")));
        }
        if height == 0 {
            return Err(LoadError::CorruptHeader("zero height".to_string()));
        }
        let row_order = if height < 0 {
            RowOrder::TopDown
        } else {
            RowOrder::BottomUp
        };

        let parsed = Self {
            width: width.unsigned_abs(),
            height: height.unsigned_abs(),
            row_order,
        };
        if parsed.data_len().is_none() {
            return Err(LoadError::CorruptHeader(format!(
                "{}x{} image does not fit in memory",
                parsed.width, parsed.height
            )));
        }
        Ok(parsed)
    }

    /// Padded row stride in bytes.
    pub fn stride(&self) -> usize {
        PixelBuffer::stride_for(self.width)
    }

    /// Total pixel bytes, `None` on overflow.
    pub fn data_len(&self) -> Option<usize> {
        self.stride().checked_mul(self.height as usize)
    }
}

/// Read the header and pixel rows of a bitmap stream positioned at its start.
pub(crate) fn read_bitmap(reader: &mut impl Read) -> Result<PixelBuffer, LoadError> {
    let mut header = [0u8; PIXEL_DATA_OFFSET];
    reader.read_exact(&mut header).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => {
            LoadError::CorruptHeader(format!("header shorter than {PIXEL_DATA_OFFSET} bytes"))
        }
        _ => LoadError::CorruptHeader(e.to_string()),
    })?;
    let header = BmpHeader::parse(&header)?;
    let expected = header.data_len().unwrap_or(usize::MAX);

    // Grows with the bytes actually read, not with the header's dimensions.
    let mut data = Vec::new();
    let mut pixels = reader.take(expected as u64);
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        let n = match pixels.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            // A failing read counts as a short read; whatever arrived is reported.
            Err(_) => break,
        };
        data.try_reserve(n)
            .map_err(|_| LoadError::OutOfMemory { bytes: expected })?;
        data.extend_from_slice(&chunk[..n]);
    }
    if data.len() < expected {
        return Err(LoadError::CorruptData {
            expected,
            actual: data.len(),
        });
    }

    Ok(PixelBuffer::from_padded(
        data,
        header.width,
        header.height,
        header.row_order,
    ))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a 24-bit bitmap file with every pixel set to `bgr`.
    pub(crate) fn bmp_bytes(width: i32, height: i32, bgr: [u8; 3]) -> Vec<u8> {
        let stride = PixelBuffer::stride_for(width.unsigned_abs());
        let rows = height.unsigned_abs() as usize;
        let image_size = stride * rows;
        let file_size = PIXEL_DATA_OFFSET + image_size;

        let mut out = Vec::with_capacity(file_size);
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&(file_size as u32).to_le_bytes());
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&(PIXEL_DATA_OFFSET as u32).to_le_bytes());
        out.extend_from_slice(&40u32.to_le_bytes());
        out.extend_from_slice(&width.to_le_bytes());
        out.extend_from_slice(&height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&24u16.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&(image_size as u32).to_le_bytes());
        out.extend_from_slice(&[0; 16]);
        assert_eq!(out.len(), PIXEL_DATA_OFFSET);

        for _ in 0..rows {
            for _ in 0..width.unsigned_abs() {
                out.extend_from_slice(&bgr);
            }
            out.resize(out.len().next_multiple_of(4), 0);
        }
        out
    }

    #[test]
    fn test_reads_dimensions_at_fixed_offset() {
        let bytes = bmp_bytes(64, 32, [1, 2, 3]);
        let mut header = [0u8; PIXEL_DATA_OFFSET];
        header.copy_from_slice(&bytes[..PIXEL_DATA_OFFSET]);
        let parsed = BmpHeader::parse(&header).unwrap();
        assert_eq!(parsed.width, 64);
        assert_eq!(parsed.height, 32);
        assert_eq!(parsed.row_order, RowOrder::BottomUp);
        assert_eq!(parsed.data_len(), Some(192 * 32));
    }

    #[test]
    fn test_negative_height_is_top_down() {
        let bytes = bmp_bytes(4, -2, [0; 3]);
        let buf = read_bitmap(&mut bytes.as_slice()).unwrap();
        assert_eq!(buf.height(), 2);
        assert_eq!(buf.row_order(), RowOrder::TopDown);
    }

    #[test]
    fn test_odd_width_rows_padded() {
        let bytes = bmp_bytes(3, 3, [9, 8, 7]);
        let buf = read_bitmap(&mut bytes.as_slice()).unwrap();
        assert_eq!(buf.stride(), 12);
        assert_eq!(buf.len(), 36);
        assert_eq!(buf.pixel(2, 2), Some([9, 8, 7]));
    }

    #[test]
    fn test_short_header_is_corrupt_header() {
        let bytes = bmp_bytes(4, 4, [0; 3]);
        let err = read_bitmap(&mut &bytes[..30]).unwrap_err();
        assert!(matches!(err, LoadError::CorruptHeader(_)), "got {err:?}");
    }

    #[test]
    fn test_zero_and_negative_width_rejected() {
        for width in [0, -8] {
            let bytes = bmp_bytes(width, 4, [0; 3]);
            let err = read_bitmap(&mut bytes.as_slice()).unwrap_err();
            assert!(matches!(err, LoadError::CorruptHeader(_)), "width {width}: {err:?}");
        }
    }

    #[test]
    fn test_zero_height_rejected() {
        let bytes = bmp_bytes(4, 0, [0; 3]);
        let err = read_bitmap(&mut bytes.as_slice()).unwrap_err();
        assert!(matches!(err, LoadError::CorruptHeader(_)));
    }

    #[test]
    fn test_truncated_pixels_are_corrupt_data() {
        let bytes = bmp_bytes(8, 8, [0; 3]);
        let cut = bytes.len() - 10;
        let err = read_bitmap(&mut &bytes[..cut]).unwrap_err();
        match err {
            LoadError::CorruptData { expected, actual } => {
                assert_eq!(expected, 24 * 8);
                assert_eq!(actual, 24 * 8 - 10);
            }
            other => panic!("expected CorruptData, got {other:?}"),
        }
    }

    #[test]
    fn test_huge_header_with_few_bytes_is_corrupt_data() {
        for (width, height) in [(60_000, 60_000), (1 << 20, 1 << 20), (i32::MAX, i32::MAX)] {
            let mut bytes = bmp_bytes(4, 4, [0; 3]);
            bytes.truncate(PIXEL_DATA_OFFSET);
            bytes[DIMENSIONS_OFFSET..DIMENSIONS_OFFSET + 4].copy_from_slice(&width.to_le_bytes());
            bytes[DIMENSIONS_OFFSET + 4..DIMENSIONS_OFFSET + 8]
                .copy_from_slice(&height.to_le_bytes());
            bytes.extend_from_slice(&[0x55; 100]);

            match read_bitmap(&mut bytes.as_slice()) {
                Err(LoadError::CorruptData { actual, .. }) => assert_eq!(actual, 100),
                // 32-bit targets cannot even express the size.
                Err(LoadError::CorruptHeader(_)) if usize::BITS < 64 => {}
                other => panic!("{width}x{height}: expected CorruptData, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut bytes = bmp_bytes(4, 4, [5; 3]);
        bytes.extend_from_slice(&[0xAA; 32]);
        let buf = read_bitmap(&mut bytes.as_slice()).unwrap();
        assert_eq!(buf.len(), 12 * 4);
    }
}
