//! In-memory frame buffer
//!
//! [`FrameBuffer`] wraps caller-provided storage (a static array, a slice in
//! PSRAM, or a `Vec` with the `alloc` feature) and keeps pixels in canonical
//! form: big-endian RGB565 for [`ColorMode::Rgb565`], RGB332 for
//! [`ColorMode::EightBit`]. Every successful write extends the buffer's
//! [`DirtyRegion`]; rejected writes leave both pixels and dirty region alone.
//!
//! ## Example
//!
//! ```
//! use st7796s::{Color, ColorMode, FrameBuffer, Rect};
//!
//! let mut storage = [0u8; 16 * 8 * 2];
//! let mut fb = match FrameBuffer::new(&mut storage[..], 16, 8, ColorMode::Rgb565) {
//!     Ok(fb) => fb,
//!     Err(_) => return,
//! };
//!
//! let _ = fb.write_pixel(2, 3, Color::RED);
//! let _ = fb.write_pixel(9, 1, Color::BLUE);
//! assert_eq!(fb.dirty().bounds(), Some(Rect::new(2, 1, 10, 4)));
//! assert!(fb.write_pixel(16, 0, Color::RED).is_err());
//! ```

use crate::color::Color;
use crate::config::{ColorMode, Config};
use crate::dirty::{DirtyRegion, Rect};
use crate::error::BufferError;

type BufferResult<T> = core::result::Result<T, BufferError>;

/// Pixels converted per wire chunk when the stored format differs from the wire format
const WIRE_CHUNK_PIXELS: usize = 64;

/// Pixel store with dirty-region tracking
pub struct FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Backing storage
    buffer: B,
    /// Logical width in pixels
    width: u16,
    /// Logical height in pixels
    height: u16,
    /// Stored pixel depth
    color_mode: ColorMode,
    /// Area written since the last flush
    dirty: DirtyRegion,
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap `buffer` as a `width` x `height` frame buffer
    ///
    /// # Errors
    ///
    /// Returns `BufferError::BufferTooSmall` if the storage cannot hold every
    /// pixel at the requested depth.
    pub fn new(buffer: B, width: u16, height: u16, color_mode: ColorMode) -> BufferResult<Self> {
        let required = width as usize * height as usize * color_mode.bytes_per_pixel();
        let provided = buffer.as_ref().len();
        if provided < required {
            return Err(BufferError::BufferTooSmall { required, provided });
        }
        Ok(Self {
            buffer,
            width,
            height,
            color_mode,
            dirty: DirtyRegion::new(),
        })
    }

    /// Frame buffer sized for a configuration's logical (rotated) dimensions
    pub fn for_config(config: &Config, buffer: B) -> BufferResult<Self> {
        let dims = config.rotated_dimensions();
        Self::new(buffer, dims.width, dims.height, config.color_mode)
    }

    /// Logical width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Logical height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Stored pixel depth
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Area written since the last successful flush
    pub fn dirty(&self) -> &DirtyRegion {
        &self.dirty
    }

    /// Mark the whole buffer for retransmission
    pub fn mark_all_dirty(&mut self) {
        self.dirty.mark(self.bounds());
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty.clear();
    }

    /// Exchange width and height, keeping the stored bytes
    pub(crate) fn transpose(&mut self) {
        core::mem::swap(&mut self.width, &mut self.height);
        self.dirty.clear();
        self.mark_all_dirty();
    }

    /// Rectangle covering the whole buffer
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Stored pixel bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.byte_len()]
    }

    /// Read back a pixel
    pub fn pixel(&self, x: u16, y: u16) -> BufferResult<Color> {
        self.check_point(x, y)?;
        let offset = self.offset(x, y);
        let bpp = self.color_mode.bytes_per_pixel();
        Ok(self.decode(&self.buffer.as_ref()[offset..offset + bpp]))
    }

    /// Write a single pixel
    pub fn write_pixel(&mut self, x: u16, y: u16, color: Color) -> BufferResult<()> {
        self.check_point(x, y)?;
        self.store(x, y, color);
        self.dirty.mark(Rect::pixel(x, y));
        Ok(())
    }

    /// Write a `w` x `h` block of pixels given in row-major order
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if `colors.len() != w * h`, `OutOfBounds` if the block
    /// does not fit. Nothing is written on error.
    pub fn write_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        colors: &[Color],
    ) -> BufferResult<()> {
        let expected = w as usize * h as usize;
        if colors.len() != expected {
            return Err(BufferError::SizeMismatch {
                expected,
                provided: colors.len(),
            });
        }
        self.check_rect(x, y, w, h)?;
        if expected == 0 {
            return Ok(());
        }
        for (row, line) in colors.chunks_exact(w as usize).enumerate() {
            for (col, color) in line.iter().enumerate() {
                self.store(x + col as u16, y + row as u16, *color);
            }
        }
        self.dirty.mark(Rect::from_size(x, y, w, h));
        Ok(())
    }

    /// Fill a `w` x `h` block with one color
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color) -> BufferResult<()> {
        self.check_rect(x, y, w, h)?;
        for row in y..y + h {
            for col in x..x + w {
                self.store(col, row, color);
            }
        }
        self.dirty.mark(Rect::from_size(x, y, w, h));
        Ok(())
    }

    /// Fill the whole buffer and mark it dirty
    pub fn clear(&mut self, color: Color) {
        let len = self.byte_len();
        let buffer = &mut self.buffer.as_mut()[..len];
        match self.color_mode {
            ColorMode::Rgb565 => {
                let bytes = color.to_rgb565().to_be_bytes();
                for pixel in buffer.chunks_exact_mut(2) {
                    pixel.copy_from_slice(&bytes);
                }
            }
            ColorMode::EightBit => buffer.fill(color.to_rgb332()),
        }
        self.mark_all_dirty();
    }

    /// Replace the whole buffer with a precomposed frame in stored format
    pub fn load_frame(&mut self, frame: &[u8]) -> BufferResult<()> {
        let expected = self.byte_len();
        if frame.len() != expected {
            return Err(BufferError::SizeMismatch {
                expected,
                provided: frame.len(),
            });
        }
        self.buffer.as_mut()[..expected].copy_from_slice(frame);
        self.mark_all_dirty();
        Ok(())
    }

    /// Serialize `rect` row-major in controller wire format
    ///
    /// Pixels are emitted as big-endian RGB565 with red and blue swapped when
    /// `use_bgr` is set. `sink` receives consecutive chunks; its first error
    /// stops the stream. The rectangle is clipped to the buffer.
    pub fn stream_wire<E, F>(&self, rect: &Rect, use_bgr: bool, mut sink: F) -> Result<(), E>
    where
        F: FnMut(&[u8]) -> Result<(), E>,
    {
        let x0 = rect.x0.min(self.width);
        let x1 = rect.x1.min(self.width);
        let y0 = rect.y0.min(self.height);
        let y1 = rect.y1.min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return Ok(());
        }

        let bpp = self.color_mode.bytes_per_pixel();
        let passthrough = self.color_mode == ColorMode::Rgb565 && !use_bgr;
        let mut chunk = [0u8; WIRE_CHUNK_PIXELS * 2];

        for y in y0..y1 {
            let row = &self.buffer.as_ref()[self.offset(x0, y)..self.offset(x1, y)];
            if passthrough {
                sink(row)?;
                continue;
            }
            for pixels in row.chunks(WIRE_CHUNK_PIXELS * bpp) {
                let mut len = 0;
                for stored in pixels.chunks_exact(bpp) {
                    let wire = self.decode(stored).to_wire(use_bgr);
                    chunk[len..len + 2].copy_from_slice(&wire);
                    len += 2;
                }
                sink(&chunk[..len])?;
            }
        }
        Ok(())
    }

    fn byte_len(&self) -> usize {
        self.width as usize * self.height as usize * self.color_mode.bytes_per_pixel()
    }

    fn offset(&self, x: u16, y: u16) -> usize {
        (y as usize * self.width as usize + x as usize) * self.color_mode.bytes_per_pixel()
    }

    fn check_point(&self, x: u16, y: u16) -> BufferResult<()> {
        if x >= self.width || y >= self.height {
            return Err(BufferError::OutOfBounds { x, y });
        }
        Ok(())
    }

    fn check_rect(&self, x: u16, y: u16, w: u16, h: u16) -> BufferResult<()> {
        if u32::from(x) + u32::from(w) > u32::from(self.width)
            || u32::from(y) + u32::from(h) > u32::from(self.height)
        {
            return Err(BufferError::OutOfBounds { x, y });
        }
        Ok(())
    }

    fn store(&mut self, x: u16, y: u16, color: Color) {
        let offset = self.offset(x, y);
        let buffer = self.buffer.as_mut();
        match self.color_mode {
            ColorMode::Rgb565 => {
                buffer[offset..offset + 2].copy_from_slice(&color.to_rgb565().to_be_bytes());
            }
            ColorMode::EightBit => buffer[offset] = color.to_rgb332(),
        }
    }

    fn decode(&self, stored: &[u8]) -> Color {
        match self.color_mode {
            ColorMode::Rgb565 => Color::from_rgb565(u16::from_be_bytes([stored[0], stored[1]])),
            ColorMode::EightBit => Color::from_rgb332(stored[0]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn rgb565(width: u16, height: u16) -> FrameBuffer<Vec<u8>> {
        let storage = alloc::vec![0u8; width as usize * height as usize * 2];
        FrameBuffer::new(storage, width, height, ColorMode::Rgb565).unwrap()
    }

    fn eight_bit(width: u16, height: u16) -> FrameBuffer<Vec<u8>> {
        let storage = alloc::vec![0u8; width as usize * height as usize];
        FrameBuffer::new(storage, width, height, ColorMode::EightBit).unwrap()
    }

    fn collect_wire(fb: &FrameBuffer<Vec<u8>>, rect: &Rect, use_bgr: bool) -> Vec<u8> {
        let mut out = Vec::new();
        let result: Result<(), ()> = fb.stream_wire(rect, use_bgr, |chunk| {
            out.extend_from_slice(chunk);
            Ok(())
        });
        assert!(result.is_ok());
        out
    }

    #[test]
    fn test_new_rejects_small_buffer() {
        let result = FrameBuffer::new(alloc::vec![0u8; 10], 4, 4, ColorMode::Rgb565);
        assert!(matches!(
            result,
            Err(BufferError::BufferTooSmall {
                required: 32,
                provided: 10
            })
        ));
    }

    #[test]
    fn test_write_then_read_back_every_pixel() {
        let mut fb = rgb565(7, 5);
        for y in 0..5 {
            for x in 0..7 {
                let color = Color::new(x as u8, (x + y) as u8, y as u8);
                fb.write_pixel(x, y, color).unwrap();
                assert_eq!(fb.pixel(x, y).unwrap(), color);
            }
        }
    }

    #[test]
    fn test_eight_bit_read_back() {
        let mut fb = eight_bit(4, 4);
        fb.write_pixel(1, 2, Color::RED).unwrap();
        assert_eq!(fb.pixel(1, 2).unwrap(), Color::RED);
        assert_eq!(fb.as_bytes()[2 * 4 + 1], 0xE0);
    }

    #[test]
    fn test_out_of_bounds_write_leaves_buffer_unchanged() {
        let mut fb = rgb565(4, 4);
        fb.clear(Color::BLUE);
        fb.clear_dirty();
        let before = fb.as_bytes().to_vec();

        assert_eq!(
            fb.write_pixel(4, 0, Color::RED),
            Err(BufferError::OutOfBounds { x: 4, y: 0 })
        );
        assert_eq!(
            fb.write_pixel(0, 4, Color::RED),
            Err(BufferError::OutOfBounds { x: 0, y: 4 })
        );
        assert_eq!(fb.as_bytes(), &before[..]);
        assert!(fb.dirty().is_empty());
    }

    #[test]
    fn test_write_pixel_extends_dirty_region() {
        let mut fb = rgb565(10, 10);
        fb.write_pixel(1, 1, Color::RED).unwrap();
        fb.write_pixel(8, 5, Color::RED).unwrap();
        assert_eq!(fb.dirty().bounds(), Some(Rect::new(1, 1, 9, 6)));
    }

    #[test]
    fn test_write_rect_size_mismatch() {
        let mut fb = rgb565(10, 10);
        let colors = [Color::RED; 5];
        assert_eq!(
            fb.write_rect(0, 0, 2, 3, &colors),
            Err(BufferError::SizeMismatch {
                expected: 6,
                provided: 5
            })
        );
        assert!(fb.dirty().is_empty());
    }

    #[test]
    fn test_write_rect_out_of_bounds_writes_nothing() {
        let mut fb = rgb565(10, 10);
        let colors = [Color::RED; 9];
        assert!(matches!(
            fb.write_rect(8, 8, 3, 3, &colors),
            Err(BufferError::OutOfBounds { .. })
        ));
        assert_eq!(fb.pixel(8, 8).unwrap(), Color::BLACK);
        assert!(fb.dirty().is_empty());
    }

    #[test]
    fn test_write_rect_row_major() {
        let mut fb = rgb565(10, 10);
        let colors = [Color::RED, Color::GREEN, Color::BLUE, Color::WHITE];
        fb.write_rect(3, 4, 2, 2, &colors).unwrap();
        assert_eq!(fb.pixel(3, 4).unwrap(), Color::RED);
        assert_eq!(fb.pixel(4, 4).unwrap(), Color::GREEN);
        assert_eq!(fb.pixel(3, 5).unwrap(), Color::BLUE);
        assert_eq!(fb.pixel(4, 5).unwrap(), Color::WHITE);
        assert_eq!(fb.dirty().bounds(), Some(Rect::new(3, 4, 5, 6)));
    }

    #[test]
    fn test_clear_marks_everything_dirty() {
        let mut fb = eight_bit(6, 3);
        fb.clear(Color::WHITE);
        assert!(fb.as_bytes().iter().all(|b| *b == 0xFF));
        assert_eq!(fb.dirty().bounds(), Some(Rect::new(0, 0, 6, 3)));
    }

    #[test]
    fn test_transpose_swaps_extent() {
        let mut fb = rgb565(6, 3);
        fb.transpose();
        assert_eq!((fb.width(), fb.height()), (3, 6));
        assert_eq!(fb.dirty().bounds(), Some(Rect::new(0, 0, 3, 6)));
        assert!(fb.write_pixel(2, 5, Color::RED).is_ok());
        assert!(fb.write_pixel(5, 2, Color::RED).is_err());
    }

    #[test]
    fn test_load_frame_checks_size() {
        let mut fb = eight_bit(2, 2);
        assert!(matches!(
            fb.load_frame(&[0u8; 3]),
            Err(BufferError::SizeMismatch { expected: 4, .. })
        ));
        fb.load_frame(&[1, 2, 3, 4]).unwrap();
        assert_eq!(fb.as_bytes(), &[1, 2, 3, 4]);
        assert_eq!(fb.dirty().bounds(), Some(Rect::new(0, 0, 2, 2)));
    }

    #[test]
    fn test_stream_wire_passthrough_rgb565() {
        let mut fb = rgb565(4, 2);
        fb.write_pixel(1, 0, Color::new(31, 63, 31)).unwrap();
        fb.write_pixel(2, 1, Color::RED).unwrap();
        let wire = collect_wire(&fb, &Rect::new(1, 0, 3, 2), false);
        assert_eq!(
            wire,
            alloc::vec![0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x00]
        );
    }

    #[test]
    fn test_stream_wire_swaps_for_bgr() {
        let mut fb = rgb565(2, 1);
        fb.write_pixel(0, 0, Color::RED).unwrap();
        let wire = collect_wire(&fb, &Rect::new(0, 0, 1, 1), true);
        assert_eq!(wire, alloc::vec![0x00, 0x1F]);
        // stored form stays canonical RGB
        assert_eq!(fb.as_bytes()[..2], [0xF8, 0x00]);
    }

    #[test]
    fn test_stream_wire_expands_eight_bit() {
        let mut fb = eight_bit(2, 1);
        fb.write_pixel(0, 0, Color::WHITE).unwrap();
        let wire = collect_wire(&fb, &Rect::new(0, 0, 2, 1), false);
        assert_eq!(wire, alloc::vec![0xFF, 0xFF, 0x00, 0x00]);
    }

    #[test]
    fn test_stream_wire_chunks_long_rows() {
        let fb = eight_bit(200, 1);
        let mut chunks = 0;
        let mut total = 0;
        let result: Result<(), ()> = fb.stream_wire(&fb.bounds(), false, |chunk| {
            chunks += 1;
            total += chunk.len();
            Ok(())
        });
        assert!(result.is_ok());
        assert_eq!(total, 400);
        assert_eq!(chunks, 4);
    }

    #[test]
    fn test_stream_wire_stops_on_error() {
        let fb = rgb565(4, 4);
        let mut calls = 0;
        let result = fb.stream_wire(&fb.bounds(), false, |_| {
            calls += 1;
            Err("bus")
        });
        assert_eq!(result, Err("bus"));
        assert_eq!(calls, 1);
    }
}
