//! Persistent character grid recomputed from the canvas every frame.

use crate::canvas::Canvas;
use crate::error::{ConsoleError, ConsoleResult};

use super::quantize::color_to_char;
use super::ramp::BRIGHTNESS_RAMP;
use super::sample::average_pixels;

/// Default side length, in source pixels, of the block averaged into one cell.
pub const SCALE_FACTOR: usize = 20;

/// A character grid holding the current frame's quantized output.
///
/// The grid is `canvas_width / scale` by `canvas_height / scale` cells. It is
/// reallocated only when the incoming canvas size changes; otherwise the
/// same storage is rewritten in place every frame.
#[derive(Debug, Clone)]
pub struct DownsampleBuffer {
    scale: usize,
    ramp: &'static [char],
    /// Canvas size the grid was last sized for
    actual_width: usize,
    actual_height: usize,
    /// Grid size in cells
    width: usize,
    height: usize,
    /// Cell data in row-major order
    cells: Vec<char>,
    /// How many times the cell storage has been (re)allocated
    allocations: u64,
}

impl Default for DownsampleBuffer {
    fn default() -> Self {
        Self::new(SCALE_FACTOR)
    }
}

impl DownsampleBuffer {
    /// Create an empty buffer that averages `scale x scale` pixel blocks.
    ///
    /// # Panics
    /// Panics if `scale` is zero.
    pub fn new(scale: usize) -> Self {
        Self::with_ramp(scale, BRIGHTNESS_RAMP)
    }

    /// Create an empty buffer with a custom brightness ramp.
    pub fn with_ramp(scale: usize, ramp: &'static [char]) -> Self {
        assert!(scale > 0, "scale factor must be at least 1");
        Self {
            scale,
            ramp,
            actual_width: 0,
            actual_height: 0,
            width: 0,
            height: 0,
            cells: Vec::new(),
            allocations: 0,
        }
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Width of the grid in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Number of times the cell storage has been allocated.
    pub fn allocations(&self) -> u64 {
        self.allocations
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    /// Iterate over the grid rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks() rejects a zero size; an empty grid yields nothing either way.
        self.cells.chunks(self.width.max(1))
    }

    /// Recompute every cell from `canvas`.
    ///
    /// Reallocates the grid first if the canvas size differs from the last
    /// frame's.
    ///
    /// # Panics
    /// Panics if the canvas width or height is not divisible by the scale
    /// factor. Such canvases are not supported.
    ///
    /// # Errors
    /// Returns [`ConsoleError::Allocation`] if the grid cannot be allocated.
    /// The buffer is left empty in that case.
    pub fn refresh(&mut self, canvas: &Canvas<'_>) -> ConsoleResult<()> {
        if self.actual_width != canvas.width() || self.actual_height != canvas.height() {
            self.resize(canvas.width(), canvas.height())?;
        }

        let scale = self.scale;
        for y in 0..self.height {
            for x in 0..self.width {
                let block = canvas.subcanvas(x * scale, y * scale, scale, scale);
                self.cells[y * self.width + x] = color_to_char(average_pixels(&block), self.ramp);
            }
        }
        Ok(())
    }

    fn resize(&mut self, new_width: usize, new_height: usize) -> ConsoleResult<()> {
        assert!(
            new_width % self.scale == 0,
            "canvas width {} must be divisible by the scale factor {}",
            new_width,
            self.scale
        );
        assert!(
            new_height % self.scale == 0,
            "canvas height {} must be divisible by the scale factor {}",
            new_height,
            self.scale
        );

        let width = new_width / self.scale;
        let height = new_height / self.scale;
        let len = width * height;

        // Old contents are discarded before the new grid is requested.
        self.cells = Vec::new();
        self.actual_width = 0;
        self.actual_height = 0;
        self.width = 0;
        self.height = 0;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|source| ConsoleError::Allocation { cells: len, source })?;
        cells.resize(len, super::ramp::sparsest(self.ramp));

        log::debug!(
            "downsample grid resized to {}x{} cells for a {}x{} canvas",
            width,
            height,
            new_width,
            new_height
        );

        self.cells = cells;
        self.actual_width = new_width;
        self.actual_height = new_height;
        self.width = width;
        self.height = height;
        self.allocations += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{PixelBuffer, Rgba};

    #[test]
    fn test_new_buffer_is_empty() {
        let buf = DownsampleBuffer::new(4);
        assert_eq!(buf.width(), 0);
        assert_eq!(buf.height(), 0);
        assert!(buf.cells().is_empty());
        assert_eq!(buf.rows().count(), 0);
        assert_eq!(buf.allocations(), 0);
    }

    #[test]
    #[should_panic(expected = "scale factor must be at least 1")]
    fn test_zero_scale_panics() {
        let _ = DownsampleBuffer::new(0);
    }

    #[test]
    fn test_refresh_sizes_grid() {
        let pixels = PixelBuffer::new(12, 8);
        let mut buf = DownsampleBuffer::new(4);
        buf.refresh(&pixels.canvas()).unwrap();
        assert_eq!((buf.width(), buf.height()), (3, 2));
        assert_eq!(buf.cells().len(), 6);
        assert_eq!(buf.rows().count(), 2);
    }

    #[test]
    fn test_refresh_same_size_reuses_storage() {
        let pixels = PixelBuffer::new(8, 8);
        let mut buf = DownsampleBuffer::new(2);
        buf.refresh(&pixels.canvas()).unwrap();
        let ptr = buf.cells().as_ptr();
        buf.refresh(&pixels.canvas()).unwrap();
        assert_eq!(buf.cells().as_ptr(), ptr);
        assert_eq!(buf.allocations(), 1);
    }

    #[test]
    fn test_refresh_new_size_reallocates() {
        let mut buf = DownsampleBuffer::new(2);
        buf.refresh(&PixelBuffer::new(4, 4).canvas()).unwrap();
        buf.refresh(&PixelBuffer::new(6, 2).canvas()).unwrap();
        assert_eq!((buf.width(), buf.height()), (3, 1));
        assert_eq!(buf.allocations(), 2);
    }

    #[test]
    #[should_panic(expected = "width 5 must be divisible")]
    fn test_indivisible_width_panics() {
        let mut buf = DownsampleBuffer::new(2);
        let _ = buf.refresh(&PixelBuffer::new(5, 4).canvas());
    }

    #[test]
    fn test_strided_canvas_downsamples_visible_region_only() {
        // 2x2 canvas embedded in rows of 4; padding is bright and must be ignored.
        let white = Rgba::new(255, 255, 255, 255).to_pixel();
        let pixels = [0, 0, white, white, 0, 0, white, white];
        let canvas = Canvas::new(&pixels, 2, 2, 4).unwrap();
        let mut buf = DownsampleBuffer::new(2);
        buf.refresh(&canvas).unwrap();
        assert_eq!(buf.cells(), &[' ']);
    }

    #[test]
    fn test_get_out_of_range() {
        let mut buf = DownsampleBuffer::new(1);
        buf.refresh(&PixelBuffer::new(2, 1).canvas()).unwrap();
        assert_eq!(buf.get(1, 0), Some(' '));
        assert_eq!(buf.get(2, 0), None);
        assert_eq!(buf.get(0, 1), None);
    }
}
