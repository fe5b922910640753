//! Pixel canvas views handed from the render routine to a presenter.
//!
//! Pixels are `u32` values laid out as `0xAABBGGRR`: red lives in the lowest
//! byte and alpha in the highest, which is RGBA32 byte order on little-endian
//! machines.

use crate::error::{ConsoleError, ConsoleResult};

/// One RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a `0xAABBGGRR` pixel.
    #[inline]
    pub const fn from_pixel(pixel: u32) -> Self {
        Self {
            r: (pixel & 0xFF) as u8,
            g: ((pixel >> 8) & 0xFF) as u8,
            b: ((pixel >> 16) & 0xFF) as u8,
            a: ((pixel >> 24) & 0xFF) as u8,
        }
    }

    /// Pack into a `0xAABBGGRR` pixel.
    #[inline]
    pub const fn to_pixel(self) -> u32 {
        (self.r as u32) | ((self.g as u32) << 8) | ((self.b as u32) << 16) | ((self.a as u32) << 24)
    }
}

impl From<u32> for Rgba {
    fn from(pixel: u32) -> Self {
        Self::from_pixel(pixel)
    }
}

/// Read-only view over a rectangular buffer of RGBA pixels.
///
/// `stride` is the distance in pixels between the starts of two consecutive
/// rows. A subcanvas keeps its parent's stride, which is what lets it address
/// a region of the parent without copying.
#[derive(Debug, Clone, Copy)]
pub struct Canvas<'a> {
    pixels: &'a [u32],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> Canvas<'a> {
    /// Create a canvas over `pixels`.
    ///
    /// # Errors
    /// Returns [`ConsoleError::InvalidCanvas`] if `stride < width` or the slice
    /// is too short to hold `height` rows.
    pub fn new(pixels: &'a [u32], width: usize, height: usize, stride: usize) -> ConsoleResult<Self> {
        if stride < width {
            return Err(ConsoleError::InvalidCanvas {
                reason: format!("stride {} is smaller than width {}", stride, width),
            });
        }
        let required = required_len(width, height, stride);
        if pixels.len() < required {
            return Err(ConsoleError::InvalidCanvas {
                reason: format!(
                    "{}x{} canvas with stride {} needs {} pixels, got {}",
                    width,
                    height,
                    stride,
                    required,
                    pixels.len()
                ),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
            stride,
        })
    }

    /// Create a tightly packed canvas (`stride == width`).
    pub fn packed(pixels: &'a [u32], width: usize, height: usize) -> ConsoleResult<Self> {
        Self::new(pixels, width, height, width)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the canvas.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} canvas",
            x,
            y,
            self.width,
            self.height
        );
        self.pixels[y * self.stride + x]
    }

    /// The `width` pixels of row `y`, without the stride padding.
    ///
    /// # Panics
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &'a [u32] {
        assert!(y < self.height, "row {} outside canvas of height {}", y, self.height);
        let start = y * self.stride;
        &self.pixels[start..start + self.width]
    }

    /// View the `w`x`h` region whose top-left corner is `(x, y)`.
    ///
    /// The subcanvas shares this canvas's storage and stride.
    ///
    /// # Panics
    /// Panics if the region does not fit inside the canvas.
    pub fn subcanvas(&self, x: usize, y: usize, w: usize, h: usize) -> Canvas<'a> {
        assert!(
            x + w <= self.width && y + h <= self.height,
            "subcanvas {}x{} at ({}, {}) exceeds {}x{} canvas",
            w,
            h,
            x,
            y,
            self.width,
            self.height
        );
        let len = required_len(w, h, self.stride);
        let pixels = if len == 0 {
            &self.pixels[..0]
        } else {
            let start = y * self.stride + x;
            &self.pixels[start..start + len]
        };
        Canvas {
            pixels,
            width: w,
            height: h,
            stride: self.stride,
        }
    }

    /// Iterate over every pixel, row by row.
    pub fn iter_pixels(&self) -> impl Iterator<Item = u32> + 'a {
        let canvas = *self;
        (0..canvas.height).flat_map(move |y| canvas.row(y).iter().copied())
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> usize {
    if width == 0 || height == 0 {
        0
    } else {
        (height - 1) * stride + width
    }
}

/// Owned, tightly packed pixel storage that a render routine draws into.
///
/// It lends itself out as a [`Canvas`] once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    pub fn fill(&mut self, pixel: u32) {
        self.pixels.fill(pixel);
    }

    /// Write one pixel; coordinates outside the buffer are ignored.
    pub fn set(&mut self, x: usize, y: usize, pixel: u32) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = pixel;
        }
    }

    pub fn canvas(&self) -> Canvas<'_> {
        // pixels.len() == width * height always holds here.
        Canvas {
            pixels: &self.pixels,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }
}
