//! Block averaging of source pixels.

use crate::canvas::{Canvas, Rgba};

/// Average every pixel of `block` into one color.
///
/// Each channel is summed across the block and divided by the pixel count
/// with integer truncation. The caller must pass a block of at least 1x1;
/// the downsample buffer only ever hands in `scale x scale` blocks.
pub fn average_pixels(block: &Canvas<'_>) -> Rgba {
    let count = (block.width() * block.height()) as u64;
    debug_assert!(count > 0, "cannot average an empty block");

    let mut sum_r = 0u64;
    let mut sum_g = 0u64;
    let mut sum_b = 0u64;
    let mut sum_a = 0u64;

    for pixel in block.iter_pixels() {
        let c = Rgba::from_pixel(pixel);
        sum_r += c.r as u64;
        sum_g += c.g as u64;
        sum_b += c.b as u64;
        sum_a += c.a as u64;
    }

    Rgba {
        r: (sum_r / count) as u8,
        g: (sum_g / count) as u8,
        b: (sum_b / count) as u8,
        a: (sum_a / count) as u8,
    }
}
