//! Color to character quantization.

use crate::canvas::Rgba;

use super::ramp::sparsest;

/// Perceived brightness of a color: its strongest channel scaled by alpha.
#[inline]
pub fn brightness(color: Rgba) -> u8 {
    let max = color.r.max(color.g).max(color.b) as u32;
    (max * color.a as u32 / 255) as u8
}

/// Pick the ramp character for `color`.
///
/// Brightness 0..=255 is spread evenly over the ramp with
/// `index = brightness * ramp.len() / 256`, so full brightness lands on the
/// last character and alpha 0 always lands on the first.
pub fn color_to_char(color: Rgba, ramp: &[char]) -> char {
    if ramp.is_empty() {
        return sparsest(ramp);
    }
    let idx = brightness(color) as usize * ramp.len() / 256;
    ramp[idx]
}
