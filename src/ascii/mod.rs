//! Terminal ASCII pipeline: turns an RGBA canvas into a character grid.
//!
//! Each frame goes through three steps:
//!
//! 1. **Sampling** - every `scale x scale` block of the canvas is averaged
//!    into one color ([`average_pixels`])
//! 2. **Quantization** - the averaged color's brightness picks a character
//!    from the [`BRIGHTNESS_RAMP`] ([`color_to_char`])
//! 3. **Storage** - results land in a [`DownsampleBuffer`] that persists
//!    across frames and only reallocates when the canvas size changes

mod downsample;
mod quantize;
mod ramp;
mod sample;

pub use downsample::{DownsampleBuffer, SCALE_FACTOR};
pub use quantize::{brightness, color_to_char};
pub use ramp::{densest, sparsest, BRIGHTNESS_RAMP};
pub use sample::average_pixels;
