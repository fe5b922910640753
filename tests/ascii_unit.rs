//! Unit tests for the terminal ASCII pipeline.
//!
//! These tests verify the core algorithms:
//! - Block averaging
//! - Brightness quantization
//! - Downsample buffer sizing and reuse

use vconsole::ascii::*;
use vconsole::canvas::{Canvas, PixelBuffer, Rgba};

fn uniform(width: usize, height: usize, color: Rgba) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height);
    buf.fill(color.to_pixel());
    buf
}

// ==================== Pixel Sampler Tests ====================

#[test]
fn test_uniform_block_averages_to_itself() {
    let colors = [
        Rgba::new(0, 0, 0, 0),
        Rgba::new(255, 255, 255, 255),
        Rgba::new(255, 0, 0, 255),
        Rgba::new(17, 99, 201, 3),
        Rgba::new(128, 64, 32, 200),
    ];
    for scale in [1, 2, 5] {
        for color in colors {
            let buf = uniform(scale, scale, color);
            assert_eq!(average_pixels(&buf.canvas()), color, "scale {} color {:?}", scale, color);
        }
    }
}

#[test]
fn test_average_of_checkerboard() {
    // Half white, half transparent black.
    let white = Rgba::new(255, 255, 255, 255).to_pixel();
    let pixels = [white, 0, 0, white];
    let canvas = Canvas::packed(&pixels, 2, 2).unwrap();
    assert_eq!(average_pixels(&canvas), Rgba::new(127, 127, 127, 127));
}

#[test]
fn test_average_large_block_does_not_overflow() {
    let buf = uniform(100, 100, Rgba::new(255, 255, 255, 255));
    assert_eq!(average_pixels(&buf.canvas()), Rgba::new(255, 255, 255, 255));
}

// ==================== Brightness Quantizer Tests ====================

#[test]
fn test_transparent_is_always_sparsest() {
    for value in [0u8, 1, 127, 200, 255] {
        let colors = [
            Rgba::new(value, 0, 0, 0),
            Rgba::new(0, value, 0, 0),
            Rgba::new(0, 0, value, 0),
            Rgba::new(value, value, value, 0),
        ];
        for c in colors {
            assert_eq!(color_to_char(c, BRIGHTNESS_RAMP), sparsest(BRIGHTNESS_RAMP));
        }
    }
}

#[test]
fn test_opaque_white_is_densest() {
    let white = Rgba::new(255, 255, 255, 255);
    assert_eq!(color_to_char(white, BRIGHTNESS_RAMP), densest(BRIGHTNESS_RAMP));
}

#[test]
fn test_any_full_channel_is_densest() {
    for c in [Rgba::new(255, 0, 0, 255), Rgba::new(0, 255, 0, 255), Rgba::new(0, 0, 255, 255)] {
        assert_eq!(color_to_char(c, BRIGHTNESS_RAMP), '#');
    }
}

#[test]
fn test_quantizer_is_monotonic_in_brightness() {
    let rank = |ch: char| BRIGHTNESS_RAMP.iter().position(|&c| c == ch).unwrap();

    // Walk every (channel, alpha) pair and sort by perceived brightness.
    let mut samples: Vec<(u8, usize)> = Vec::new();
    for value in (0..=255u8).step_by(5) {
        for alpha in (0..=255u8).step_by(15) {
            let c = Rgba::new(value, value / 2, 0, alpha);
            samples.push((brightness(c), rank(color_to_char(c, BRIGHTNESS_RAMP))));
        }
    }
    samples.sort();
    for pair in samples.windows(2) {
        assert!(pair[0].1 <= pair[1].1, "brightness {} -> {} went sparser", pair[0].0, pair[1].0);
    }
}

#[test]
fn test_every_ramp_level_is_reachable() {
    let mut seen = std::collections::HashSet::new();
    for value in 0..=255u8 {
        seen.insert(color_to_char(Rgba::new(value, value, value, 255), BRIGHTNESS_RAMP));
    }
    assert_eq!(seen.len(), BRIGHTNESS_RAMP.len());
}

// ==================== Downsample Buffer Tests ====================

#[test]
fn test_refresh_dimensions() {
    for (w, h, scale) in [(800, 600, 20), (40, 10, 5), (6, 6, 3)] {
        let buf = PixelBuffer::new(w, h);
        let mut grid = DownsampleBuffer::new(scale);
        grid.refresh(&buf.canvas()).unwrap();
        assert_eq!((grid.width(), grid.height()), (w / scale, h / scale));
    }
}

#[test]
fn test_repeated_refresh_does_not_reallocate() {
    let buf = PixelBuffer::new(40, 20);
    let mut grid = DownsampleBuffer::new(5);
    grid.refresh(&buf.canvas()).unwrap();
    let ptr = grid.cells().as_ptr();
    for _ in 0..10 {
        grid.refresh(&buf.canvas()).unwrap();
    }
    assert_eq!(grid.allocations(), 1);
    assert_eq!(grid.cells().as_ptr(), ptr);
}

#[test]
#[should_panic(expected = "must be divisible by the scale factor")]
fn test_indivisible_height_fails_fast() {
    let buf = PixelBuffer::new(10, 7);
    let mut grid = DownsampleBuffer::new(5);
    let _ = grid.refresh(&buf.canvas());
}

#[test]
fn test_indivisible_canvas_leaves_no_partial_grid() {
    let mut grid = DownsampleBuffer::new(4);
    grid.refresh(&PixelBuffer::new(8, 8).canvas()).unwrap();

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _ = grid.refresh(&PixelBuffer::new(9, 8).canvas());
    }));
    assert!(result.is_err());
    // The assertion fires before anything is touched.
    assert_eq!((grid.width(), grid.height()), (2, 2));
    assert_eq!(grid.cells().len(), 4);
}

#[test]
fn test_red_block_on_transparent_canvas() {
    let red = Rgba::new(255, 0, 0, 255).to_pixel();
    let mut buf = PixelBuffer::new(4, 4);
    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        buf.set(x, y, red);
    }

    let mut grid = DownsampleBuffer::new(2);
    grid.refresh(&buf.canvas()).unwrap();

    assert_eq!((grid.width(), grid.height()), (2, 2));
    assert_eq!(grid.get(0, 0), Some(densest(BRIGHTNESS_RAMP)));
    assert_eq!(grid.get(1, 0), Some(sparsest(BRIGHTNESS_RAMP)));
    assert_eq!(grid.get(0, 1), Some(sparsest(BRIGHTNESS_RAMP)));
    assert_eq!(grid.get(1, 1), Some(sparsest(BRIGHTNESS_RAMP)));
}

#[test]
fn test_new_content_overwrites_every_cell() {
    let mut grid = DownsampleBuffer::new(2);

    let bright = uniform(6, 4, Rgba::new(255, 255, 255, 255));
    grid.refresh(&bright.canvas()).unwrap();
    assert!(grid.cells().iter().all(|&c| c == '#'));

    let mid = uniform(6, 4, Rgba::new(128, 128, 128, 255));
    grid.refresh(&mid.canvas()).unwrap();
    assert!(grid.cells().iter().all(|&c| c == 'a'));
    assert_eq!(grid.allocations(), 1);
}

#[test]
fn test_subcanvas_view_downsamples_like_a_copy() {
    // A 4x4 region cut out of a larger canvas must give the same grid as
    // the same pixels packed on their own.
    let mut big = PixelBuffer::new(8, 8);
    for y in 0..8 {
        for x in 0..8 {
            big.set(x, y, Rgba::new((x * 30) as u8, (y * 30) as u8, 0, 255).to_pixel());
        }
    }
    let view = big.canvas().subcanvas(2, 4, 4, 4);

    let mut packed = PixelBuffer::new(4, 4);
    for y in 0..4 {
        for x in 0..4 {
            packed.set(x, y, view.pixel(x, y));
        }
    }

    let mut a = DownsampleBuffer::new(2);
    let mut b = DownsampleBuffer::new(2);
    a.refresh(&view).unwrap();
    b.refresh(&packed.canvas()).unwrap();
    assert_eq!(a.cells(), b.cells());
}
