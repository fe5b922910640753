//! Copying canvas rows into a destination surface with its own row pitch.

use crate::canvas::{Canvas, Rgba};

/// Convert a `0xAABBGGRR` canvas pixel to the `0x00RRGGBB` layout most
/// window surfaces expect. Alpha is dropped.
#[inline]
pub fn rgba_to_0rgb(pixel: u32) -> u32 {
    let c = Rgba::from_pixel(pixel);
    ((c.r as u32) << 16) | ((c.g as u32) << 8) | (c.b as u32)
}

/// Copy every canvas row into `dst`, row `y` starting at `y * dst_pitch`.
///
/// `dst_pitch` is in pixels and may exceed the canvas width; the padding at
/// the end of each destination row is left untouched. Each pixel goes
/// through `convert` on the way.
///
/// # Panics
/// Panics if `dst_pitch < canvas.width()` or `dst` is too short for the
/// canvas height.
pub fn copy_rows(canvas: &Canvas<'_>, dst: &mut [u32], dst_pitch: usize, convert: impl Fn(u32) -> u32) {
    assert!(
        dst_pitch >= canvas.width(),
        "destination pitch {} is smaller than canvas width {}",
        dst_pitch,
        canvas.width()
    );
    for y in 0..canvas.height() {
        let start = y * dst_pitch;
        let dst_row = &mut dst[start..start + canvas.width()];
        for (d, &s) in dst_row.iter_mut().zip(canvas.row(y)) {
            *d = convert(s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_to_0rgb() {
        let pixel = Rgba::new(0x12, 0x34, 0x56, 0x78).to_pixel();
        assert_eq!(rgba_to_0rgb(pixel), 0x0012_3456);
    }

    #[test]
    fn test_copy_rows_honors_wider_pitch() {
        let src = [1, 2, 3, 4];
        let canvas = Canvas::packed(&src, 2, 2).unwrap();
        let mut dst = [0u32; 6];
        copy_rows(&canvas, &mut dst, 3, |p| p);
        assert_eq!(dst, [1, 2, 0, 3, 4, 0]);
    }

    #[test]
    fn test_copy_rows_from_strided_source() {
        let src = [1, 2, 9, 3, 4, 9];
        let canvas = Canvas::new(&src, 2, 2, 3).unwrap();
        let mut dst = [0u32; 4];
        copy_rows(&canvas, &mut dst, 2, |p| p * 10);
        assert_eq!(dst, [10, 20, 30, 40]);
    }

    #[test]
    #[should_panic(expected = "destination pitch")]
    fn test_copy_rows_rejects_narrow_pitch() {
        let src = [0u32; 4];
        let canvas = Canvas::packed(&src, 2, 2).unwrap();
        let mut dst = [0u32; 4];
        copy_rows(&canvas, &mut dst, 1, |p| p);
    }
}
