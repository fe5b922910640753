//! The per-frame render callback every backend consumes.

use crate::canvas::Canvas;

/// An external rendering routine.
///
/// Each call advances the routine by `dt` seconds and returns a view of the
/// freshly rendered frame. The canvas borrows the renderer, so it stays valid
/// until the next call and no longer.
pub trait Render {
    fn render(&mut self, dt: f32) -> Canvas<'_>;
}

impl<R: Render + ?Sized> Render for &mut R {
    fn render(&mut self, dt: f32) -> Canvas<'_> {
        (**self).render(dt)
    }
}

impl<R: Render + ?Sized> Render for Box<R> {
    fn render(&mut self, dt: f32) -> Canvas<'_> {
        (**self).render(dt)
    }
}
