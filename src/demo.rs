//! Built-in render routine used by the `vc` binary.
//!
//! Real programs supply their own [`Render`] implementation; this one only
//! exists so every backend has something moving to show.

use crate::canvas::{Canvas, PixelBuffer};
use crate::render::Render;

pub const BACKGROUND_COLOR: u32 = 0xFF18_1818;
pub const BALL_COLOR: u32 = 0xFF20_20AA;

/// A solid disc bouncing around a dark background.
#[derive(Debug, Clone)]
pub struct BouncingBall {
    buffer: PixelBuffer,
    radius: f32,
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
}

impl BouncingBall {
    pub fn new(width: usize, height: usize) -> Self {
        let radius = (width.min(height) as f32 / 6.0).max(1.0);
        Self {
            buffer: PixelBuffer::new(width, height),
            radius,
            x: width as f32 / 2.0,
            y: height as f32 / 2.0,
            dx: width as f32 / 8.0,
            dy: height as f32 / 6.0,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    fn advance(&mut self, dt: f32) {
        let width = self.buffer.width() as f32;
        let height = self.buffer.height() as f32;

        // A step that would leave the canvas flips direction and keeps position.
        let x = self.x + self.dx * dt;
        if x - self.radius < 0.0 || x + self.radius >= width {
            self.dx = -self.dx;
        } else {
            self.x = x;
        }

        let y = self.y + self.dy * dt;
        if y - self.radius < 0.0 || y + self.radius >= height {
            self.dy = -self.dy;
        } else {
            self.y = y;
        }
    }

    fn draw(&mut self) {
        self.buffer.fill(BACKGROUND_COLOR);

        let r = self.radius;
        let x0 = (self.x - r).floor().max(0.0) as usize;
        let y0 = (self.y - r).floor().max(0.0) as usize;
        let x1 = ((self.x + r).ceil() as usize).min(self.buffer.width());
        let y1 = ((self.y + r).ceil() as usize).min(self.buffer.height());

        for py in y0..y1 {
            for px in x0..x1 {
                let cx = px as f32 + 0.5 - self.x;
                let cy = py as f32 + 0.5 - self.y;
                if cx * cx + cy * cy <= r * r {
                    self.buffer.set(px, py, BALL_COLOR);
                }
            }
        }
    }
}

impl Render for BouncingBall {
    fn render(&mut self, dt: f32) -> Canvas<'_> {
        self.advance(dt);
        self.draw();
        self.buffer.canvas()
    }
}
