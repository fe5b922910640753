//! Window backend: blits the raw canvas into a native window via minifb.

use std::time::Instant;

use minifb::{Key, Window, WindowOptions};

use super::blit::{copy_rows, rgba_to_0rgb};
use super::{Presented, Presenter};
use crate::canvas::Canvas;
use crate::error::{ConsoleError, ConsoleResult};

/// Fixed-size window showing each frame's pixels unscaled.
pub struct WindowPresenter {
    window: Window,
    width: usize,
    height: usize,
    /// Window surface in 0x00RRGGBB, `width` pixels per row
    surface: Vec<u32>,
    last_frame: Instant,
}

impl WindowPresenter {
    /// Open a `width` x `height` window.
    ///
    /// # Errors
    /// Returns [`ConsoleError::Window`] with minifb's message if the window
    /// cannot be created.
    pub fn open(title: &str, width: usize, height: usize, target_fps: u32) -> ConsoleResult<Self> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| ConsoleError::Window(e.to_string()))?;
        window.set_target_fps(target_fps as usize);
        log::info!("opened {}x{} window '{}'", width, height, title);

        Ok(Self {
            window,
            width,
            height,
            surface: vec![0; width * height],
            last_frame: Instant::now(),
        })
    }
}

impl Presenter for WindowPresenter {
    fn name(&self) -> &'static str {
        "window"
    }

    /// Real time elapsed since the previous call.
    fn next_delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        dt
    }

    fn present(&mut self, canvas: &Canvas<'_>) -> ConsoleResult<Presented> {
        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            return Ok(Presented::Quit);
        }

        if canvas.width() != self.width || canvas.height() != self.height {
            return Err(ConsoleError::Window(format!(
                "frame is {}x{} but the window is {}x{}",
                canvas.width(),
                canvas.height(),
                self.width,
                self.height
            )));
        }

        copy_rows(canvas, &mut self.surface, self.width, rgba_to_0rgb);
        self.window
            .update_with_buffer(&self.surface, self.width, self.height)
            .map_err(|e| ConsoleError::Window(e.to_string()))?;

        Ok(Presented::Continue)
    }
}
