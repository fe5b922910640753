//! ASCII art presenter that redraws the frame in place on a terminal.
//!
//! Each frame is written as plain text rows followed by a cursor move back to
//! the top-left corner of the drawing, so the next frame overwrites it
//! instead of scrolling. No alternate screen, no raw mode, no color.

use std::io::Write;
use std::thread;
use std::time::Duration;

use crossterm::{cursor, QueueableCommand};

use super::{Presented, Presenter};
use crate::ascii::DownsampleBuffer;
use crate::canvas::Canvas;
use crate::error::ConsoleResult;

/// Default presentation rate in frames per second.
pub const DEFAULT_FPS: u32 = 60;

/// Terminal backend.
///
/// Generic over the output so tests can capture frames in a `Vec<u8>`.
pub struct TerminalPresenter<W: Write> {
    out: W,
    buffer: DownsampleBuffer,
    /// Fixed dt handed to the render routine every frame
    nominal_delta: f32,
    /// Sleep between printing a frame and rewinding the cursor
    frame_interval: Duration,
    /// Scratch bytes for one encoded frame, reused across frames
    frame: Vec<u8>,
}

impl<W: Write> TerminalPresenter<W> {
    /// Create a presenter averaging `scale x scale` blocks and pacing at `fps`.
    ///
    /// # Panics
    /// Panics if `scale` or `fps` is zero.
    pub fn new(out: W, scale: usize, fps: u32) -> Self {
        assert!(fps > 0, "fps must be at least 1");
        let nominal_delta = 1.0 / fps as f32;
        Self {
            out,
            buffer: DownsampleBuffer::new(scale),
            nominal_delta,
            frame_interval: Duration::from_secs_f64(1.0 / fps as f64),
            frame: Vec::new(),
        }
    }

    /// Override the sleep between frames without touching the nominal dt.
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn buffer(&self) -> &DownsampleBuffer {
        &self.buffer
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn rewind_cursor(&mut self) -> ConsoleResult<()> {
        let (up, left) = (cursor_steps(self.buffer.height()), cursor_steps(self.buffer.width()));
        if up > 0 {
            self.out.queue(cursor::MoveUp(up))?;
        }
        if left > 0 {
            self.out.queue(cursor::MoveLeft(left))?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn name(&self) -> &'static str {
        "terminal"
    }

    fn next_delta(&mut self) -> f32 {
        self.nominal_delta
    }

    fn present(&mut self, canvas: &Canvas<'_>) -> ConsoleResult<Presented> {
        self.buffer.refresh(canvas)?;

        self.frame.clear();
        encode_frame_into(&self.buffer, &mut self.frame);
        self.out.write_all(&self.frame)?;
        self.out.flush()?;

        if !self.frame_interval.is_zero() {
            thread::sleep(self.frame_interval);
        }

        self.rewind_cursor()?;
        Ok(Presented::Continue)
    }

    /// Move the cursor below the last frame so it stays on screen.
    fn finish(&mut self) -> ConsoleResult<()> {
        let down = cursor_steps(self.buffer.height());
        if down > 0 {
            self.out.queue(cursor::MoveDown(down))?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Encode the grid as text, each cell printed twice and each row ended by `\n`.
///
/// Doubling every cell horizontally roughly squares the cells, since terminal
/// glyphs are about twice as tall as they are wide.
pub fn encode_frame_into(buffer: &DownsampleBuffer, out: &mut Vec<u8>) {
    out.reserve((buffer.width() * 2 + 1) * buffer.height());
    let mut utf8 = [0u8; 4];
    for row in buffer.rows() {
        for &ch in row {
            let encoded = ch.encode_utf8(&mut utf8).as_bytes();
            out.extend_from_slice(encoded);
            out.extend_from_slice(encoded);
        }
        out.push(b'\n');
    }
}

fn cursor_steps(cells: usize) -> u16 {
    u16::try_from(cells).unwrap_or(u16::MAX)
}
