//! Headless backend for hosts that drive the render routine themselves.

use super::{Presented, Presenter};
use crate::canvas::Canvas;
use crate::error::ConsoleResult;

/// A presenter that owns no loop and performs no I/O.
///
/// The host calls the render routine on its own schedule and may hand the
/// result to [`Presenter::present`], which only records what it saw.
#[derive(Debug, Clone, Default)]
pub struct ExportStub {
    frames: u64,
    last_size: Option<(usize, usize)>,
}

impl ExportStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames handed to [`Presenter::present`] so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Size of the most recent frame, if any.
    pub fn last_size(&self) -> Option<(usize, usize)> {
        self.last_size
    }
}

impl Presenter for ExportStub {
    fn name(&self) -> &'static str {
        "export"
    }

    fn owns_loop(&self) -> bool {
        false
    }

    fn next_delta(&mut self) -> f32 {
        0.0
    }

    fn present(&mut self, canvas: &Canvas<'_>) -> ConsoleResult<Presented> {
        self.frames += 1;
        self.last_size = Some((canvas.width(), canvas.height()));
        Ok(Presented::Continue)
    }
}
