//! Presentation backends and the frame loop that drives them.
//!
//! Every backend shares one contract: ask the render routine for a frame,
//! then present it. [`run_frames`] owns that loop; backends only implement
//! [`Presenter`].
//!
//! - [`TerminalPresenter`] - ASCII art on stdout, redrawn in place
//! - `WindowPresenter` - raw pixels in a native window (feature `window`)
//! - [`ExportStub`] - no loop and no I/O, for hosts that call the render
//!   routine themselves

pub mod blit;
mod export;
mod terminal;
#[cfg(feature = "window")]
mod window;

use std::fmt;

use crate::canvas::Canvas;
use crate::error::ConsoleResult;
use crate::render::Render;
use crate::shutdown::Shutdown;

pub use export::ExportStub;
pub use terminal::{encode_frame_into, TerminalPresenter, DEFAULT_FPS};
#[cfg(feature = "window")]
pub use window::WindowPresenter;

/// What the loop should do after a frame was presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presented {
    /// Keep going with the next frame
    Continue,
    /// The backend asked to stop (e.g. the window was closed)
    Quit,
}

/// A backend that can show one rendered frame at a time.
pub trait Presenter {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Whether this backend runs a frame loop at all.
    fn owns_loop(&self) -> bool {
        true
    }

    /// Seconds to advance the render routine by for the upcoming frame.
    fn next_delta(&mut self) -> f32;

    /// Present one frame.
    fn present(&mut self, canvas: &Canvas<'_>) -> ConsoleResult<Presented>;

    /// Called once after the loop stops.
    fn finish(&mut self) -> ConsoleResult<()> {
        Ok(())
    }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn owns_loop(&self) -> bool {
        (**self).owns_loop()
    }

    fn next_delta(&mut self) -> f32 {
        (**self).next_delta()
    }

    fn present(&mut self, canvas: &Canvas<'_>) -> ConsoleResult<Presented> {
        (**self).present(canvas)
    }

    fn finish(&mut self) -> ConsoleResult<()> {
        (**self).finish()
    }
}

/// Which backend to present through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    Window,
    #[default]
    Terminal,
    Export,
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Window => "window",
            Backend::Terminal => "terminal",
            Backend::Export => "export",
        }
    }

    /// Parse a backend name as used in config files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "window" => Some(Backend::Window),
            "terminal" | "term" => Some(Backend::Terminal),
            "export" | "headless" => Some(Backend::Export),
            _ => None,
        }
    }

    /// Whether this backend is compiled into the current build.
    pub fn is_available(&self) -> bool {
        match self {
            Backend::Window => cfg!(feature = "window"),
            Backend::Terminal | Backend::Export => true,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a finished frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Frames presented
    pub frames: u64,
    /// True if the backend asked to quit (as opposed to shutdown or frame limit)
    pub quit_by_backend: bool,
}

/// Drive `presenter` with frames from `render` until something stops it.
///
/// The loop stops when `shutdown` is requested, when `max_frames` frames
/// have been presented, or when the presenter returns [`Presented::Quit`].
/// Any error aborts the loop immediately. A presenter that does not own a
/// loop returns at once without rendering.
pub fn run_frames<R, P>(
    render: &mut R,
    presenter: &mut P,
    shutdown: &Shutdown,
    max_frames: Option<u64>,
) -> ConsoleResult<RunSummary>
where
    R: Render + ?Sized,
    P: Presenter + ?Sized,
{
    let mut summary = RunSummary::default();

    if !presenter.owns_loop() {
        log::info!("{} backend owns no frame loop", presenter.name());
        return Ok(summary);
    }

    log::info!("starting {} frame loop", presenter.name());

    loop {
        if shutdown.is_requested() {
            log::info!("shutdown requested after {} frames", summary.frames);
            break;
        }
        if max_frames.is_some_and(|max| summary.frames >= max) {
            break;
        }

        let dt = presenter.next_delta();
        let canvas = render.render(dt);
        let presented = presenter.present(&canvas)?;
        summary.frames += 1;

        if presented == Presented::Quit {
            summary.quit_by_backend = true;
            break;
        }
    }

    presenter.finish()?;
    log::info!("{} frame loop stopped after {} frames", presenter.name(), summary.frames);
    Ok(summary)
}
