//! vconsole library crate.
//!
//! A small virtual console: an external routine renders an RGBA canvas every
//! frame and a presenter shows it, either in a native window, as ASCII art on
//! a terminal, or not at all for hosts that drive rendering themselves.

pub mod ascii;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod presenter;
pub mod render;
pub mod shutdown;

pub use canvas::{Canvas, PixelBuffer, Rgba};
pub use error::{ConfigError, ConsoleError, ConsoleResult};
pub use presenter::{run_frames, Backend, Presented, Presenter, RunSummary};
pub use render::Render;
pub use shutdown::Shutdown;
