//! CLI enum types.

use clap::ValueEnum;

use crate::presenter::Backend;

/// Presentation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BackendArg {
    /// Native window showing raw pixels
    Window,
    /// ASCII art on stdout
    #[default]
    Terminal,
    /// Headless, no frame loop
    Export,
}

impl From<BackendArg> for Backend {
    fn from(b: BackendArg) -> Self {
        match b {
            BackendArg::Window => Backend::Window,
            BackendArg::Terminal => Backend::Terminal,
            BackendArg::Export => Backend::Export,
        }
    }
}
