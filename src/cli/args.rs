//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::BackendArg;
use crate::config::Config;
use crate::presenter::Backend;

/// Virtual console: show a rendered pixel buffer in a window or as ASCII art
#[derive(Parser, Debug)]
#[command(name = "vc")]
#[command(version, about = "Present rendered frames in a window or a terminal", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Presentation backend (default: from config, else terminal)
    #[arg(long, short)]
    pub backend: Option<BackendArg>,

    /// Canvas width in pixels
    #[arg(long)]
    pub width: Option<usize>,

    /// Canvas height in pixels
    #[arg(long)]
    pub height: Option<usize>,

    /// Pixel block size averaged into one terminal character
    #[arg(long)]
    pub scale: Option<usize>,

    /// Frames per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Stop after this many frames
    #[arg(long)]
    pub frames: Option<u64>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

impl Args {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(backend) = self.backend {
            config.console.backend = Backend::from(backend).name().to_string();
        }
        if let Some(width) = self.width {
            config.console.width = width;
        }
        if let Some(height) = self.height {
            config.console.height = height;
        }
        if let Some(scale) = self.scale {
            config.console.scale = scale;
        }
        if let Some(fps) = self.fps {
            config.terminal.fps = fps;
            config.window.fps = fps;
        }
    }
}
