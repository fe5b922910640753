use std::io;
use std::process::ExitCode;

use clap::Parser;

use vconsole::cli::{handle_config_action, Args, Command};
use vconsole::config::{self, Config};
use vconsole::demo::BouncingBall;
use vconsole::presenter::{ExportStub, TerminalPresenter};
use vconsole::{logging, run_frames, Backend, ConsoleResult, Presenter, Shutdown};

fn main() -> ExitCode {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(config::default_path);
    let mut config = match Config::load(Some(&config_path)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    args.apply_to(&mut config);

    logging::init(logging::level_filter(args.verbose, config.log.level.as_deref()));

    if let Some(Command::Config { action }) = args.command {
        return match handle_config_action(action, &config, &config_path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let backend = match config.validate().and_then(|()| config.backend()) {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(backend, &config, args.frames) {
        Ok(()) => {
            if backend == Backend::Window {
                println!("OK");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            if backend == Backend::Window {
                eprintln!("WINDOW ERROR: {}", e);
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(backend: Backend, config: &Config, frames: Option<u64>) -> ConsoleResult<()> {
    log::info!("using {} backend", backend);

    let shutdown = Shutdown::new();
    if let Err(e) = shutdown.install_ctrlc_handler() {
        log::warn!("could not set up Ctrl+C handler: {}", e);
    }

    let mut presenter = open_presenter(backend, config)?;
    let mut scene = BouncingBall::new(config.console.width, config.console.height);
    let summary = run_frames(&mut scene, &mut presenter, &shutdown, frames)?;
    log::info!("presented {} frames", summary.frames);
    Ok(())
}

fn open_presenter(backend: Backend, config: &Config) -> ConsoleResult<Box<dyn Presenter>> {
    match backend {
        Backend::Terminal => Ok(Box::new(TerminalPresenter::new(
            io::stdout(),
            config.console.scale,
            config.terminal.fps,
        ))),
        Backend::Export => Ok(Box::new(ExportStub::new())),
        Backend::Window => open_window(config),
    }
}

#[cfg(feature = "window")]
fn open_window(config: &Config) -> ConsoleResult<Box<dyn Presenter>> {
    let window = vconsole::presenter::WindowPresenter::open(
        &config.window.title,
        config.console.width,
        config.console.height,
        config.window.fps,
    )?;
    Ok(Box::new(window))
}

#[cfg(not(feature = "window"))]
fn open_window(_config: &Config) -> ConsoleResult<Box<dyn Presenter>> {
    Err(vconsole::ConsoleError::BackendUnavailable(Backend::Window.name()))
}
