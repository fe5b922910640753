//! Subcommand handlers for config actions.

use std::path::Path;

use super::args::ConfigAction;
use crate::config::{self, Config};
use crate::error::ConfigError;

/// Render the effective configuration as printed by `config show`.
pub fn show_config(config: &Config, path: &Path) -> String {
    let state = if path.exists() { "exists" } else { "not found" };
    format!(
        "Current configuration:\n  \
         Backend: {}\n  \
         Canvas: {}x{}\n  \
         Scale: {}\n  \
         Terminal fps: {}\n  \
         Window: \"{}\" at {} fps\n  \
         Log level: {}\n\n\
         Config file: {} ({})",
        config.console.backend,
        config.console.width,
        config.console.height,
        config.console.scale,
        config.terminal.fps,
        config.window.title,
        config.window.fps,
        config.log.level.as_deref().unwrap_or("warn"),
        path.display(),
        state
    )
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config: &Config, path: &Path) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Show => {
            println!("{}", show_config(config, path));
        }
        ConfigAction::Init => {
            config::write_default(path)?;
            println!("Created config file: {}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_config_lists_values() {
        let config = Config::default();
        let text = show_config(&config, Path::new("/nonexistent/vconsole.toml"));
        assert!(text.contains("Backend: terminal"));
        assert!(text.contains("Canvas: 800x600"));
        assert!(text.contains("Scale: 20"));
        assert!(text.contains("(not found)"));
    }
}
