use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        if *edit_config {
            edit(editor.as_deref())?;
        }
    }

    Ok(())
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open the configuration file, trying the requested editor first and the
/// platform default second.
fn edit(requested: Option<&str>) -> AppResult<()> {
    let path = Config::config_file();
    if !path.exists() {
        return Err(AppError::Config(format!(
            "{} does not exist, run `rtimekeeper init` first",
            path.display()
        )));
    }

    let fallback = default_editor();
    let first = requested.map(str::to_string).unwrap_or_else(|| fallback.clone());

    for editor in [first.as_str(), fallback.as_str()] {
        match Command::new(editor).arg(&path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{}'", editor));
                return Ok(());
            }
            _ => warning(format!("Editor '{}' not available", editor)),
        }
    }

    Err(AppError::Config("no usable editor found".to_string()))
}
