//! Config commands

use std::io::Write;
use std::path::Path;

use crate::cli::ConfigCommands;
use crate::config::{mask, Config, KEYS};
use crate::error::DiscoResult;

pub fn handle<W: Write + ?Sized>(action: ConfigCommands, path: &Path, out: &mut W) -> DiscoResult<()> {
    match action {
        ConfigCommands::Init => {
            if path.exists() {
                writeln!(out, "Configuration already exists at {}", path.display())?;
            } else {
                Config::default().save_to(path)?;
                writeln!(out, "Configuration initialized at {}", path.display())?;
            }
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load_from(path)?;
            config.set(&key, &value)?;
            config.save_to(path)?;
            writeln!(out, "Set {key} successfully")?;
        }
        ConfigCommands::Get { key } => {
            let config = Config::load_from(path)?;
            writeln!(out, "{key}: {}", display_value(&key, config.get(&key)?))?;
        }
        ConfigCommands::List => {
            let config = Config::load_from(path)?;
            for key in KEYS {
                writeln!(out, "{key}: {}", display_value(key, config.get(key)?))?;
            }
        }
    }
    Ok(())
}

fn display_value(key: &str, value: Option<String>) -> String {
    match value {
        Some(v) if key == "auth_token" => mask(&v),
        Some(v) => v,
        None => "(not set)".to_string(),
    }
}
