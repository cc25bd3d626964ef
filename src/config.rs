//! CLI configuration file (`~/.gh-disco/config.toml`)

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{DiscoError, DiscoResult};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Keys accepted by `config set` / `config get`.
pub const KEYS: [&str; 5] = ["auth_token", "api_url", "org", "saml_provider", "timeout_secs"];

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub auth_token: Option<String>,
    pub api_url: Option<String>,
    pub org: Option<String>,
    pub saml_provider: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load the file at `path`, or an empty config when it does not exist.
    pub fn load_from(path: &Path) -> DiscoResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| DiscoError::Config(format!("failed to read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| DiscoError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Write the file readable by its owner only; it may hold the token.
    pub fn save_to(&self, path: &Path) -> DiscoResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| DiscoError::Config(e.to_string()))?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| DiscoError::Config(e.to_string()))?;
        write_private(path, &content)
            .map_err(|e| DiscoError::Config(format!("failed to write {}: {e}", path.display())))
    }

    pub fn config_path(profile: Option<&str>) -> DiscoResult<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DiscoError::Config("cannot find home directory".to_string()))?;
        let filename = match profile {
            Some(p) => format!("config.{p}.toml"),
            None => "config.toml".to_string(),
        };
        Ok(home.join(".gh-disco").join(filename))
    }

    pub fn set(&mut self, key: &str, value: &str) -> DiscoResult<()> {
        let value = value.to_string();
        match key {
            "auth_token" => self.auth_token = Some(value),
            "api_url" => self.api_url = Some(value),
            "org" => self.org = Some(value),
            "saml_provider" => self.saml_provider = Some(value),
            "timeout_secs" => {
                let secs = value
                    .parse()
                    .map_err(|_| DiscoError::Config(format!("timeout_secs must be a number, got {value}")))?;
                self.timeout_secs = Some(secs);
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Raw value for `key`; the token is not masked here.
    pub fn get(&self, key: &str) -> DiscoResult<Option<String>> {
        Ok(match key {
            "auth_token" => self.auth_token.clone(),
            "api_url" => self.api_url.clone(),
            "org" => self.org.clone(),
            "saml_provider" => self.saml_provider.clone(),
            "timeout_secs" => self.timeout_secs.map(|s| s.to_string()),
            _ => return Err(unknown_key(key)),
        })
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

#[cfg(unix)]
fn write_private(path: &Path, content: &str) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies on creation
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(content.as_bytes())
}

#[cfg(not(unix))]
fn write_private(path: &Path, content: &str) -> io::Result<()> {
    fs::write(path, content)
}

fn unknown_key(key: &str) -> DiscoError {
    DiscoError::Config(format!("unknown config key: {key} (expected one of {})", KEYS.join(", ")))
}

/// Show only the first few characters of a secret.
pub fn mask(secret: &str) -> String {
    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}****")
}
