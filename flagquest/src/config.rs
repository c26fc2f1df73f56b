use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use flagquest_core::REVEAL_WINDOW;

/// Optional user configuration, read from
/// `<config_dir>/flagquest/config.toml` when present.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding countries.json and flags.json
    pub data_dir: PathBuf,
    /// Reveal window in milliseconds
    pub reveal_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets"),
            reveal_ms: REVEAL_WINDOW.as_millis() as u64,
        }
    }
}

impl Config {
    pub fn reveal_window(&self) -> Duration {
        Duration::from_millis(self.reveal_ms)
    }
}

/// A missing file yields the defaults; a malformed one is an error
pub fn load() -> io::Result<Config> {
    let Some(dir) = dirs::config_dir() else {
        return Ok(Config::default());
    };
    let path = dir.join("flagquest").join("config.toml");
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)?;
    let config =
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(config)
}
