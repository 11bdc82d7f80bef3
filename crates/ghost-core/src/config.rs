//! Runtime configuration for the GHOST client.
//!
//! Every "system" interaction in the client is a timed simulation; this
//! module holds the pacing knobs for those simulations plus the default
//! sound preference. Configuration is read from an optional TOML file and
//! falls back to defaults when the file is absent. Session state itself is
//! never written back to disk.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Root configuration for the client runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub boot: BootConfig,
    pub auth: AuthConfig,
    pub chat: ChatConfig,
    pub sos: SosConfig,
    /// Initial value of the sound preference held by the session store.
    pub sound_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            boot: BootConfig::default(),
            auth: AuthConfig::default(),
            chat: ChatConfig::default(),
            sos: SosConfig::default(),
            sound_enabled: true,
        }
    }
}

/// Pacing of the boot sequence printout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootConfig {
    /// Gap between consecutive boot lines, in milliseconds.
    pub line_delay_ms: u64,
    /// Hold after the last line before the interface is entered.
    pub finale_delay_ms: u64,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            line_delay_ms: 300,
            finale_delay_ms: 600,
        }
    }
}

impl BootConfig {
    pub fn line_delay(&self) -> Duration {
        Duration::from_millis(self.line_delay_ms)
    }

    pub fn finale_delay(&self) -> Duration {
        Duration::from_millis(self.finale_delay_ms)
    }
}

/// Pacing of the simulated sign-in flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// How long the fake OAuth exchange appears to take, in milliseconds.
    pub sign_in_delay_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            sign_in_delay_ms: 1500,
        }
    }
}

impl AuthConfig {
    pub fn sign_in_delay(&self) -> Duration {
        Duration::from_millis(self.sign_in_delay_ms)
    }
}

/// Pacing of the mock chat engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Simulated typing time before the assistant's reply, in milliseconds.
    pub response_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: 1500,
        }
    }
}

impl ChatConfig {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

/// Pacing of the S.O.S. capture simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SosConfig {
    /// Simulated audio/location capture window, in milliseconds.
    pub capture_delay_ms: u64,
}

impl Default for SosConfig {
    fn default() -> Self {
        Self {
            capture_delay_ms: 3000,
        }
    }
}

impl SosConfig {
    pub fn capture_delay(&self) -> Duration {
        Duration::from_millis(self.capture_delay_ms)
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Loads configuration from `path`, or from the default location when
    /// `path` is `None`. A missing file yields the defaults; a malformed
    /// file is logged and also yields the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let candidate = path
            .map(Path::to_path_buf)
            .or_else(Self::default_path)
            .filter(|p| p.exists());

        match candidate {
            Some(p) => Self::load(&p).unwrap_or_else(|e| {
                tracing::warn!("failed to load config from {:?}: {}", p, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Default config file location (`~/.config/ghost/config.toml` on Linux).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ghost").join("config.toml"))
    }

    /// A configuration with every simulated delay set to zero.
    pub fn instant() -> Self {
        Self {
            boot: BootConfig {
                line_delay_ms: 0,
                finale_delay_ms: 0,
            },
            auth: AuthConfig { sign_in_delay_ms: 0 },
            chat: ChatConfig {
                response_delay_ms: 0,
            },
            sos: SosConfig { capture_delay_ms: 0 },
            sound_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.boot.line_delay_ms, 300);
        assert_eq!(config.boot.finale_delay_ms, 600);
        assert_eq!(config.auth.sign_in_delay_ms, 1500);
        assert_eq!(config.chat.response_delay_ms, 1500);
        assert_eq!(config.sos.capture_delay_ms, 3000);
        assert!(config.sound_enabled);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "sound_enabled = false\n\n[auth]\nsign_in_delay_ms = 10"
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert!(!config.sound_enabled);
        assert_eq!(config.auth.sign_in_delay_ms, 10);
        // Untouched sections keep their defaults
        assert_eq!(config.chat.response_delay_ms, 1500);
    }

    #[test]
    fn test_load_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "boot = \"not a table\"").unwrap();

        assert!(AppConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_or_default_missing_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        let config = AppConfig::load_or_default(Some(&missing));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_instant_zeroes_every_delay() {
        let config = AppConfig::instant();
        assert_eq!(config.boot.line_delay(), Duration::ZERO);
        assert_eq!(config.auth.sign_in_delay(), Duration::ZERO);
        assert_eq!(config.chat.response_delay(), Duration::ZERO);
        assert_eq!(config.sos.capture_delay(), Duration::ZERO);
    }
}
