//! Shared configuration for Studyhall clients.
//!
//! Two separate files live under the platform config directory:
//!
//! - `config.toml` — connection settings (API base URL, timeout,
//!   download directory), loaded through figment so `STUDYHALL_`
//!   environment variables override the file.
//! - `prefs.toml` — persisted UI preferences, currently the theme.
//!   This is the durable client storage the theme store writes through;
//!   it is saved directly (no env merging) because the client itself
//!   owns it.
//!
//! The original deployment hardcoded two different API hosts in the
//! client; `api_base` replaces both with one configurable value.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use studyhall_core::ThemePreference;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Connection config ───────────────────────────────────────────────

fn default_api_base() -> String {
    "http://localhost:5000/api".into()
}

fn default_timeout() -> u64 {
    30
}

/// Top-level TOML configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// API root including the `/api` segment.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Where downloaded resources land. Defaults to the platform
    /// download directory when unset.
    #[serde(default)]
    pub downloads_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout: default_timeout(),
            downloads_dir: None,
        }
    }
}

impl Config {
    /// Parse and validate the API base URL.
    pub fn api_base_url(&self) -> Result<url::Url, ConfigError> {
        self.api_base
            .parse()
            .map_err(|_| ConfigError::Validation {
                field: "api_base".into(),
                reason: format!("invalid URL: {}", self.api_base),
            })
    }

    /// Resolve the downloads directory, falling back to the platform's.
    pub fn resolve_downloads_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.downloads_dir {
            return dir.clone();
        }
        directories::UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

// ── Paths ───────────────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dir().join("config.toml")
}

/// Resolve the preferences file path.
pub fn prefs_path() -> PathBuf {
    project_dir().join("prefs.toml")
}

fn project_dir() -> PathBuf {
    ProjectDirs::from("com", "studyhall", "studyhall").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("studyhall");
            p
        },
        |dirs| dirs.config_dir().to_path_buf(),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from an explicit path (file + `STUDYHALL_` env vars).
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("STUDYHALL_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning defaults if the file doesn't exist or fails.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Preferences ─────────────────────────────────────────────────────

/// Persisted UI preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Preferences {
    /// Display theme, applied on startup.
    #[serde(default)]
    pub theme: ThemePreference,
}

/// Load preferences from the canonical path; missing or unreadable
/// files fall back to defaults (theme `light`).
pub fn load_prefs() -> Preferences {
    load_prefs_from(&prefs_path())
}

/// Load preferences from an explicit path.
pub fn load_prefs_from(path: &Path) -> Preferences {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|raw| toml::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Persist preferences to the canonical path.
pub fn save_prefs(prefs: &Preferences) -> Result<(), ConfigError> {
    save_prefs_to(&prefs_path(), prefs)
}

/// Persist preferences to an explicit path, creating parent directories.
pub fn save_prefs_to(path: &Path, prefs: &Preferences) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(prefs)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_local_api() {
        let config = Config::default();
        assert_eq!(config.api_base, "http://localhost:5000/api");
        assert_eq!(config.timeout, 30);
        assert!(config.api_base_url().is_ok());
    }

    #[test]
    fn config_file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_base = \"http://school.example:8080/api\"\n")
            .expect("write config");

        let config = load_config_from(&path).expect("load");
        assert_eq!(config.api_base, "http://school.example:8080/api");
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn theme_preference_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.toml");

        let prefs = Preferences {
            theme: ThemePreference::Dark,
        };
        save_prefs_to(&path, &prefs).expect("save");

        assert_eq!(load_prefs_from(&path), prefs);
    }

    #[test]
    fn missing_prefs_default_to_light() {
        let dir = tempfile::tempdir().expect("tempdir");
        let prefs = load_prefs_from(&dir.path().join("nope.toml"));
        assert_eq!(prefs.theme, ThemePreference::Light);
    }

    #[test]
    fn invalid_api_base_is_a_validation_error() {
        let config = Config {
            api_base: "not a url".into(),
            ..Config::default()
        };
        assert!(matches!(
            config.api_base_url(),
            Err(ConfigError::Validation { .. })
        ));
    }
}
