//! Configuration file resolution for the `zoom-recordings` CLI.
//!
//! The config file is a small TOML document:
//!
//! ```toml
//! access_token = "eyJ..."
//! endpoint = "https://api.zoom.us/v2"   # optional
//! ```
//!
//! # Resolution Algorithm
//!
//! 1. Explicit `--config` path (must exist)
//! 2. `ZOOM_RECORDINGS_CONFIG` environment variable
//! 3. `zoom-recordings.toml` in the current directory
//! 4. `zoom-recordings.toml` in parent directories (walk up to filesystem root)
//! 5. XDG config directory (`~/.config/zoom-recordings/config.toml`)
//!
//! A missing config is not an error; the token can also come from
//! `ZOOM_ACCESS_TOKEN`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use zoom_recordings::Credentials;

pub const CONFIG_FILE_NAME: &str = "zoom-recordings.toml";
pub const CONFIG_PATH_ENV: &str = "ZOOM_RECORDINGS_CONFIG";
pub const ACCESS_TOKEN_ENV: &str = "ZOOM_ACCESS_TOKEN";

/// Errors that can occur during configuration resolution or loading.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// I/O error when reading a config file.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error when a config file is malformed.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Config file named explicitly but absent.
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// Neither the config file nor the environment provided a token.
    #[error("no access token configured (set ZOOM_ACCESS_TOKEN or access_token in zoom-recordings.toml)")]
    MissingAccessToken,
}

/// Contents of `zoom-recordings.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl Config {
    /// Loads and parses a config file from the given path.
    ///
    /// # Errors
    ///
    /// Returns `Err(ConfigError)` if:
    /// - The file does not exist (returns `NotFound` variant)
    /// - The file cannot be read
    /// - The file cannot be parsed as TOML
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Finds and loads the config using the resolution algorithm described in
    /// the module docs.
    ///
    /// # Errors
    ///
    /// Returns `Err(ConfigError)` if an explicit path does not exist, or if a
    /// found file cannot be read or parsed.
    pub fn resolve(explicit: Option<&Path>) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        if let Some(path) = explicit {
            return Ok(Some((path.to_path_buf(), Self::load(path)?)));
        }

        let env_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        let current = std::env::current_dir().map_err(|source| ConfigError::Io {
            path: PathBuf::from("."),
            source,
        })?;
        let xdg_path = dirs::config_dir().map(|dir| dir.join("zoom-recordings/config.toml"));

        resolve_from(env_path.as_deref(), &current, xdg_path.as_deref())
    }

    /// Merges this config with environment and flag overrides into client
    /// credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAccessToken`] if no non-empty token is
    /// available from any source.
    pub fn into_credentials(
        self,
        token_override: Option<String>,
        endpoint_override: Option<String>,
    ) -> Result<Credentials, ConfigError> {
        let access_token = token_override
            .or(self.access_token)
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingAccessToken)?;

        Ok(Credentials {
            access_token,
            endpoint: endpoint_override.or(self.endpoint),
        })
    }
}

/// Resolution steps 2-5 with every ambient input passed in.
fn resolve_from(
    env_path: Option<&Path>,
    start_dir: &Path,
    xdg_path: Option<&Path>,
) -> Result<Option<(PathBuf, Config)>, ConfigError> {
    if let Some(path) = env_path
        && path.exists()
    {
        return Ok(Some((path.to_path_buf(), Config::load(path)?)));
    }

    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.exists() {
            let config = Config::load(&candidate)?;
            return Ok(Some((candidate, config)));
        }
    }

    if let Some(path) = xdg_path
        && path.exists()
    {
        return Ok(Some((path.to_path_buf(), Config::load(path)?)));
    }

    Ok(None)
}
