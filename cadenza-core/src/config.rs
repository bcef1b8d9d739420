use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::observer::{CatalogObserver, NoopObserver, TracingObserver};

/// What `ensure_authorized` does after a permission request succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PostAuthorization {
    /// Issue the query straight away, trusting the request's result. If the
    /// store still reports no access, its own query answers with the
    /// not-found sentinel.
    #[default]
    Proceed,
    /// Re-read the store status and fail with `Unauthorized(current)` unless
    /// it now reports access.
    Verify,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthorizationConfig {
    pub after_request: PostAuthorization,
    /// Join concurrent permission requests into one store prompt.
    pub coalesce_requests: bool,
}

impl Default for AuthorizationConfig {
    fn default() -> Self {
        Self {
            after_request: PostAuthorization::Proceed,
            coalesce_requests: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Install [`TracingObserver`] instead of [`NoopObserver`].
    pub trace: bool,
}

/// Environment variable naming a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "CADENZA_CONFIG_PATH";
/// Environment variable carrying the config as inline JSON.
pub const CONFIG_JSON_VAR: &str = "CADENZA_CONFIG_JSON";

/// Working-directory files checked when neither variable is set.
const DEFAULT_FILES: [&str; 2] = ["cadenza.toml", "config/cadenza.toml"];

/// Where a [`CatalogConfig`] comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline(String),
    File(PathBuf),
}

impl ConfigSource {
    /// First source present, in order: `$CADENZA_CONFIG_PATH`,
    /// `$CADENZA_CONFIG_JSON`, `cadenza.toml`, `config/cadenza.toml`.
    /// Blank variables count as unset.
    pub fn locate() -> Self {
        if let Some(path) = non_blank_var(CONFIG_PATH_VAR) {
            return ConfigSource::EnvPath(PathBuf::from(path));
        }
        if let Some(raw) = non_blank_var(CONFIG_JSON_VAR) {
            return ConfigSource::EnvInline(raw);
        }
        DEFAULT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.is_file())
            .map_or(ConfigSource::Default, ConfigSource::File)
    }

    /// Read the configuration this source points at.
    pub fn load(&self) -> anyhow::Result<CatalogConfig> {
        match self {
            ConfigSource::Default => Ok(CatalogConfig::default()),
            ConfigSource::EnvPath(path) | ConfigSource::File(path) => {
                CatalogConfig::load_from_file(path)
            }
            ConfigSource::EnvInline(raw) => CatalogConfig::parse_json(raw)
                .with_context(|| format!("invalid {CONFIG_JSON_VAR}")),
        }
    }
}

fn non_blank_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Encoding of a config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Extension decides; without a known one a leading `{` means JSON.
    fn detect(path: Option<&Path>, contents: &str) -> Self {
        match path.and_then(Path::extension).and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            Some("toml") => ConfigFormat::Toml,
            _ if contents.trim_start().starts_with('{') => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }

    fn parse(self, contents: &str) -> anyhow::Result<CatalogConfig> {
        Ok(match self {
            ConfigFormat::Toml => toml::from_str(contents)?,
            ConfigFormat::Json => serde_json::from_str(contents)?,
        })
    }
}

/// Top-level settings for a [`crate::MediaLibrary`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub authorization: AuthorizationConfig,
    pub observability: ObservabilityConfig,
}

impl CatalogConfig {
    /// Load from the first source [`ConfigSource::locate`] finds.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        let source = ConfigSource::locate();
        let config = source.load()?;
        Ok((config, source))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read catalog config {}", path.display())
        })?;
        ConfigFormat::detect(Some(path), &contents)
            .parse(&contents)
            .with_context(|| {
                format!("invalid catalog config {}", path.display())
            })
    }

    /// Parse a document of either encoding; `origin` names it in errors.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        ConfigFormat::detect(None, contents)
            .parse(contents)
            .with_context(|| format!("invalid catalog config {origin}"))
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        ConfigFormat::Json.parse(raw)
    }

    /// Observer selected by `observability.trace`.
    pub fn observer(&self) -> Arc<dyn CatalogObserver> {
        if self.observability.trace {
            Arc::new(TracingObserver)
        } else {
            Arc::new(NoopObserver)
        }
    }
}
