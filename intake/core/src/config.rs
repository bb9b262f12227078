//! Configuration
//!
//! Centralized configuration for the intake engine, loaded from a TOML file
//! at `~/.config/hacker-house/intake.toml` with environment overrides.
//!
//! # Configuration Priority
//!
//! Values are resolved with the following priority (highest first):
//! 1. Environment variables
//! 2. TOML configuration file
//! 3. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [submit]
//! webhook_url = "https://script.google.com/macros/s/XXXX/exec"
//! contact = "crew@hackerhouse.dev"
//!
//! [timing]
//! char_delay_ms = 30
//! char_delay_compact_ms = 10
//!
//! [display]
//! compact = false
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profile::DisplayProfile;

/// Environment variable forcing the display profile (`1`/`true` = compact)
pub const COMPACT_ENV: &str = "INTAKE_COMPACT";
/// Environment variable overriding the fallback contact address
pub const CONTACT_ENV: &str = "INTAKE_CONTACT";
/// Environment variable overriding the per-character reveal delay (ms)
pub const CHAR_DELAY_ENV: &str = "INTAKE_CHAR_DELAY_MS";
/// Environment variable pointing at an explicit config file
pub const CONFIG_PATH_ENV: &str = "INTAKE_CONFIG";

/// Fallback contact shown when a submission fails
pub const DEFAULT_CONTACT: &str = "crew@hackerhouse.dev";

const DEFAULT_CHAR_DELAY_MS: u64 = 30;
const DEFAULT_CHAR_DELAY_COMPACT_MS: u64 = 10;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Submission section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitToml {
    /// Webhook endpoint receiving the answer sheet
    pub webhook_url: Option<String>,
    /// Fallback contact address shown on submission failure
    pub contact: Option<String>,
}

/// Timing section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingToml {
    /// Per-character reveal delay in milliseconds (full profile)
    pub char_delay_ms: Option<u64>,
    /// Per-character reveal delay in milliseconds (compact profile)
    pub char_delay_compact_ms: Option<u64>,
}

/// Display section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayToml {
    /// Force the compact profile on or off, skipping width detection
    pub compact: Option<bool>,
}

/// The TOML configuration file
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeToml {
    /// Submission settings
    pub submit: SubmitToml,
    /// Timing settings
    pub timing: TimingToml,
    /// Display settings
    pub display: DisplayToml,
}

/// Environment-derived overrides, applied on top of the file
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Webhook endpoint override
    pub webhook_url: Option<String>,
    /// Fallback contact override
    pub contact: Option<String>,
    /// Forced profile override
    pub compact: Option<bool>,
    /// Per-character delay override (ms, full profile)
    pub char_delay_ms: Option<u64>,
}

impl ConfigOverrides {
    /// Read overrides from the environment
    pub fn from_env() -> Self {
        Self {
            webhook_url: non_empty_env(crate::backend::WEBHOOK_URL_ENV),
            contact: non_empty_env(CONTACT_ENV),
            compact: std::env::var(COMPACT_ENV)
                .ok()
                .map(|v| v == "1" || v.to_lowercase() == "true"),
            char_delay_ms: std::env::var(CHAR_DELAY_ENV)
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// How scripted pauses play out
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pacing {
    /// Real-time delays, profile-scaled
    #[default]
    Animated,
    /// Every pause collapses to zero (tests, headless runs)
    Instant,
}

/// Resolved engine configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Webhook endpoint; `None` surfaces as a submission error
    pub webhook_url: Option<String>,
    /// Fallback contact shown on submission failure
    pub contact: String,
    /// Per-character reveal delay, full profile
    pub char_delay: Duration,
    /// Per-character reveal delay, compact profile
    pub char_delay_compact: Duration,
    /// Display profile resolved for this session
    pub profile: DisplayProfile,
    /// Whether scripted pauses run in real time
    pub pacing: Pacing,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            contact: DEFAULT_CONTACT.to_string(),
            char_delay: Duration::from_millis(DEFAULT_CHAR_DELAY_MS),
            char_delay_compact: Duration::from_millis(DEFAULT_CHAR_DELAY_COMPACT_MS),
            profile: DisplayProfile::Full,
            pacing: Pacing::Animated,
        }
    }
}

impl EngineConfig {
    /// Resolve configuration from a parsed file, overrides and the
    /// detected terminal width
    pub fn resolve(
        file: &IntakeToml,
        overrides: ConfigOverrides,
        detected_width: Option<u16>,
    ) -> Self {
        let compact = overrides.compact.or(file.display.compact);
        let profile = match compact {
            Some(true) => DisplayProfile::Compact,
            Some(false) => DisplayProfile::Full,
            None => detected_width
                .map(DisplayProfile::detect)
                .unwrap_or_default(),
        };

        Self {
            webhook_url: overrides
                .webhook_url
                .or_else(|| file.submit.webhook_url.clone()),
            contact: overrides
                .contact
                .or_else(|| file.submit.contact.clone())
                .unwrap_or_else(|| DEFAULT_CONTACT.to_string()),
            char_delay: Duration::from_millis(
                overrides
                    .char_delay_ms
                    .or(file.timing.char_delay_ms)
                    .unwrap_or(DEFAULT_CHAR_DELAY_MS),
            ),
            char_delay_compact: Duration::from_millis(
                file.timing
                    .char_delay_compact_ms
                    .unwrap_or(DEFAULT_CHAR_DELAY_COMPACT_MS),
            ),
            profile,
            pacing: Pacing::default(),
        }
    }

    /// Load configuration: file (env-named or XDG default, missing is fine)
    /// plus environment overrides
    pub fn load(detected_width: Option<u16>) -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .ok()
            .map(PathBuf::from)
            .or_else(default_config_path);

        let file = match path {
            Some(ref p) if p.exists() => load_config_file(p)?,
            _ => IntakeToml::default(),
        };

        Ok(Self::resolve(&file, ConfigOverrides::from_env(), detected_width))
    }

    /// The effective per-character delay under the resolved profile
    pub fn effective_char_delay(&self) -> Duration {
        if self.pacing == Pacing::Instant {
            return Duration::ZERO;
        }
        match self.profile {
            DisplayProfile::Full => self.char_delay,
            DisplayProfile::Compact => self.char_delay_compact,
        }
    }

    /// Scale a scripted pause for the resolved profile and pacing
    pub fn scaled(&self, delay: Duration) -> Duration {
        match self.pacing {
            Pacing::Animated => self.profile.scale(delay),
            Pacing::Instant => Duration::ZERO,
        }
    }

    /// A zero-delay configuration for tests and headless runs
    pub fn instant() -> Self {
        Self {
            pacing: Pacing::Instant,
            ..Self::default()
        }
    }
}

/// Default config file path (XDG base directory compliant)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hacker-house").join("intake.toml"))
}

/// Load and parse a TOML config file
pub fn load_config_file(path: &Path) -> Result<IntakeToml, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}
