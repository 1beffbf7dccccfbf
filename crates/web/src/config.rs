// =============================================================================
// CornerInch Web - Site Configuration
// =============================================================================
// Table of Contents:
// 1. Defaults
// 2. Environment & Delivery Mode
// 3. Site Config
// =============================================================================
// Everything here is fixed at build time via `option_env!`; the page has no
// runtime configuration surface.
// =============================================================================

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use thiserror::Error;

use crate::countdown::CountdownTarget;

// -----------------------------------------------------------------------------
// 1. Defaults
// -----------------------------------------------------------------------------

/// 11:11 AM IST on Feb 19, 2026.
pub const DEFAULT_LAUNCH_AT: &str = "2026-02-19T11:11:00+05:30";

/// `DEFAULT_LAUNCH_AT` as a Unix timestamp.
const DEFAULT_LAUNCH_UNIX_SECS: i64 = 1_771_479_660;

/// IST, the offset `DEFAULT_LAUNCH_AT` is written in.
const DEFAULT_LAUNCH_OFFSET_SECS: i32 = 19_800;

/// Google Apps Script collector the signup forms post to.
pub const DEFAULT_SIGNUP_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbycZUQxZbEuAqnkClGx2HFCqVvZpvd07G-hNLATgr9ECjvNbblL0B4DQXbgisoTOqsa/exec";

pub const TICK_MS: u32 = 1_000;
pub const TOAST_LIFETIME_MS: u32 = 4_000;
pub const TOAST_LIMIT: usize = 3;

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid launch instant {value:?}: {reason}")]
    InvalidLaunchAt { value: String, reason: String },

    #[error("Unknown signup delivery mode {0:?} (expected \"opaque\" or \"confirmed\")")]
    InvalidDelivery(String),

    #[error("Signup endpoint is empty")]
    EmptyEndpoint,
}

// -----------------------------------------------------------------------------
// 2. Environment & Delivery Mode
// -----------------------------------------------------------------------------

/// Build environment, from the `ENVIRONMENT` variable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// The environment this binary was built for.
    pub fn current() -> Self {
        Self::from_name(option_env!("ENVIRONMENT"))
    }

    /// Anything other than "development" is treated as production.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("development") => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn log_level(&self) -> log::Level {
        match self {
            Environment::Development => log::Level::Debug,
            Environment::Production => log::Level::Info,
        }
    }
}

/// How signup requests are delivered to the collector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeliveryMode {
    /// `no-cors` fetch. The response is unreadable, so every attempt is
    /// reported to the user as a success.
    #[default]
    Opaque,
    /// Regular CORS fetch. Success only on a 2xx status.
    Confirmed,
}

impl FromStr for DeliveryMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "opaque" => Ok(DeliveryMode::Opaque),
            "confirmed" => Ok(DeliveryMode::Confirmed),
            _ => Err(ConfigError::InvalidDelivery(s.to_string())),
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Site Config
// -----------------------------------------------------------------------------

/// Resolved site configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub environment: Environment,
    pub launch: CountdownTarget,
    pub signup_endpoint: String,
    pub delivery: DeliveryMode,
    pub tick_ms: u32,
    pub toast_lifetime_ms: u32,
    pub toast_limit: usize,
}

impl SiteConfig {
    /// Read the configuration baked in at build time.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("ENVIRONMENT"),
            option_env!("CORNERINCH_LAUNCH_AT"),
            option_env!("CORNERINCH_SIGNUP_ENDPOINT"),
            option_env!("CORNERINCH_SIGNUP_DELIVERY"),
        )
    }

    /// Build a config from optional overrides; `None` keeps the default.
    pub fn from_values(
        environment: Option<&str>,
        launch_at: Option<&str>,
        signup_endpoint: Option<&str>,
        delivery: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self {
            environment: Environment::from_name(environment),
            ..Self::default()
        };

        if let Some(value) = launch_at {
            let at = DateTime::parse_from_rfc3339(value.trim()).map_err(|e| {
                ConfigError::InvalidLaunchAt {
                    value: value.to_string(),
                    reason: e.to_string(),
                }
            })?;
            config.launch = CountdownTarget::new(at);
        }

        if let Some(endpoint) = signup_endpoint {
            let endpoint = endpoint.trim();
            if endpoint.is_empty() {
                return Err(ConfigError::EmptyEndpoint);
            }
            config.signup_endpoint = endpoint.to_string();
        }

        if let Some(mode) = delivery {
            config.delivery = mode.parse()?;
        }

        Ok(config)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let launch = DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(DEFAULT_LAUNCH_UNIX_SECS);
        let launch = match FixedOffset::east_opt(DEFAULT_LAUNCH_OFFSET_SECS) {
            Some(ist) => launch.with_timezone(&ist),
            None => launch.fixed_offset(),
        };

        Self {
            environment: Environment::Production,
            launch: CountdownTarget::new(launch),
            signup_endpoint: DEFAULT_SIGNUP_ENDPOINT.to_string(),
            delivery: DeliveryMode::Opaque,
            tick_ms: TICK_MS,
            toast_lifetime_ms: TOAST_LIFETIME_MS,
            toast_limit: TOAST_LIMIT,
        }
    }
}
