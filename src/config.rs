use std::env;
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const DEFAULT_CURRENT_USER: &str = "user123";

/// Simulated round-trip delay applied before each operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl Latency {
    /// No delay at all; what tests want.
    pub fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }

    pub fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            create: delay,
            update: delay,
            delete: delay,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(300),
            create: Duration::from_millis(500),
            update: Duration::from_millis(400),
            delete: Duration::from_millis(350),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Memory,
    Sqlite,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// User id the binary acts as.
    pub current_user: String,
    pub latency: Latency,
    pub backend: Backend,
    /// Load the bundled fixture dataset on startup.
    pub seed: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            current_user: DEFAULT_CURRENT_USER.to_string(),
            latency: Latency::default(),
            backend: Backend::Memory,
            seed: true,
        }
    }
}

impl ServiceConfig {
    /// Read configuration from the process environment, after loading `.env`
    /// if one is present.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys fall back to
    /// the defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let current_user = get("REVIEWS_CURRENT_USER").unwrap_or(defaults.current_user);

        let latency = Latency {
            list: parse_delay("REVIEWS_LIST_DELAY_MS", get("REVIEWS_LIST_DELAY_MS"))?
                .unwrap_or(defaults.latency.list),
            create: parse_delay("REVIEWS_CREATE_DELAY_MS", get("REVIEWS_CREATE_DELAY_MS"))?
                .unwrap_or(defaults.latency.create),
            update: parse_delay("REVIEWS_UPDATE_DELAY_MS", get("REVIEWS_UPDATE_DELAY_MS"))?
                .unwrap_or(defaults.latency.update),
            delete: parse_delay("REVIEWS_DELETE_DELAY_MS", get("REVIEWS_DELETE_DELAY_MS"))?
                .unwrap_or(defaults.latency.delete),
        };

        let backend = match get("REVIEWS_BACKEND") {
            None => defaults.backend,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "memory" => Backend::Memory,
                "sqlite" => Backend::Sqlite,
                _ => {
                    return Err(AppError::InvalidConfig {
                        key: "REVIEWS_BACKEND",
                        value,
                    })
                }
            },
        };

        let seed = match get("REVIEWS_SEED") {
            None => defaults.seed,
            Some(value) => value
                .trim()
                .parse::<bool>()
                .map_err(|_| AppError::InvalidConfig {
                    key: "REVIEWS_SEED",
                    value,
                })?,
        };

        Ok(Self {
            current_user,
            latency,
            backend,
            seed,
        })
    }
}

fn parse_delay(key: &'static str, value: Option<String>) -> AppResult<Option<Duration>> {
    match value {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(|ms| Some(Duration::from_millis(ms)))
            .map_err(|_| AppError::InvalidConfig { key, value }),
    }
}
