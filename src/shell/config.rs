use chrono::FixedOffset;
use std::net::SocketAddr;
use thiserror::Error;

use crate::shared::core::clock::SystemClock;

pub const ADDR_VAR: &str = "MAINTENANCE_LOG_ADDR";
pub const UTC_OFFSET_VAR: &str = "MAINTENANCE_LOG_UTC_OFFSET_MINUTES";
pub const RECENT_COMPLETED_LIMIT_VAR: &str = "MAINTENANCE_LOG_RECENT_COMPLETED_LIMIT";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_RECENT_COMPLETED_LIMIT: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a socket address, got '{value}'")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be a whole number of minutes within a day, got '{value}'")]
    InvalidUtcOffset { var: &'static str, value: String },

    #[error("{var} must be a non-negative integer, got '{value}'")]
    InvalidLimit { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    /// `None` follows the host's local offset.
    pub utc_offset: Option<FixedOffset>,
    pub recent_completed_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_value = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: addr_value.clone(),
            })?;

        let utc_offset = match lookup(UTC_OFFSET_VAR) {
            None => None,
            Some(value) => {
                let offset = value
                    .trim()
                    .parse::<i32>()
                    .ok()
                    .and_then(|minutes| minutes.checked_mul(60))
                    .and_then(FixedOffset::east_opt)
                    .ok_or_else(|| ConfigError::InvalidUtcOffset {
                        var: UTC_OFFSET_VAR,
                        value: value.clone(),
                    })?;
                Some(offset)
            }
        };

        let recent_completed_limit = match lookup(RECENT_COMPLETED_LIMIT_VAR) {
            None => DEFAULT_RECENT_COMPLETED_LIMIT,
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidLimit {
                    var: RECENT_COMPLETED_LIMIT_VAR,
                    value: value.clone(),
                })?,
        };

        Ok(Self {
            addr,
            utc_offset,
            recent_completed_limit,
        })
    }

    pub fn clock(&self) -> SystemClock {
        match self.utc_offset {
            Some(offset) => SystemClock::with_offset(offset),
            None => SystemClock::local(),
        }
    }
}
