//! Error types for the simulation core and its configuration
//!
//! The physics itself has a single failure mode (scalar division by zero).
//! Degenerate geometry is handled by fallback policy, never by erroring.

use thiserror::Error;

use crate::sim::Vector2;

/// Raised when a vector is divided by exactly zero
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("cannot divide vector {vector} by zero")]
pub struct DivisionError {
    /// The dividend that was rejected
    pub vector: Vector2,
}

/// Failure while loading or validating a [`PhysicsConfig`](crate::config::PhysicsConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A tunable is outside the range the physics can handle
    #[error("config value '{name}' = {value} is invalid (expected {expected})")]
    InvalidValue {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn invalid(name: &'static str, value: f64, expected: &'static str) -> Self {
        Self::InvalidValue {
            name,
            value,
            expected,
        }
    }
}

/// Convenience alias for config loading results
pub type ConfigResult<T> = Result<T, ConfigError>;
