//! Traversal configuration

use std::env::{self, VarError};

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_DEPTH, MAX_DEPTH_ENV_VAR, UNBOUNDED_DEPTH_VALUES};
use crate::error::{Error, Result};

/// Limits applied while a traversal runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Deepest level whose values may be visited, the root being level 0
    ///
    /// `None` disables the limit.
    pub max_depth: Option<usize>,
}

impl Default for TraversalConfig {
    fn default() -> Self { Self::new() }
}

impl TraversalConfig {
    /// Configuration with the default depth limit
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }

    /// Configuration without a depth limit
    ///
    /// A subject deep enough to exhaust the stack will then overflow it.
    #[must_use]
    pub const fn unbounded() -> Self { Self { max_depth: None } }

    /// Configuration with a custom depth limit
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    /// Build the configuration from the environment
    ///
    /// Priority order:
    /// 1. `SYB_MAX_DEPTH` environment variable: a depth, or `none` / `unbounded`
    /// 2. Default depth limit
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when the variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        match env::var(MAX_DEPTH_ENV_VAR) {
            Ok(value) => Self::from_env_value(&value),
            Err(VarError::NotPresent) => Ok(Self::new()),
            Err(VarError::NotUnicode(raw)) => Err(Report::new(Error::invalid(
                MAX_DEPTH_ENV_VAR,
                format!("{} is not valid unicode", raw.to_string_lossy()),
            ))),
        }
    }

    fn from_env_value(value: &str) -> Result<Self> {
        let value = value.trim();

        if UNBOUNDED_DEPTH_VALUES
            .iter()
            .any(|unbounded| value.eq_ignore_ascii_case(unbounded))
        {
            return Ok(Self::unbounded());
        }

        value
            .parse::<usize>()
            .map(Self::with_max_depth)
            .map_err(|err| {
                Report::new(Error::invalid(
                    MAX_DEPTH_ENV_VAR,
                    format!("'{value}' is not a depth ({err})"),
                ))
            })
    }
}
