//! Store configuration module.
//!
//! This module provides configuration loading for a `TripleStore` from
//! environment variables.
//!
//! # Environment Variables
//!
//! - `TRIPLESTORE_WILDCARD`: Initial wildcard placeholder (default: `*`)
//! - `TRIPLESTORE_FIELD_WIDTH`: Column width used when rendering the store (default: `8`)
//!
//! # Invariants
//!
//! - `wildcard` is never empty
//! - `field_width` is always at least 1

use crate::record::DEFAULT_FIELD_WIDTH;

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Placeholder that marks a query or removal field as wild.
    pub wildcard: String,
    /// Width each field is right-justified to in the store dump.
    pub field_width: usize,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            wildcard: Self::DEFAULT_WILDCARD.to_owned(),
            field_width: DEFAULT_FIELD_WIDTH,
        }
    }
}

impl StoreConfig {
    /// Default wildcard placeholder.
    pub const DEFAULT_WILDCARD: &'static str = "*";
    const WILDCARD_VAR: &'static str = "TRIPLESTORE_WILDCARD";
    const FIELD_WIDTH_VAR: &'static str = "TRIPLESTORE_FIELD_WIDTH";

    /// Set the wildcard placeholder.
    #[must_use]
    pub fn with_wildcard(mut self, wildcard: impl Into<String>) -> Self {
        self.wildcard = wildcard.into();
        self
    }

    /// Set the rendering field width.
    #[must_use]
    pub const fn with_field_width(mut self, field_width: usize) -> Self {
        self.field_width = field_width;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `TRIPLESTORE_WILDCARD` is set but empty
    /// - `TRIPLESTORE_FIELD_WIDTH` is set but not a positive integer
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let wildcard = Self::load_wildcard(&lookup)?;
        let field_width = Self::load_field_width(&lookup)?;
        Ok(Self {
            wildcard,
            field_width,
        })
    }

    fn load_wildcard<F>(lookup: &F) -> Result<String, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(Self::WILDCARD_VAR) {
            Some(value) if value.is_empty() => Err(ConfigError::InvalidValue {
                name: Self::WILDCARD_VAR.to_string(),
                message: "must not be empty".to_string(),
            }),
            Some(value) => Ok(value),
            None => Ok(Self::DEFAULT_WILDCARD.to_owned()),
        }
    }

    fn load_field_width<F>(lookup: &F) -> Result<usize, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(value) = lookup(Self::FIELD_WIDTH_VAR) else {
            return Ok(DEFAULT_FIELD_WIDTH);
        };
        match value.parse::<usize>() {
            Ok(width) if width > 0 => Ok(width),
            _ => Err(ConfigError::InvalidValue {
                name: Self::FIELD_WIDTH_VAR.to_string(),
                message: format!("'{value}' is not a positive integer"),
            }),
        }
    }
}
