//! Runtime environment detection
//!
//! Two process variables decide whether the process runs in production:
//! `NODE_ENV` and `VERCEL_ENV`. If either holds exactly `production` the
//! runtime is [`Environment::Production`], otherwise it is
//! [`Environment::Development`]. Missing or non-unicode values count as
//! non-production.

use serde::{Deserialize, Serialize};

/// Primary production signal
pub const NODE_ENV: &str = "NODE_ENV";

/// Secondary (deployment platform) production signal
pub const VERCEL_ENV: &str = "VERCEL_ENV";

const PRODUCTION: &str = "production";

/// Runtime classification used to pick logger defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production: JSON sink, info level
    Production,
    /// Development: console sink, debug level
    Development,
}

impl Environment {
    /// Classify the current process environment.
    ///
    /// Not cached; every call re-reads the variables.
    pub fn detect() -> Self {
        Self::detect_from(|name| std::env::var(name).ok())
    }

    /// Classify using an arbitrary variable lookup.
    pub fn detect_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_production = [NODE_ENV, VERCEL_ENV]
            .into_iter()
            .any(|name| lookup(name).is_some_and(|value| value == PRODUCTION));

        if is_production {
            Self::Production
        } else {
            Self::Development
        }
    }

    /// Whether this is [`Environment::Production`]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Default minimum level for this environment
    pub const fn default_level(self) -> crate::Level {
        match self {
            Self::Production => crate::Level::Info,
            Self::Development => crate::Level::Debug,
        }
    }

    /// Lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION,
            Self::Development => "development",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
