//! Delivery Preview Configuration
//!
//! Loads configuration from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Roster JSON file backing the member directory
    pub roster_path: PathBuf,

    /// JSON array of notices and forms to plan
    pub items_path: PathBuf,

    /// Fixed planning instant (RFC 3339). Uses the system clock when unset.
    pub now_override: Option<DateTime<Utc>>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `ROSTER_PATH` (required)
    /// - `DELIVERY_ITEMS_PATH` (required)
    /// - `DELIVERY_NOW`: RFC 3339 timestamp (optional)
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            roster_path: env::var("ROSTER_PATH")
                .context("ROSTER_PATH must be set")?
                .into(),
            items_path: env::var("DELIVERY_ITEMS_PATH")
                .context("DELIVERY_ITEMS_PATH must be set")?
                .into(),
            now_override: env::var("DELIVERY_NOW")
                .ok()
                .map(|raw| parse_timestamp(&raw))
                .transpose()?,
        })
    }

    /// Planning instant: the override if configured, otherwise the system clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.now_override.unwrap_or_else(Utc::now)
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            roster_path: "tests/fixtures/roster.json".into(),
            items_path: "tests/fixtures/items.json".into(),
            now_override: DateTime::parse_from_rfc3339("2026-11-05T00:00:00Z")
                .ok()
                .map(|t| t.with_timezone(&Utc)),
        }
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|t| t.with_timezone(&Utc))
        .with_context(|| format!("DELIVERY_NOW is not an RFC 3339 timestamp: {raw}"))
}
