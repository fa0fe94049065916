//! # Temporal Types — UTC Timestamps
//!
//! Defines `Timestamp`, the UTC instant carried by provenance stamps, and
//! the [`Clock`] seam that supplies "now" to constructors.
//!
//! Timestamps are always stored in UTC. Inputs with an explicit offset are
//! converted, never kept, so two stamps for the same instant compare and
//! serialize identically. Sub-second precision is preserved so that a
//! serde round-trip reproduces the exact instant.
//!
//! Serialized form is RFC 3339 with a `Z` suffix, e.g.
//! `2026-01-15T12:00:00Z` or `2026-01-15T12:00:00.250Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Wrap a `chrono::DateTime<Utc>`.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Parse an RFC 3339 string, converting any offset to UTC.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimestamp`] against the `updated`
    /// field if the string is not valid RFC 3339.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let dt = DateTime::parse_from_rfc3339(s.trim()).map_err(|e| {
            ValidationError::InvalidTimestamp {
                field: "updated",
                value: s.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self(dt.with_timezone(&Utc)))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as RFC 3339 with `Z` suffix, keeping only the sub-second
    /// digits that are needed.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Supplies the current time to constructors that default a timestamp.
pub trait Clock {
    /// The current instant according to this clock.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
