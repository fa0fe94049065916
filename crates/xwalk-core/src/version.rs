//! # Provenance Stamps
//!
//! A `VersionModel` records who changed a definition, what changed and
//! when. Any field may be unknown, so construction never fails. Stamps
//! are superseded, not edited: the `with_*` methods return a new stamp.

use serde::{Deserialize, Serialize};

use crate::temporal::{Clock, SystemClock, Timestamp};
use crate::text::trimmed_opt;

/// A provenance record attachable to any methodology definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawVersion")]
pub struct VersionModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    updated: Timestamp,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVersion {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    updated: Option<Timestamp>,
}

impl From<RawVersion> for VersionModel {
    fn from(raw: RawVersion) -> Self {
        Self::new(raw.name, raw.description, raw.updated)
    }
}

impl VersionModel {
    /// Create a stamp; `updated` defaults to the current UTC time.
    pub fn new(
        name: Option<impl Into<String>>,
        description: Option<impl Into<String>>,
        updated: Option<Timestamp>,
    ) -> Self {
        Self::new_with_clock(&SystemClock, name, description, updated)
    }

    /// Create a stamp, defaulting `updated` from `clock`.
    pub fn new_with_clock(
        clock: &impl Clock,
        name: Option<impl Into<String>>,
        description: Option<impl Into<String>>,
        updated: Option<Timestamp>,
    ) -> Self {
        Self {
            name: trimmed_opt(name),
            description: trimmed_opt(description),
            updated: updated.unwrap_or_else(|| clock.now()),
        }
    }

    /// Author of the change, if known.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// What changed, if recorded.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// When the change was recorded.
    pub fn updated(&self) -> Timestamp {
        self.updated
    }

    /// A new stamp with a different author.
    pub fn with_name(self, name: Option<impl Into<String>>) -> Self {
        Self {
            name: trimmed_opt(name),
            ..self
        }
    }

    /// A new stamp with a different description.
    pub fn with_description(self, description: Option<impl Into<String>>) -> Self {
        Self {
            description: trimmed_opt(description),
            ..self
        }
    }

    /// A new stamp with a different time.
    pub fn with_updated(self, updated: Timestamp) -> Self {
        Self { updated, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::FixedClock;

    const NONE: Option<&str> = None;

    fn fixed() -> Timestamp {
        Timestamp::parse("2026-01-15T12:00:00Z").unwrap()
    }

    #[test]
    fn test_defaults_to_now() {
        let before = chrono::Utc::now();
        let version = VersionModel::new(NONE, NONE, None);
        let after = chrono::Utc::now();
        let updated = *version.updated().as_datetime();
        assert!(updated >= before);
        assert!(updated <= after);
        assert!(updated - before < chrono::Duration::seconds(5));
    }

    #[test]
    fn test_clock_injection() {
        let version = VersionModel::new_with_clock(&FixedClock(fixed()), Some("ana"), NONE, None);
        assert_eq!(version.updated(), fixed());
        assert_eq!(version.name(), Some("ana"));
        assert_eq!(version.description(), None);
    }

    #[test]
    fn test_explicit_updated_wins_over_clock() {
        let later = Timestamp::parse("2027-01-01T00:00:00Z").unwrap();
        let version = VersionModel::new_with_clock(&FixedClock(fixed()), NONE, NONE, Some(later));
        assert_eq!(version.updated(), later);
    }

    #[test]
    fn test_description_without_author() {
        let version = VersionModel::new(NONE, Some("  split address column "), Some(fixed()));
        assert_eq!(version.name(), None);
        assert_eq!(version.description(), Some("split address column"));
    }

    #[test]
    fn test_supersede() {
        let first = VersionModel::new(Some("ana"), Some("draft"), Some(fixed()));
        let next = first.clone().with_description(Some("final")).with_updated(Timestamp::now());
        assert_eq!(first.description(), Some("draft"));
        assert_eq!(next.description(), Some("final"));
        assert_eq!(next.name(), Some("ana"));
        assert!(next.updated() > first.updated());
        assert_eq!(next.clone().with_name(NONE).name(), None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let version = VersionModel::new(Some("ana"), Some("initial"), Some(fixed()));
        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(
            json,
            r#"{"name":"ana","description":"initial","updated":"2026-01-15T12:00:00Z"}"#
        );
        let back: VersionModel = serde_json::from_str(&json).unwrap();
        assert_eq!(version, back);
    }

    #[test]
    fn test_deserialize_missing_updated_defaults_to_now() {
        let before = Timestamp::now();
        let version: VersionModel = serde_json::from_str(r#"{"name":" ana "}"#).unwrap();
        assert_eq!(version.name(), Some("ana"));
        assert!(version.updated() >= before);
    }

    #[test]
    fn test_deserialize_rejects_bad_timestamp() {
        let err = serde_json::from_str::<VersionModel>(r#"{"updated":"yesterday"}"#).unwrap_err();
        assert!(err.to_string().contains("updated: invalid timestamp"));
    }
}
