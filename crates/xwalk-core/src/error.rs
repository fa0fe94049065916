//! # Error Types
//!
//! Structured error hierarchy for the model layer, built with `thiserror`.
//!
//! Every [`ValidationError`] names exactly one offending field so that a
//! document loader can point an author at the line to fix. None of these
//! errors are transient: the caller must supply corrected input.

use thiserror::Error;

/// Top-level error type for the model layer.
#[derive(Error, Debug)]
pub enum XwalkError {
    /// A field failed its constraint.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Content type, extension or path does not map to a supported mime-type.
    #[error("unsupported mime type: {0:?}")]
    UnsupportedMimeType(String),
}

/// A single field failed its constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Modifier names are single characters after trimming.
    #[error("name: modifier name must be a single character, got {0:?}")]
    ModifierName(String),

    /// Action category structure is neither `boolean` nor `unique`.
    #[error("structure: structure must be boolean or unique, got {0:?}")]
    Structure(String),

    /// An identifier could not be parsed as a uuid.
    #[error("{field}: invalid uuid {value:?} ({reason})")]
    InvalidUuid {
        /// The field holding the identifier.
        field: &'static str,
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Timestamp string is not valid RFC 3339.
    #[error("{field}: invalid timestamp {value:?} ({reason})")]
    InvalidTimestamp {
        /// The field holding the timestamp.
        field: &'static str,
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl ValidationError {
    /// The name of the field this error is attributable to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::ModifierName(_) => "name",
            Self::Structure(_) => "structure",
            Self::InvalidUuid { field, .. } => field,
            Self::InvalidTimestamp { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_attribution() {
        assert_eq!(ValidationError::ModifierName("ab".into()).field(), "name");
        assert_eq!(ValidationError::Structure("set".into()).field(), "structure");
        let err = ValidationError::InvalidUuid {
            field: "uuid",
            value: "nope".into(),
            reason: "bad length".into(),
        };
        assert_eq!(err.field(), "uuid");
    }

    #[test]
    fn test_display_leads_with_field() {
        let err = ValidationError::Structure("set".into());
        assert_eq!(
            err.to_string(),
            "structure: structure must be boolean or unique, got \"set\""
        );
        let err = ValidationError::ModifierName("".into());
        assert!(err.to_string().starts_with("name: modifier name must be a single character"));
    }

    #[test]
    fn test_validation_converts_into_top_level() {
        let err: XwalkError = ValidationError::Structure("set".into()).into();
        assert!(matches!(err, XwalkError::Validation(ValidationError::Structure(_))));
        assert!(err.to_string().starts_with("validation error: structure:"));
    }
}
