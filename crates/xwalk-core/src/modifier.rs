//! # Modifiers
//!
//! A modifier is a single-character token that action scripts combine
//! into longer expressions (`+`, `<`, `~`, ...). This module only decides
//! what a legal modifier is; it never interprets scripts.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::Identified;
use crate::text::trimmed;

/// A single-character action-script token with a human-readable title.
///
/// Identity is the `name` character, exposed through [`Identified`]. `==`
/// compares every field, so two modifiers with the same token and different
/// titles share an identity but are not equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawModifier")]
pub struct ModifierModel {
    name: String,
    title: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawModifier {
    name: String,
    title: String,
}

impl TryFrom<RawModifier> for ModifierModel {
    type Error = ValidationError;

    fn try_from(raw: RawModifier) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.title)
    }
}

impl ModifierModel {
    /// Create a modifier. Both fields are trimmed before validation.
    ///
    /// # Errors
    ///
    /// [`ValidationError::ModifierName`] unless the trimmed `name` is
    /// exactly one character.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Result<Self, ValidationError> {
        let name = trimmed(name);
        validate_name(&name)?;
        Ok(Self {
            name,
            title: trimmed(title),
        })
    }

    /// The token, as a one-character string.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The token character.
    pub fn symbol(&self) -> char {
        // `validate_name` guarantees exactly one char.
        self.name.chars().next().unwrap_or_default()
    }

    /// Human-readable title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// A new modifier with a different token, validated like construction.
    pub fn with_name(self, name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(name, self.title)
    }

    /// A new modifier with a different title.
    pub fn with_title(self, title: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(self.name, title)
    }
}

impl Identified for ModifierModel {
    type Key = char;

    fn identity(&self) -> char {
        self.symbol()
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(_), None) => Ok(()),
        _ => Err(ValidationError::ModifierName(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_character_accepted() {
        let modifier = ModifierModel::new("+", "Merge").unwrap();
        assert_eq!(modifier.name(), "+");
        assert_eq!(modifier.symbol(), '+');
        assert_eq!(modifier.title(), "Merge");
        assert_eq!(modifier.identity(), '+');
    }

    #[test]
    fn test_whitespace_trimmed_before_length_check() {
        let modifier = ModifierModel::new("  < ", "  Ordered by date ").unwrap();
        assert_eq!(modifier.name(), "<");
        assert_eq!(modifier.title(), "Ordered by date");
    }

    #[test]
    fn test_multibyte_character_is_one_character() {
        let modifier = ModifierModel::new("é", "Accented").unwrap();
        assert_eq!(modifier.symbol(), 'é');
    }

    #[test]
    fn test_empty_and_long_names_rejected() {
        for bad in ["", "   ", "ab", "+-", " a b "] {
            let err = ModifierModel::new(bad, "x").unwrap_err();
            assert_eq!(err.field(), "name");
            assert!(err.to_string().contains("modifier name must be a single character"));
        }
    }

    #[test]
    fn test_with_name_revalidates() {
        let modifier = ModifierModel::new("+", "Merge").unwrap();
        assert!(modifier.clone().with_name("++").is_err());
        let renamed = modifier.with_name(" - ").unwrap();
        assert_eq!(renamed.name(), "-");
        assert_eq!(renamed.title(), "Merge");
    }

    #[test]
    fn test_with_title_trims() {
        let modifier = ModifierModel::new("~", "Fuzzy").unwrap().with_title(" Approximate ").unwrap();
        assert_eq!(modifier.title(), "Approximate");
    }

    #[test]
    fn test_serde_roundtrip() {
        let modifier = ModifierModel::new("+", "Merge").unwrap();
        let json = serde_json::to_string(&modifier).unwrap();
        assert_eq!(json, r#"{"name":"+","title":"Merge"}"#);
        let back: ModifierModel = serde_json::from_str(&json).unwrap();
        assert_eq!(modifier, back);
    }

    #[test]
    fn test_deserialize_validates() {
        let err = serde_json::from_str::<ModifierModel>(r#"{"name":"++","title":"x"}"#).unwrap_err();
        assert!(err.to_string().contains("name: modifier name must be a single character"));
        let ok: ModifierModel = serde_json::from_str(r#"{"name":" + ","title":" Merge "}"#).unwrap();
        assert_eq!(ok, ModifierModel::new("+", "Merge").unwrap());
    }

    #[test]
    fn test_equality_compares_fields_identity_compares_name() {
        let merge = ModifierModel::new("+", "Merge").unwrap();
        let join = ModifierModel::new("+", "Join").unwrap();
        assert_eq!(merge.identity(), join.identity());
        assert_ne!(merge, join);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-whitespace character, padded with whitespace, is accepted and trimmed.
        #[test]
        fn single_char_accepted(c in any::<char>().prop_filter("non-whitespace", |c| !c.is_whitespace()),
                                pad in "[ \t]{0,3}") {
            let input = format!("{pad}{c}{pad}");
            let modifier = ModifierModel::new(input.clone(), "t").unwrap();
            prop_assert_eq!(modifier.name(), input.trim());
            prop_assert_eq!(modifier.symbol(), c);
        }

        /// Names that trim to anything but one character are rejected.
        #[test]
        fn other_lengths_rejected(s in "[a-z+<>~]{2,8}|[ ]{0,4}") {
            prop_assert!(ModifierModel::new(s, "t").is_err());
        }
    }
}
