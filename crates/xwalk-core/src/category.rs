//! # Category Terms
//!
//! A category is a classification term that action categories and data
//! fields may be tagged with. Its name is either a boolean (for terms that
//! stand for `true`/`false`) or free text, and the distinction is kept:
//! a boolean name is never widened to the string `"true"`.
//!
//! The input's concrete type is resolved explicitly, boolean first, before
//! a [`CategoryName`] is built. Numbers, nulls and collections are rejected
//! rather than coerced.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::identity::{CategoryId, Identified, RandomUuids, UuidSource};
use crate::text::{trimmed, trimmed_opt};

/// Name of a category term: a boolean literal or text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryName {
    /// A boolean term.
    Bool(bool),
    /// A textual term.
    Text(String),
}

impl CategoryName {
    /// The boolean value, if this is a boolean name.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(_) => None,
        }
    }

    /// The text value, if this is a textual name.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Bool(_) => None,
            Self::Text(s) => Some(s),
        }
    }

    fn normalized(self) -> Self {
        match self {
            Self::Text(s) => Self::Text(trimmed(s)),
            other => other,
        }
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for CategoryName {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for CategoryName {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CategoryName {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl Serialize for CategoryName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for CategoryName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NameVisitor;

        impl<'de> Visitor<'de> for NameVisitor {
            type Value = CategoryName;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("name: a boolean or a string")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<CategoryName, E> {
                Ok(CategoryName::Bool(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<CategoryName, E> {
                Ok(CategoryName::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<CategoryName, E> {
                Ok(CategoryName::Text(v))
            }
        }

        deserializer.deserialize_any(NameVisitor)
    }
}

/// A registered category term.
///
/// Identity is the uuid, which is generated once and kept through every
/// `with_*` change. [`Identified`] keys on the uuid alone; `==` compares
/// every field, so a renamed category keeps its identity but no longer
/// equals the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCategory")]
pub struct CategoryModel {
    uuid: CategoryId,
    name: CategoryName,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCategory {
    #[serde(default)]
    uuid: Option<CategoryId>,
    name: CategoryName,
    #[serde(default)]
    description: Option<String>,
}

impl From<RawCategory> for CategoryModel {
    fn from(raw: RawCategory) -> Self {
        Self {
            uuid: raw.uuid.unwrap_or_default(),
            name: raw.name.normalized(),
            description: trimmed_opt(raw.description),
        }
    }
}

impl CategoryModel {
    /// Register a category term with a fresh random uuid.
    pub fn new(name: impl Into<CategoryName>, description: Option<&str>) -> Self {
        Self::new_with_ids(&mut RandomUuids, name, description)
    }

    /// Register a category term, minting its uuid from `ids`.
    pub fn new_with_ids(
        ids: &mut impl UuidSource,
        name: impl Into<CategoryName>,
        description: Option<&str>,
    ) -> Self {
        Self {
            uuid: CategoryId::generate(ids),
            name: name.into().normalized(),
            description: trimmed_opt(description),
        }
    }

    /// The generated identifier.
    pub fn uuid(&self) -> CategoryId {
        self.uuid
    }

    /// The term.
    pub fn name(&self) -> &CategoryName {
        &self.name
    }

    /// Optional explanation of the term.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The same category under a different name.
    pub fn with_name(self, name: impl Into<CategoryName>) -> Self {
        Self {
            name: name.into().normalized(),
            ..self
        }
    }

    /// The same category with a different description.
    pub fn with_description(self, description: Option<&str>) -> Self {
        Self {
            description: trimmed_opt(description),
            ..self
        }
    }
}

impl Identified for CategoryModel {
    type Key = CategoryId;

    fn identity(&self) -> CategoryId {
        self.uuid
    }
}
