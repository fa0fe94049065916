//! # Action Categories
//!
//! A `CategoryActionModel` declares what kind of category term an action
//! works with: a boolean flag (`boolean`) or a term drawn from a unique,
//! enumerable set of values (`unique`). Category resolution downstream
//! switches on [`Structure`], so only those two literals are legal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::Identified;
use crate::text::trimmed;

/// Declared shape of an action category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Structure {
    /// A boolean flag category.
    Boolean,
    /// A category with a unique, enumerable set of values.
    #[default]
    Unique,
}

impl Structure {
    /// The literal as it appears in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Unique => "unique",
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Structure {
    type Err = ValidationError;

    /// Exact, case-sensitive match on the literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boolean" => Ok(Self::Boolean),
            "unique" => Ok(Self::Unique),
            other => Err(ValidationError::Structure(other.to_string())),
        }
    }
}

/// Declaration of an action category.
///
/// Identity is the `name`, exposed through [`Identified`]; `==` compares
/// every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCategoryAction")]
pub struct CategoryActionModel {
    name: String,
    title: String,
    description: String,
    structure: Structure,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCategoryAction {
    name: String,
    title: String,
    description: String,
    #[serde(default)]
    structure: Option<String>,
}

impl TryFrom<RawCategoryAction> for CategoryActionModel {
    type Error = ValidationError;

    fn try_from(raw: RawCategoryAction) -> Result<Self, Self::Error> {
        let structure: Structure = match raw.structure {
            Some(s) => s.parse()?,
            None => Structure::default(),
        };
        Ok(Self::with_parts(raw.name, raw.title, raw.description, structure))
    }
}

impl CategoryActionModel {
    /// Declare an action category.
    ///
    /// # Errors
    ///
    /// [`ValidationError::Structure`] unless `structure` is exactly
    /// `"boolean"` or `"unique"`.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        structure: &str,
    ) -> Result<Self, ValidationError> {
        let structure: Structure = structure.parse()?;
        Ok(Self::with_parts(name, title, description, structure))
    }

    /// Declare an action category with the default `unique` structure.
    pub fn unique(
        name: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::with_parts(name, title, description, Structure::Unique)
    }

    fn with_parts(
        name: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        structure: Structure,
    ) -> Self {
        Self {
            name: trimmed(name),
            title: trimmed(title),
            description: trimmed(description),
            structure,
        }
    }

    /// The action identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short human-readable title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// What the action does.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Declared shape of the category term.
    pub fn structure(&self) -> Structure {
        self.structure
    }

    /// A new declaration with a different name.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self::with_parts(name, self.title, self.description, self.structure)
    }

    /// A new declaration with a different title.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self::with_parts(self.name, title, self.description, self.structure)
    }

    /// A new declaration with a different description.
    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self::with_parts(self.name, self.title, description, self.structure)
    }

    /// A new declaration with a different structure literal, validated
    /// like construction.
    pub fn with_structure(self, structure: &str) -> Result<Self, ValidationError> {
        Self::new(self.name, self.title, self.description, structure)
    }
}

impl Identified for CategoryActionModel {
    type Key = String;

    fn identity(&self) -> String {
        self.name.clone()
    }
}
