//! # Document Validation
//!
//! Parses methodology documents and validates every entry against the
//! model rules, collecting violations instead of stopping at the first.
//!
//! ## Trust Boundary
//!
//! A document that produces any violation is rejected whole. Unknown
//! top-level sections are violations too: a misspelled `modifers:` section
//! would otherwise be dropped without a trace. The same holds one level
//! down: every model rejects fields it does not declare, so a misspelled
//! `strucutre:` is reported instead of falling back to `unique`.
//!
//! YAML input is converted into the JSON value model before validation so
//! both formats go through one code path. YAML booleans stay booleans and
//! quoted scalars stay strings, which is what keeps `name: true` and
//! `name: "true"` apart for categories.

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use xwalk_core::{
    ActionScriptModel, CategoryActionModel, CategoryModel, ModifierModel, VersionModel,
};

use crate::document::{DocumentFormat, MethodologyDocument};

/// Top-level sections a document may contain.
pub const SECTIONS: [&str; 5] = ["history", "modifiers", "categories", "actions", "scripts"];

/// Error loading or validating a methodology document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read.
    #[error("document load error for '{path}': {reason}")]
    Load {
        /// Path to the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// The content is not well-formed YAML/JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The path's extension does not name a supported format.
    #[error("unsupported document format: {0:?} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    /// An entry with the same identity is already present.
    #[error("duplicate {section} identity {key:?}")]
    Duplicate {
        /// Section kind (`modifier`, `category`, `action`, `script`).
        section: &'static str,
        /// The repeated identity key.
        key: String,
    },

    /// The document parsed but one or more entries are invalid.
    #[error("document failed validation:\n{0}")]
    Invalid(ValidationViolations),

    /// The document could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(String),
}

/// A single violation, located by its path in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Location such as `modifiers[2]`; empty for the document root.
    pub path: String,
    /// Human-readable description, leading with the offending field.
    pub message: String,
}

impl Violation {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.path, self.message)
        }
    }
}

/// Collection of validation violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the violations in document order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the collection and returns the inner vector.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Read and validate the document at `path`.
pub fn load(path: &Path) -> Result<MethodologyDocument, DocumentError> {
    let format = DocumentFormat::from_path(path)?;
    tracing::debug!(path = %path.display(), format = format.as_str(), "loading methodology document");

    let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Load {
        path: path.display().to_string(),
        reason: format!("cannot read file: {e}"),
    })?;

    match parse_str(&content, format) {
        Ok(document) => {
            tracing::info!(
                path = %path.display(),
                history = document.history().len(),
                modifiers = document.modifiers().len(),
                categories = document.categories().len(),
                actions = document.actions().len(),
                scripts = document.scripts().len(),
                "methodology document validated"
            );
            Ok(document)
        }
        Err(DocumentError::Invalid(violations)) => {
            tracing::warn!(
                path = %path.display(),
                violations = violations.len(),
                "methodology document rejected"
            );
            Err(DocumentError::Invalid(violations))
        }
        Err(e) => Err(e),
    }
}

/// Parse `content` in `format` and validate it.
pub fn parse_str(content: &str, format: DocumentFormat) -> Result<MethodologyDocument, DocumentError> {
    let value = match format {
        DocumentFormat::Yaml => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(content)
                .map_err(|e| DocumentError::Parse(format!("invalid YAML: {e}")))?;
            yaml_to_json_value(&yaml)
                .map_err(|e| DocumentError::Parse(format!("YAML-to-JSON conversion failed: {e}")))?
        }
        DocumentFormat::Json => serde_json::from_str(content)
            .map_err(|e| DocumentError::Parse(format!("invalid JSON: {e}")))?,
    };
    validate_value(&value)
}

/// Validate an already-parsed document value.
///
/// An empty document (`null`) is valid and has no entries.
pub fn validate_value(value: &Value) -> Result<MethodologyDocument, DocumentError> {
    let mut document = MethodologyDocument::new();
    let root = match value {
        Value::Null => return Ok(document),
        Value::Object(root) => root,
        other => {
            return Err(invalid(vec![Violation::new(
                "",
                format!("document must be a mapping of sections, got {}", kind(other)),
            )]))
        }
    };

    let mut violations = Vec::new();
    for key in root.keys() {
        if !SECTIONS.contains(&key.as_str()) {
            violations.push(Violation::new(
                key.as_str(),
                format!("unknown section (expected one of: {})", SECTIONS.join(", ")),
            ));
        }
    }

    for (_, version) in entries::<VersionModel>(root, "history", &mut violations) {
        document.record_version(version);
    }
    for (index, modifier) in entries::<ModifierModel>(root, "modifiers", &mut violations) {
        if let Err(e) = document.add_modifier(modifier) {
            violations.push(Violation::new(format!("modifiers[{index}]"), e.to_string()));
        }
    }
    for (index, category) in entries::<CategoryModel>(root, "categories", &mut violations) {
        if let Err(e) = document.add_category(category) {
            violations.push(Violation::new(format!("categories[{index}]"), e.to_string()));
        }
    }
    for (index, action) in entries::<CategoryActionModel>(root, "actions", &mut violations) {
        if let Err(e) = document.add_action(action) {
            violations.push(Violation::new(format!("actions[{index}]"), e.to_string()));
        }
    }
    for (index, script) in entries::<ActionScriptModel>(root, "scripts", &mut violations) {
        if let Err(e) = document.add_script(script) {
            violations.push(Violation::new(format!("scripts[{index}]"), e.to_string()));
        }
    }

    if violations.is_empty() {
        Ok(document)
    } else {
        Err(invalid(violations))
    }
}

fn invalid(violations: Vec<Violation>) -> DocumentError {
    DocumentError::Invalid(ValidationViolations { violations })
}

/// Deserialize each entry of `section`, recording a violation for every
/// entry that fails. Returned entries keep their original index.
fn entries<T: DeserializeOwned>(
    root: &Map<String, Value>,
    section: &str,
    violations: &mut Vec<Violation>,
) -> Vec<(usize, T)> {
    match root.get(section) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match T::deserialize(item) {
                Ok(entry) => Some((index, entry)),
                Err(e) => {
                    violations.push(Violation::new(format!("{section}[{index}]"), e.to_string()));
                    None
                }
            })
            .collect(),
        Some(other) => {
            violations.push(Violation::new(
                section,
                format!("section must be a list, got {}", kind(other)),
            ));
            Vec::new()
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Mapping keys must be strings; tags are dropped and the tagged value kept.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    use serde_yaml::Value as Yaml;

    match yaml {
        Yaml::Null => Ok(Value::Null),
        Yaml::Bool(b) => Ok(Value::Bool(*b)),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::from(u))
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent number {n} in JSON"))
            }
        }
        Yaml::String(s) => Ok(Value::String(s.clone())),
        Yaml::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Yaml::Mapping(map) => {
            let mut object = Map::new();
            for (k, v) in map {
                let Yaml::String(key) = k else {
                    return Err(format!("mapping keys must be strings, got {k:?}"));
                };
                object.insert(key.clone(), yaml_to_json_value(v)?);
            }
            Ok(Value::Object(object))
        }
        Yaml::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
