//! # Methodology Document
//!
//! The in-memory form of a methodology's vocabulary. Entries are validated
//! models; insertion refuses a second entry with the same identity.
//!
//! Serialized layout (every section optional):
//!
//! ```yaml
//! history:    [ {name, description, updated} ]
//! modifiers:  [ {name, title} ]
//! categories: [ {uuid, name, description} ]
//! actions:    [ {name, title, description, structure} ]
//! scripts:    [ {uuid, script} ]
//! ```

use std::path::Path;

use serde::Serialize;
use xwalk_core::{
    ActionScriptId, ActionScriptModel, CategoryActionModel, CategoryId, CategoryModel,
    CategoryName, Identified, ModifierModel, VersionModel,
};

use crate::validate::{self, DocumentError};

/// On-disk encoding of a methodology document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl DocumentFormat {
    /// Pick the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(DocumentError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

/// A validated methodology vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MethodologyDocument {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    history: Vec<VersionModel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    modifiers: Vec<ModifierModel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    categories: Vec<CategoryModel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    actions: Vec<CategoryActionModel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    scripts: Vec<ActionScriptModel>,
}

impl MethodologyDocument {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a YAML document.
    pub fn parse_yaml(content: &str) -> Result<Self, DocumentError> {
        validate::parse_str(content, DocumentFormat::Yaml)
    }

    /// Parse and validate a JSON document.
    pub fn parse_json(content: &str) -> Result<Self, DocumentError> {
        validate::parse_str(content, DocumentFormat::Json)
    }

    /// Read, parse and validate a document, choosing the format from the
    /// path's extension.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        validate::load(path)
    }

    /// Serialize in the given format.
    pub fn to_string_as(&self, format: DocumentFormat) -> Result<String, DocumentError> {
        match format {
            DocumentFormat::Yaml => self.to_yaml(),
            DocumentFormat::Json => self.to_json(),
        }
    }

    /// Serialize as YAML. Empty sections are omitted.
    pub fn to_yaml(&self) -> Result<String, DocumentError> {
        serde_yaml::to_string(self).map_err(|e| DocumentError::Serialize(e.to_string()))
    }

    /// Serialize as pretty-printed JSON. Empty sections are omitted.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::Serialize(e.to_string()))
    }

    // -- sections -----------------------------------------------------------

    /// Provenance stamps in document order.
    pub fn history(&self) -> &[VersionModel] {
        &self.history
    }

    /// Declared modifiers.
    pub fn modifiers(&self) -> &[ModifierModel] {
        &self.modifiers
    }

    /// Registered category terms.
    pub fn categories(&self) -> &[CategoryModel] {
        &self.categories
    }

    /// Declared action categories.
    pub fn actions(&self) -> &[CategoryActionModel] {
        &self.actions
    }

    /// Declared action scripts.
    pub fn scripts(&self) -> &[ActionScriptModel] {
        &self.scripts
    }

    /// Total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.history.len()
            + self.modifiers.len()
            + self.categories.len()
            + self.actions.len()
            + self.scripts.len()
    }

    // -- insertion ----------------------------------------------------------

    /// Append a provenance stamp. History entries carry no identity.
    pub fn record_version(&mut self, version: VersionModel) {
        self.history.push(version);
    }

    /// Add a modifier; its name must not already be declared.
    pub fn add_modifier(&mut self, modifier: ModifierModel) -> Result<(), DocumentError> {
        insert_unique("modifier", &mut self.modifiers, modifier)
    }

    /// Add a category; its uuid must not already be present.
    pub fn add_category(&mut self, category: CategoryModel) -> Result<(), DocumentError> {
        insert_unique("category", &mut self.categories, category)
    }

    /// Add an action category; its name must not already be declared.
    pub fn add_action(&mut self, action: CategoryActionModel) -> Result<(), DocumentError> {
        insert_unique("action", &mut self.actions, action)
    }

    /// Add an action script; its uuid must not already be present.
    pub fn add_script(&mut self, script: ActionScriptModel) -> Result<(), DocumentError> {
        insert_unique("script", &mut self.scripts, script)
    }

    // -- lookup -------------------------------------------------------------

    /// The most recent provenance stamp.
    pub fn latest_version(&self) -> Option<&VersionModel> {
        self.history.iter().max_by_key(|v| v.updated())
    }

    /// The modifier whose token is `symbol`.
    pub fn modifier(&self, symbol: char) -> Option<&ModifierModel> {
        self.modifiers.iter().find(|m| m.symbol() == symbol)
    }

    /// The action category called `name`, matched exactly.
    pub fn action(&self, name: &str) -> Option<&CategoryActionModel> {
        self.actions.iter().find(|a| a.name() == name)
    }

    /// The category with uuid `id`.
    pub fn category(&self, id: &CategoryId) -> Option<&CategoryModel> {
        self.categories.iter().find(|c| &c.uuid() == id)
    }

    /// Every category carrying `name`. Names are not unique.
    pub fn categories_named<'a>(
        &'a self,
        name: &'a CategoryName,
    ) -> impl Iterator<Item = &'a CategoryModel> + 'a {
        self.categories.iter().filter(move |c| c.name() == name)
    }

    /// The action script with uuid `id`.
    pub fn script(&self, id: &ActionScriptId) -> Option<&ActionScriptModel> {
        self.scripts.iter().find(|s| &s.uuid() == id)
    }
}

fn insert_unique<T: Identified>(
    section: &'static str,
    items: &mut Vec<T>,
    item: T,
) -> Result<(), DocumentError> {
    let key = item.identity();
    if items.iter().any(|existing| existing.identity() == key) {
        return Err(DocumentError::Duplicate {
            section,
            key: key.to_string(),
        });
    }
    items.push(item);
    Ok(())
}
