//! # Action Scripts
//!
//! An `ActionScriptModel` gives an action script an identity. The script
//! text is opaque here and stored verbatim (surrounding whitespace
//! included), so the script grammar can evolve without touching identity
//! management.

use serde::{Deserialize, Serialize};

use crate::identity::{ActionScriptId, Identified, RandomUuids, UuidSource};

/// A declared action script.
///
/// [`Identified`] keys on the uuid alone; `==` compares the uuid and the
/// script text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawActionScript")]
pub struct ActionScriptModel {
    uuid: ActionScriptId,
    script: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawActionScript {
    #[serde(default)]
    uuid: Option<ActionScriptId>,
    script: String,
}

impl From<RawActionScript> for ActionScriptModel {
    fn from(raw: RawActionScript) -> Self {
        Self {
            uuid: raw.uuid.unwrap_or_default(),
            script: raw.script,
        }
    }
}

impl ActionScriptModel {
    /// Declare a script with a fresh random uuid.
    pub fn new(script: impl Into<String>) -> Self {
        Self::new_with_ids(&mut RandomUuids, script)
    }

    /// Declare a script, minting its uuid from `ids`.
    pub fn new_with_ids(ids: &mut impl UuidSource, script: impl Into<String>) -> Self {
        Self {
            uuid: ActionScriptId::generate(ids),
            script: script.into(),
        }
    }

    /// The generated identifier.
    pub fn uuid(&self) -> ActionScriptId {
        self.uuid
    }

    /// The raw script text.
    pub fn script(&self) -> &str {
        &self.script
    }

    /// The same action with different script text.
    pub fn with_script(self, script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            ..self
        }
    }
}

impl Identified for ActionScriptModel {
    type Key = ActionScriptId;

    fn identity(&self) -> ActionScriptId {
        self.uuid
    }
}
