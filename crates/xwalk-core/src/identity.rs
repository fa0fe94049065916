//! # Identity
//!
//! Uuid newtypes for the identity-bearing models, the [`UuidSource`]
//! seam that mints them, and the [`Identified`] contract that tells
//! collaborators which field decides "is this the same entity".
//!
//! You cannot pass a [`CategoryId`] where an [`ActionScriptId`] is
//! expected. Both are valid by construction; deserialization rejects
//! malformed uuids with a [`ValidationError`] naming the `uuid` field.

use std::fmt;
use std::hash::Hash;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Source of fresh uuids for identity-bearing models.
pub trait UuidSource {
    /// Produce the next uuid. Must not repeat within one source.
    fn next_uuid(&mut self) -> Uuid;
}

/// Random v4 uuids from the operating system's randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUuids;

impl UuidSource for RandomUuids {
    fn next_uuid(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic v4-shaped uuids from a seeded generator.
///
/// Two sources built from the same seed yield the same sequence.
#[derive(Debug, Clone)]
pub struct SeededUuids(StdRng);

impl SeededUuids {
    /// Create a source seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl UuidSource for SeededUuids {
    fn next_uuid(&mut self) -> Uuid {
        let bytes: [u8; 16] = self.0.gen();
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}

/// The identity contract of a model.
///
/// Identity-bearing models answer with their generated uuid; value
/// models answer with the field that names them.
pub trait Identified {
    /// The identity key type.
    type Key: Clone + Eq + Hash + fmt::Display;

    /// The key deciding whether two values denote the same entity.
    fn identity(&self) -> Self::Key;
}

/// Defines a uuid newtype with generation, parsing and a validating
/// `Deserialize` that reports failures against the `uuid` field.
macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $ty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub struct $ty(Uuid);

        impl $ty {
            /// Generate a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Mint an identifier from an injected source.
            pub fn generate(ids: &mut impl UuidSource) -> Self {
                Self(ids.next_uuid())
            }

            /// Wrap an existing uuid.
            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Parse a hyphenated (or simple) uuid string.
            pub fn parse(s: &str) -> Result<Self, ValidationError> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|e| ValidationError::InvalidUuid {
                        field: "uuid",
                        value: s.to_string(),
                        reason: e.to_string(),
                    })
            }

            /// Access the underlying uuid.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $ty {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::parse(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

uuid_identifier! {
    /// Identifier of a registered category term.
    CategoryId
}

uuid_identifier! {
    /// Identifier of a declared action script.
    ActionScriptId
}
