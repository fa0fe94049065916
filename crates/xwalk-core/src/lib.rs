//! # xwalk-core — Validated Methodology Models
//!
//! This crate is the model layer every crosswalk and wrangling engine
//! builds on. It defines the vocabulary of a methodology (modifiers,
//! categories, action categories, action scripts, provenance stamps and
//! the supported tabular mime-types) and the rules that decide whether a
//! value of that vocabulary is legal. Downstream engines trust these
//! values without re-checking them.
//!
//! ## Key Design Principles
//!
//! 1. **Validated constructors only.** Every model has private fields.
//!    Construction, deserialization and every `with_*` change run through
//!    the same validation function. There is no unchecked mutation path.
//!
//! 2. **Identity is generated once.** `CategoryId` and `ActionScriptId`
//!    are minted at construction and carried unchanged through every
//!    `with_*` change and every serde round-trip.
//!
//! 3. **Injectable generators.** Uuids come from a [`UuidSource`] and
//!    timestamps from a [`Clock`], so tests can pin both.
//!
//! 4. **Literal enum values.** `MimeType` and `Structure` serialize as the
//!    literal strings external documents use.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `xwalk-*` crates (this is the leaf of the DAG).
//! - No I/O, no logging, no `unsafe`.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod action_script;
pub mod category;
pub mod category_action;
pub mod error;
pub mod identity;
pub mod mime;
pub mod modifier;
pub mod temporal;
mod text;
pub mod version;

// Re-export primary types for ergonomic imports.
pub use action_script::ActionScriptModel;
pub use category::{CategoryModel, CategoryName};
pub use category_action::{CategoryActionModel, Structure};
pub use error::{ValidationError, XwalkError};
pub use identity::{ActionScriptId, CategoryId, Identified, RandomUuids, SeededUuids, UuidSource};
pub use mime::MimeType;
pub use modifier::ModifierModel;
pub use temporal::{Clock, FixedClock, SystemClock, Timestamp};
pub use version::VersionModel;
