//! # xwalk-schema — Methodology Documents
//!
//! Loads the vocabulary of a methodology (provenance history, modifiers,
//! categories, action categories and action scripts) from YAML or JSON
//! and validates it with the rules in `xwalk-core`.
//!
//! ## Validation (`validate`)
//!
//! Documents are parsed into a generic value first and every entry is
//! validated on its own, so one run reports every problem in a document
//! instead of stopping at the first. Each [`Violation`] carries the path
//! of the offending entry (e.g. `modifiers[2]`).
//!
//! After per-entry validation, identities must be unique within their
//! section: modifier names, category uuids, action category names and
//! action script uuids. Category *names* may repeat.
//!
//! ## Documents (`document`)
//!
//! [`MethodologyDocument`] only holds validated entries and refuses
//! duplicate identities on insertion, so a document in hand is always
//! consistent.
//!
//! ## Crate Policy
//!
//! - Depends only on `xwalk-core` internally.
//! - A document that fails validation is rejected whole; partial documents
//!   are never returned.

pub mod document;
pub mod validate;

pub use document::{DocumentFormat, MethodologyDocument};
pub use validate::{DocumentError, ValidationViolations, Violation};
