//! # xwalk-cli — Crosswalk Methodology Command-Line Interface
//!
//! ## Subcommands
//!
//! - `validate` — Load and validate methodology documents
//! - `mime` — Resolve a file path or content type against the registry
//! - `stamp` — Emit a fresh provenance stamp
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers write to the `Write` they are given and delegate to the
//!   domain crates; no model rules live here.

pub mod mime;
pub mod stamp;
pub mod validate;
