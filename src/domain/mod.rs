//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep parsed-file and result structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make report-impacting changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — parsed resource file, per-locale result structs.
//! - `constants.rs` — fixed run configuration (paths, locale list).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.

pub mod constants;
pub mod models;
