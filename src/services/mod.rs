//! Service layer containing the audit logic.
//!
//! ## Service map
//! - `parser.rs` — line-oriented `.resx` record parsing into `ResourceFile`.
//! - `placeholders.rs` — positional-placeholder signature extraction.
//! - `reconcile.rs` — key-set diff + locale rewrite against the default file.
//! - `report.rs` — markdown audit report assembly.
//!
//! ## Conventions
//! - Everything here is a pure function over in-memory text.
//! - File I/O stays in `main.rs`; one read and one write per file.

pub mod parser;
pub mod placeholders;
pub mod reconcile;
pub mod report;
