//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep graph/result structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — layer declaration, unit/submodule descriptors, result shape.
//! - `diagnostics.rs` — typed diagnostic records and the collection sink.
//! - `error.rs` — structural errors that abort the pipeline.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! The result structs define the JSON consumed by downstream visualizers.
//! Keep schema-impacting changes explicit.

pub mod diagnostics;
pub mod error;
pub mod models;
