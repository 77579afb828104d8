//! Service layer containing the pipeline stages and side-effect helpers.
//!
//! ## Service map
//! - `parser.rs` — unit declaration text → unit table + per-submodule order.
//! - `layering.rs` — layer declaration flattening + rank table.
//! - `validate.rs` — unit path validation gate.
//! - `registry.rs` — submodule descriptor construction.
//! - `colors.rs` — cosmetic per-module color assignment.
//! - `resolve.rs` — symbolic reference resolution with fallback policy.
//! - `violations.rs` — layer-violation flagging.
//! - `aggregate.rs` — submodule-level dependency rollup.
//! - `pipeline.rs` — stage sequencing and result assembly.
//! - `inputs.rs` — input file resolution and loading.
//! - `output.rs` — result writing + JSON/text output helpers.
//!
//! ## Conventions
//! - Pipeline stages are pure: borrow inputs, return fresh structures.
//! - Side effects (filesystem, stdout) stay in `inputs`/`output`.
//! - Keep command handlers thin; delegate to services.

pub mod aggregate;
pub mod colors;
pub mod inputs;
pub mod layering;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod registry;
pub mod resolve;
pub mod validate;
pub mod violations;
