use thiserror::Error;

/// Structural invalidity in the input data. Any of these aborts the whole
/// pipeline; nothing here covers resolution or architecture warnings, which
/// stay non-fatal (see `domain::diagnostics`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("duplicate unit path: {0}")]
    DuplicateUnit(String),

    #[error("unit path has no dot separator: {0:?}")]
    PathWithoutDot(String),

    #[error("duplicate submodule: '{0}'")]
    DuplicateSubmodule(String),

    #[error("submodule '{submodule}' does not start with parent module '{module}'")]
    BadSubmodulePrefix { submodule: String, module: String },

    #[error("unit path validation failed: {0} invalid unit path(s), see errors above")]
    ValidationFailed(usize),
}
