use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// What a diagnostic is about. One variant per non-fatal event the pipeline
/// can surface; structural errors abort instead and never land here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Unit declared as a submodule path, or owned by an undeclared submodule.
    InvalidUnitPath,
    /// A submodule in the layer declaration with no declared units.
    EmptySubmodule,
    /// Reference resolved only after stripping its final segment.
    FuzzyMatch,
    /// Reference that matched nothing and was dropped.
    UnknownReference,
    /// Dependency edge pointing upward or sideways in the layer order.
    LayerViolation,
}

#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
}

/// Collected diagnostics for one pipeline run.
///
/// Stages push typed records here instead of writing to ambient output, so
/// tests can assert on exactly which events fired. Every push is mirrored to
/// `tracing` at the matching level for operators watching the run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.records.push(Diagnostic {
            severity: Severity::Warning,
            kind,
            message,
        });
    }

    pub fn error(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{message}");
        self.records.push(Diagnostic {
            severity: Severity::Error,
            kind,
            message,
        });
    }

    pub fn records(&self) -> &[Diagnostic] {
        &self.records
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.records
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter().filter(move |d| d.kind == kind)
    }
}
