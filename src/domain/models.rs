use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// The externally supplied layering constraint, passed through to the
/// output unchanged.
///
/// `root_layers` is an ordered list of rows; modules in the same row share a
/// rank. `submodule_layers` optionally subdivides a root module into its own
/// ordered rows of submodules; a module without an entry is a leaf and is
/// itself the sole submodule of that module.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Layers {
    pub root_layers: Vec<Vec<String>>,
    #[serde(default)]
    pub submodule_layers: IndexMap<String, Vec<Vec<String>>>,
}

/// One declared function/method/class. Keyed by its full dotted path in
/// [`UnitTable`]; the path's prefix up to the last dot is `submodule`, the
/// final segment is `name`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Unit {
    pub submodule: String,
    pub name: String,
    pub description: String,
    /// Target unit path → legality flag. `true` means legal or not yet
    /// checked; `false` means a confirmed layer violation. Replaced wholesale
    /// by the resolver and again by the violation checker.
    pub dependencies: IndexMap<String, bool>,
}

/// One architectural grouping of units; the node granularity of the layer
/// graph.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Submodule {
    /// First dot-segment of the submodule path (the whole path for leaves).
    pub module: String,
    /// 24-bit RGB hex, cosmetic only.
    pub color: String,
    /// Short unit names in first-appearance order from the declarations.
    pub units: Vec<String>,
    /// Target submodule path → aggregated legality flag.
    pub dependencies: IndexMap<String, bool>,
}

/// Units keyed by full dotted path, in declaration order.
pub type UnitTable = IndexMap<String, Unit>;

/// Submodule descriptors keyed by path, in flattened layer order.
pub type SubmoduleTable = IndexMap<String, Submodule>;

/// Per-submodule ordered short unit names, as emitted by the parser.
pub type UnitOrder = IndexMap<String, Vec<String>>;

/// Final pipeline output. The field names and nesting are a compatibility
/// contract for downstream visualizers.
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub layers: Layers,
    pub submodules: SubmoduleTable,
    pub units: UnitTable,
}

pub const DEFAULT_COLOR: &str = "#D3D3D3";

#[derive(Serialize)]
pub struct RunSummary {
    pub output: String,
    pub warnings: usize,
    pub errors: usize,
}

#[derive(Serialize)]
pub struct CheckReport {
    pub warnings: usize,
    pub errors: usize,
    pub diagnostics: Vec<crate::domain::diagnostics::Diagnostic>,
}

/// Splits a dotted path at its last separator: `a.b.c` → (`a.b`, `c`).
/// Returns `None` when the path has no dot.
pub fn split_last_segment(path: &str) -> Option<(&str, &str)> {
    path.rfind('.').map(|dot| (&path[..dot], &path[dot + 1..]))
}
