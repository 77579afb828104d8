use crate::domain::diagnostics::{DiagnosticKind, Diagnostics};
use crate::domain::models::{Submodule, SubmoduleTable, UnitOrder, DEFAULT_COLOR};
use indexmap::IndexMap;

/// Build the submodule registry with default metadata, in flattened layer
/// order. Colors and dependencies are filled in by later passes. A submodule
/// with no declared units is worth a warning but not an error.
pub fn build_submodule_table(
    all_submodules: &[String],
    unit_order: &UnitOrder,
    diags: &mut Diagnostics,
) -> SubmoduleTable {
    let mut submodules = SubmoduleTable::new();
    for sm in all_submodules {
        let units = unit_order.get(sm).cloned().unwrap_or_default();
        if units.is_empty() {
            diags.warn(
                DiagnosticKind::EmptySubmodule,
                format!("submodule {sm} has no units"),
            );
        }
        let module = sm.split('.').next().unwrap_or_default().to_string();
        submodules.insert(
            sm.clone(),
            Submodule {
                module,
                color: DEFAULT_COLOR.to_string(),
                units,
                dependencies: IndexMap::new(),
            },
        );
    }
    submodules
}
