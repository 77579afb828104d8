use crate::domain::diagnostics::{DiagnosticKind, Diagnostics};
use crate::domain::models::UnitTable;
use std::collections::HashSet;

/// Check every unit path against the flattened submodule list.
///
/// A unit is invalid when its full path coincides with a submodule path
/// (a submodule was mistakenly declared as a unit) or when its owning
/// submodule is not part of the declared layers. All offending units are
/// reported, not just the first; the caller aborts the pipeline when this
/// returns a non-zero count.
pub fn validate_unit_paths(
    units: &UnitTable,
    all_submodules: &[String],
    diags: &mut Diagnostics,
) -> usize {
    let submodule_set: HashSet<&str> = all_submodules.iter().map(String::as_str).collect();
    let mut invalid = 0;
    for (unit_path, unit) in units {
        if submodule_set.contains(unit_path.as_str()) {
            diags.error(
                DiagnosticKind::InvalidUnitPath,
                format!(
                    "unit is submodule: {unit_path}: a unit is supposed to be contained in a \
                     submodule (like a function or class), not be the submodule itself"
                ),
            );
            invalid += 1;
        } else if !submodule_set.contains(unit.submodule.as_str()) {
            diags.error(
                DiagnosticKind::InvalidUnitPath,
                format!(
                    "unknown submodule: {unit_path} is not part of any submodule in the \
                     provided architectural layers"
                ),
            );
            invalid += 1;
        }
    }
    invalid
}
