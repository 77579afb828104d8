use crate::domain::diagnostics::{DiagnosticKind, Diagnostics};
use crate::domain::models::{split_last_segment, UnitTable};
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::info;

/// Resolve each unit's raw `@`-references to confirmed unit paths.
///
/// Per reference, in priority order:
/// 1. Equal to the unit's own path → dropped silently.
/// 2. Exact match on a known unit path → kept as `true`.
/// 3. Stripping the final segment (a `Type.method` style reference) matches a
///    known unit → the stripped path is kept, duplicates merged, and a
///    warning is recorded for the fuzzy match.
/// 4. Anything else is unresolvable: dropped with an error record.
///
/// Unresolvable references never fail the pipeline; they only disappear from
/// the graph. Returns a new unit table.
pub fn resolve_dependencies(units: &UnitTable, diags: &mut Diagnostics) -> UnitTable {
    let unit_paths: HashSet<&str> = units.keys().map(String::as_str).collect();
    let mut error_count = 0usize;

    let resolved_table: UnitTable = units
        .iter()
        .map(|(unit_path, unit)| {
            let mut resolved: IndexMap<String, bool> = IndexMap::new();
            for dep in unit.dependencies.keys() {
                if dep == unit_path {
                    continue;
                }
                if unit_paths.contains(dep.as_str()) {
                    resolved.insert(dep.clone(), true);
                    continue;
                }
                match split_last_segment(dep) {
                    Some((parent, _)) if unit_paths.contains(parent) => {
                        diags.warn(
                            DiagnosticKind::FuzzyMatch,
                            format!("{unit_path} dependency {dep} was matched to {parent}"),
                        );
                        resolved.entry(parent.to_string()).or_insert(true);
                    }
                    _ => {
                        diags.error(
                            DiagnosticKind::UnknownReference,
                            format!(
                                "referenced unit unknown: {unit_path} depends on {dep}, \
                                 which could not be resolved"
                            ),
                        );
                        error_count += 1;
                    }
                }
            }
            let mut unit = unit.clone();
            unit.dependencies = resolved;
            (unit_path.clone(), unit)
        })
        .collect();

    info!("dependency resolution completed with {error_count} error(s)");
    resolved_table
}
