use crate::domain::models::{split_last_segment, SubmoduleTable, UnitTable};

/// Roll unit-level dependency edges up to the submodule graph.
///
/// The target submodule of each unit edge is the dependency path minus its
/// final segment. Intra-submodule edges produce no arrow. Once a pair is
/// recorded as illegal (`false`) it never reverts, no matter how many legal
/// unit edges also connect the same pair. Returns a new registry.
pub fn assign_submodule_dependencies(
    submodules: &SubmoduleTable,
    units: &UnitTable,
) -> SubmoduleTable {
    let mut result = submodules.clone();
    for unit in units.values() {
        let Some(source) = result.get_mut(&unit.submodule) else {
            continue;
        };
        for (dep_unit_path, &valid) in &unit.dependencies {
            let Some((dep_sm, _)) = split_last_segment(dep_unit_path) else {
                continue;
            };
            if dep_sm == unit.submodule {
                continue;
            }
            let flag = source.dependencies.entry(dep_sm.to_string()).or_insert(valid);
            // illegal dominates: once false, never back to true
            if !valid {
                *flag = false;
            }
        }
    }
    result
}
