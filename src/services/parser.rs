use crate::domain::error::LayoutError;
use crate::domain::models::{split_last_segment, Unit, UnitOrder, UnitTable};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`@([\w.]+)`").expect("reference pattern compiles"));

/// Parse the raw unit-declaration text into a unit table plus, per submodule,
/// the ordered short names of its units.
///
/// Blocks start at a `### <dotted.path>` heading line and run until the next
/// heading or end of input; text before the first heading is ignored.
/// Dependency references are every `` `@dotted.path` `` occurrence in the
/// body (both the backticks and the leading `@` are required) and start out
/// flagged `true`; resolution and violation checking come later.
pub fn parse_unit_descriptions(text: &str) -> Result<(UnitTable, UnitOrder), LayoutError> {
    let mut units = UnitTable::new();
    let mut unit_order = UnitOrder::new();

    for (heading, body) in split_blocks(text) {
        let path = heading.trim().to_string();
        let description = body.trim().to_string();

        if units.contains_key(&path) {
            return Err(LayoutError::DuplicateUnit(path));
        }
        let (submodule, name) =
            split_last_segment(&path).ok_or_else(|| LayoutError::PathWithoutDot(path.clone()))?;

        let mut dependencies = IndexMap::new();
        for cap in REFERENCE.captures_iter(&description) {
            dependencies.insert(cap[1].to_string(), true);
        }

        unit_order
            .entry(submodule.to_string())
            .or_default()
            .push(name.to_string());
        units.insert(
            path.clone(),
            Unit {
                submodule: submodule.to_string(),
                name: name.to_string(),
                description,
                dependencies,
            },
        );
    }

    Ok((units, unit_order))
}

/// Split the text into (heading, body) block pairs on `### ` heading lines.
fn split_blocks(text: &str) -> Vec<(String, String)> {
    let mut blocks: Vec<(String, String)> = Vec::new();
    for line in text.lines() {
        if let Some(heading) = line.strip_prefix("### ") {
            blocks.push((heading.to_string(), String::new()));
        } else if let Some((_, body)) = blocks.last_mut() {
            body.push_str(line);
            body.push('\n');
        }
    }
    blocks
}
