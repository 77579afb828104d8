use crate::cli::InputArgs;
use crate::domain::models::Layers;
use anyhow::Context;
use std::fs;
use std::path::PathBuf;

pub const LAYERS_FILE: &str = "layers.json";
pub const UNITS_FILE: &str = "units.md";

/// Resolve the two input file locations from the CLI flags: either a folder
/// holding `layers.json` and `units.md`, or explicit `--layers`/`--units`
/// paths. clap enforces the conflict; the units-without-layers case is
/// checked here.
pub fn resolve_input_paths(args: &InputArgs) -> anyhow::Result<(PathBuf, PathBuf)> {
    if let Some(folder) = &args.input {
        return Ok((folder.join(LAYERS_FILE), folder.join(UNITS_FILE)));
    }
    let layers = args
        .layers
        .clone()
        .context("one of --input or --layers is required")?;
    let units = args
        .units
        .clone()
        .context("--units is required when --layers is used")?;
    Ok((layers, units))
}

pub fn load_layers(path: &PathBuf) -> anyhow::Result<Layers> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading layer declaration {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing layer declaration {}", path.display()))
}

pub fn load_unit_descriptions(path: &PathBuf) -> anyhow::Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("reading unit declarations {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::{resolve_input_paths, LAYERS_FILE, UNITS_FILE};
    use crate::cli::InputArgs;
    use std::path::PathBuf;

    #[test]
    fn folder_input_expands_to_the_two_well_known_files() {
        let args = InputArgs {
            input: Some(PathBuf::from("arch")),
            layers: None,
            units: None,
        };
        let (layers, units) = resolve_input_paths(&args).unwrap();
        assert_eq!(layers, PathBuf::from("arch").join(LAYERS_FILE));
        assert_eq!(units, PathBuf::from("arch").join(UNITS_FILE));
    }

    #[test]
    fn layers_without_units_is_rejected() {
        let args = InputArgs {
            input: None,
            layers: Some(PathBuf::from("layers.json")),
            units: None,
        };
        let err = resolve_input_paths(&args).unwrap_err();
        assert!(err.to_string().contains("--units is required"));
    }
}
