use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "result.json";

#[derive(Parser, Debug)]
#[command(
    name = "layerlens",
    version,
    about = "Validate declared architecture layers and emit an annotated dependency graph"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline and write the annotated graph to disk.
    Process {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Run the full pipeline but write nothing; report diagnostics only.
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Debug)]
pub struct InputArgs {
    #[arg(
        long,
        value_name = "FOLDER",
        conflicts_with_all = ["layers", "units"],
        help = "Folder containing layers.json and units.md"
    )]
    pub input: Option<PathBuf>,
    #[arg(long, value_name = "FILE", help = "Path to the layer declaration JSON")]
    pub layers: Option<PathBuf>,
    #[arg(
        long,
        value_name = "FILE",
        help = "Path to the unit declarations markdown (required when --layers is used)"
    )]
    pub units: Option<PathBuf>,
}
