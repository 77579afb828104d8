use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub arch: PathBuf,
    pub out: PathBuf,
}

pub const SAMPLE_LAYERS: &str = r#"{
  "root_layers": [["main", "api"], ["db"], ["core"]],
  "submodule_layers": {
    "api": [["api.routes"]],
    "db": [["db.commands"], ["db.queries.sample", "db.queries.config"]],
    "core": [["core.common"]]
  }
}"#;

pub const SAMPLE_UNITS: &str = "\
### main.run
Entry point. Loads `@db.queries.sample.get_samples`.

### api.routes.get_samples
HTTP handler, calls `@db.queries.sample.get_samples`.

### db.commands.insert_sample
Writes one sample row.

### db.queries.sample.get_samples
Returns sample rows.

### db.queries.config.get_config
Returns configuration rows.

### core.common.helpers
Shared helpers.
";

impl TestEnv {
    pub fn new() -> Self {
        Self::with_fixture(SAMPLE_LAYERS, SAMPLE_UNITS)
    }

    pub fn with_fixture(layers: &str, units: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let arch = make_fixture_arch(tmp.path(), layers, units);
        let out = tmp.path().join("result.json");
        Self {
            _tmp: tmp,
            arch,
            out,
        }
    }

    pub fn cmd(&self) -> Command {
        Command::cargo_bin("layerlens").expect("binary builds")
    }

    pub fn process(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("process")
            .arg("--input")
            .arg(&self.arch)
            .arg("--output")
            .arg(&self.out);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn read_result(&self) -> Value {
        let raw = fs::read_to_string(&self.out).expect("result file written");
        serde_json::from_str(&raw).expect("result file is valid json")
    }

    pub fn arch_str(&self) -> &str {
        self.arch.to_str().expect("arch path utf8")
    }

    pub fn out_str(&self) -> &str {
        self.out.to_str().expect("out path utf8")
    }
}

fn make_fixture_arch(base: &Path, layers: &str, units: &str) -> PathBuf {
    let arch = base.join("arch");
    fs::create_dir_all(&arch).expect("create arch dir");
    fs::write(arch.join("layers.json"), layers).expect("write layers.json");
    fs::write(arch.join("units.md"), units).expect("write units.md");
    arch
}
