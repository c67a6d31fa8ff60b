// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

use workflow_processor::core::config::WorkflowConfig;
use workflow_processor::core::models::Environment;

/// Creates a work directory with a populated `config/environment.conf`.
pub fn setup_work_dir() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let config_dir = temp_dir.path().join("config");
    fs::create_dir_all(&config_dir).expect("Failed to create config directory");

    let conf_content = "# test environment configuration\nHLQ=USER\nversion=2.0.0\n";
    fs::write(config_dir.join("environment.conf"), conf_content)
        .expect("Failed to write environment.conf");

    temp_dir
}

/// Builds a fixed configuration without touching the file system, so tests
/// that assert on serialized output stay deterministic.
pub fn fixed_config(environment: Environment) -> WorkflowConfig {
    WorkflowConfig {
        environment,
        processing_date: "2024-01-01T12:00:00+00:00".to_string(),
        version: "1.0.0".to_string(),
        values: std::collections::BTreeMap::new(),
    }
}

/// Installs a stub `tso` interpreter into `<dir>/bin` and returns that
/// directory, ready to be prepended to `PATH`.
#[cfg(unix)]
pub fn install_stub_tso(dir: &Path, script_body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let bin_dir = dir.join("bin");
    fs::create_dir_all(&bin_dir).expect("Failed to create bin directory");
    let stub = bin_dir.join("tso");
    fs::write(&stub, format!("#!/bin/sh\n{script_body}")).expect("Failed to write tso stub");
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark tso stub executable");
    bin_dir
}

/// Returns a `PATH` value with `bin_dir` prepended to the current one.
#[cfg(unix)]
pub fn path_with(bin_dir: &Path) -> String {
    let current = std::env::var("PATH").unwrap_or_default();
    format!("{}:{}", bin_dir.display(), current)
}

/// A stub `tso` body answering both `LISTCAT LEVEL` and `LISTCAT ENT`
/// commands with plausible catalog listings.
#[cfg(unix)]
pub const STUB_TSO_CATALOG: &str = r#"cmd="$1"
case "$cmd" in
  *LEVEL*)
    cat <<'EOF'
NONVSAM ------- USER.TEST.DATA
NONVSAM ------- USER.TEST.DATA
NONVSAM ------- USER.TEST.CONFIG
0LISTING FROM CATALOG -- CATALOG.MASTER
EOF
    ;;
  *)
    echo "COMMAND: $cmd"
    echo "NONVSAM ------- ENTRY"
    echo "   ATTRIBUTES  RECFM-FB  LRECL-80"
    ;;
esac
exit 0
"#;
