use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: parameters plus optional free-form tags.
pub struct Payload {
    pub params: Value,
    pub tags: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: Option<&str>) -> Self {
        if let Some(t) = tag {
            self.tags.push(t.to_string());
        }
        self
    }
}

/// Provenance document without outputs (also used by `report`).
pub fn block(payload: &Payload, outputs: &[String]) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "planar_version": planar::VERSION,
        "tags": payload.tags,
        "params": payload.params,
        "outputs": outputs
    })
}

/// Write `<artifact-stem>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    crate::io::ensure_parent_dir(&provenance_path)?;

    let callsite = Location::caller();
    let mut doc = block(&payload, &[artifact.to_string_lossy().into_owned()]);
    doc["callsite"] = json!({
        "file": callsite.file(),
        "line": callsite.line()
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then runtime), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
