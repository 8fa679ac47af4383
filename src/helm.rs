//! Helm invocation.
//!
//! Shells out to the `helm` binary: `helm template` to render a chart and
//! `helm get manifest` to read the manifest of a deployed release. Both
//! return the raw multi-document blob for the splitter.

use std::path::PathBuf;
use std::process::Command;

use crate::error::{ImagesError, Result};

/// Render a chart with `helm template`.
pub fn render_chart(
    chart: &str,
    release_name: &str,
    values: &[PathBuf],
    set_values: &[String],
    namespace: Option<&str>,
) -> Result<String> {
    let mut cmd = Command::new("helm");
    cmd.arg("template").arg(release_name).arg(chart);

    for values_path in values {
        cmd.arg("-f").arg(values_path);
    }
    for set_value in set_values {
        cmd.arg("--set").arg(set_value);
    }
    if let Some(namespace) = namespace {
        cmd.arg("-n").arg(namespace);
    }

    run(cmd, "template")
}

/// Read a deployed release's manifest with `helm get manifest`.
pub fn release_manifest(release: &str, namespace: Option<&str>) -> Result<String> {
    let mut cmd = Command::new("helm");
    cmd.arg("get").arg("manifest").arg(release);
    if let Some(namespace) = namespace {
        cmd.arg("-n").arg(namespace);
    }

    run(cmd, "get manifest")
}

fn run(mut cmd: Command, command: &str) -> Result<String> {
    let output = cmd.output().map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            ImagesError::HelmNotFound
        } else {
            ImagesError::Io(err)
        }
    })?;

    if !output.status.success() {
        return Err(ImagesError::HelmCommand {
            command: command.to_string(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Check if the helm binary is available in PATH.
pub fn is_helm_available() -> bool {
    Command::new("helm")
        .arg("version")
        .arg("--short")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Get the helm client version, if available.
pub fn helm_version() -> Option<String> {
    Command::new("helm")
        .arg("version")
        .arg("--short")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
}
