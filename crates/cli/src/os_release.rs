//! OS release detection for configs that don't pin one

use anyhow::{Context, bail};
use mport::commands::CommandRunner;

const PROBE_COMMAND: &str = "uname -r";

/// Ask the running system for its release, e.g. `14.0-RELEASE` becomes `14.0`.
pub(crate) fn detect_os_release<CR: CommandRunner>(runner: &CR) -> anyhow::Result<String> {
    let output = runner
        .execute(PROBE_COMMAND)
        .context("Unable to determine the OS release")?;

    if !output.is_success() {
        bail!(
            "`{PROBE_COMMAND}` exited with status {}: {}",
            output.exit_code(),
            output.stderr_str().trim()
        );
    }

    let stdout = output.stdout_str();
    let release = release_number(stdout.trim());
    if release.is_empty() {
        bail!("`{PROBE_COMMAND}` printed no release");
    }

    Ok(release.to_string())
}

/// The numeric part of a release string, before any `-TAG` suffix
fn release_number(raw: &str) -> &str {
    raw.split_once('-').map_or(raw, |(number, _)| number)
}
