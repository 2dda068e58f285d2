//! `.SRCINFO` regeneration via makepkg.
//!
//! The tool being absent is a warning, not a failure: the PKGBUILD update
//! itself has already been persisted by the time this runs.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

/// Derived metadata file written next to the PKGBUILD.
pub const SRCINFO_FILE: &str = ".SRCINFO";

const MAKEPKG: &str = "makepkg";

/// Regenerate `.SRCINFO` in `dir` with `makepkg --printsrcinfo`.
/// Returns `Ok(false)` when makepkg is not installed (skipped), `Ok(true)`
/// when the file was written, and `Err` when makepkg ran but failed.
pub fn regenerate(dir: &Path) -> Result<bool> {
    generate_with(MAKEPKG, &["--printsrcinfo"], dir)
}

fn generate_with(program: &str, args: &[&str], dir: &Path) -> Result<bool> {
    let output = match Command::new(program).args(args).current_dir(dir).output() {
        Ok(output) => output,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::warn!("{} not found, skipping {} generation", program, SRCINFO_FILE);
            return Ok(false);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("could not run {}", program));
        }
    };

    if !output.status.success() {
        anyhow::bail!(
            "{} exited with {}: {}",
            program,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let path = dir.join(SRCINFO_FILE);
    fs::write(&path, &output.stdout).with_context(|| format!("write {}", path.display()))?;
    tracing::info!("generated {}", path.display());
    Ok(true)
}
