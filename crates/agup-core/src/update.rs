//! The update pipeline: resolve, short-circuit, hash, rewrite, regenerate.
//!
//! One linear pass; every step blocks and any failure before the descriptor
//! write aborts the run. Only the `.SRCINFO` regeneration at the end is
//! allowed to fail without failing the run.

use crate::checksum;
use crate::config::HttpConfig;
use crate::descriptor::Descriptor;
use crate::resolve::{self, Release, BUILD_ID_ENV, VERSION_ENV};
use crate::srcinfo;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Inputs for one update run.
#[derive(Debug, Clone)]
pub struct UpdateOptions {
    /// Vendor page scanned for the current release.
    pub page_url: String,
    /// Download URL template with `{version}` / `{buildid}` placeholders.
    pub url_template: String,
    /// Directory containing the PKGBUILD.
    pub package_dir: PathBuf,
    /// Leave `.SRCINFO` alone even after a successful rewrite.
    pub skip_srcinfo: bool,
    pub http: HttpConfig,
}

/// What happened to `.SRCINFO` at the end of an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SrcinfoStatus {
    Written,
    /// Regeneration was not requested.
    Skipped,
    /// makepkg is not installed.
    ToolMissing,
    /// makepkg ran and failed; reported but non-fatal.
    Failed,
}

#[derive(Debug, Clone)]
pub enum UpdateOutcome {
    /// The descriptor already records the resolved version; nothing written.
    UpToDate { version: String },
    Updated {
        version: String,
        build_id: String,
        sha256: String,
        srcinfo: SrcinfoStatus,
    },
}

/// Run the full pipeline once. Idempotent at the descriptor level:
/// re-running with an unchanged upstream version is a no-op.
pub fn run_update(opts: &UpdateOptions) -> Result<UpdateOutcome> {
    let release = resolve_release(opts)?;
    tracing::info!(
        "resolved version={} buildid={} url={}",
        release.version,
        release.build_id,
        release.url
    );

    let mut descriptor = Descriptor::load(&opts.package_dir)?;
    if descriptor.current_version().as_deref() == Some(release.version.as_str()) {
        tracing::info!("already up to date (version {})", release.version);
        return Ok(UpdateOutcome::UpToDate {
            version: release.version,
        });
    }

    let sha256 = checksum::sha256_url(&release.url, &opts.http)
        .with_context(|| format!("download failed for {}", release.url))?;
    tracing::info!("sha256 {}", sha256);

    descriptor.set_release(&release.version, &release.build_id, &sha256);
    descriptor.save()?;

    let srcinfo = if opts.skip_srcinfo {
        SrcinfoStatus::Skipped
    } else {
        match srcinfo::regenerate(&opts.package_dir) {
            Ok(true) => SrcinfoStatus::Written,
            Ok(false) => SrcinfoStatus::ToolMissing,
            Err(err) => {
                tracing::error!("{} regeneration failed: {:#}", srcinfo::SRCINFO_FILE, err);
                SrcinfoStatus::Failed
            }
        }
    };

    Ok(UpdateOutcome::Updated {
        version: release.version,
        build_id: release.build_id,
        sha256,
        srcinfo,
    })
}

fn resolve_release(opts: &UpdateOptions) -> Result<Release> {
    resolve::resolve(&opts.page_url, &opts.url_template, &opts.http).with_context(|| {
        format!(
            "could not determine the latest release; set {} and {} to update manually",
            VERSION_ENV, BUILD_ID_ENV
        )
    })
}
