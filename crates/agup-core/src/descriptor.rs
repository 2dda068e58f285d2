//! PKGBUILD field rewriting.
//!
//! Only three line-oriented fields are touched: `pkgver=`, `_buildid=` and
//! the single-element `sha256sums=(...)` array. Every other line is preserved
//! byte-for-byte. A field whose line is absent is silently left alone; the
//! file as a whole is never validated.

use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the package build recipe inside the package directory.
pub const DESCRIPTOR_FILE: &str = "PKGBUILD";

const PKGVER_LINE: &str = r"(?m)^pkgver=.*$";
const BUILD_ID_LINE: &str = r"(?m)^_buildid=.*$";
const SHA256SUMS_LINE: &str = r"(?m)^sha256sums=\(.*\)$";
const PKGVER_CAPTURE: &str = r"(?m)^pkgver=(.*)$";

/// In-memory copy of the PKGBUILD, rewritten field-by-field and saved back.
#[derive(Debug, Clone)]
pub struct Descriptor {
    path: PathBuf,
    content: String,
}

impl Descriptor {
    /// Load `PKGBUILD` from `dir`. Fails if the file does not exist.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(DESCRIPTOR_FILE);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("{} not found at {}", DESCRIPTOR_FILE, path.display()))?;
        Ok(Self { path, content })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Currently recorded `pkgver`, if the line is present.
    pub fn current_version(&self) -> Option<String> {
        let re = Regex::new(PKGVER_CAPTURE).ok()?;
        let caps = re.captures(&self.content)?;
        Some(caps.get(1)?.as_str().trim().to_string())
    }

    /// Replace the first line matching each of the three field patterns.
    /// A pattern with no match leaves the content unchanged for that field.
    pub fn set_release(&mut self, version: &str, build_id: &str, sha256: &str) {
        self.content = replace_first_line(&self.content, PKGVER_LINE, &format!("pkgver={}", version));
        self.content =
            replace_first_line(&self.content, BUILD_ID_LINE, &format!("_buildid={}", build_id));
        self.content = replace_first_line(
            &self.content,
            SHA256SUMS_LINE,
            &format!("sha256sums=('{}')", sha256),
        );
    }

    /// Overwrite the file in place.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, &self.content)
            .with_context(|| format!("write {}", self.path.display()))
    }
}

fn replace_first_line(content: &str, pattern: &str, replacement: &str) -> String {
    match Regex::new(pattern) {
        Ok(re) => re.replace(content, NoExpand(replacement)).into_owned(),
        // Patterns above are fixed; an invalid one would be a programming
        // error, and a no-op beats corrupting the recipe.
        Err(_) => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
# Maintainer: Someone <someone@example.com>
pkgname=antigravity
pkgver=1.10.0
pkgrel=1
_buildid=1111111111111111
pkgdesc='Antigravity IDE'
arch=('x86_64')
source=(\"https://cdn.example.com/${pkgver}-${_buildid}/Antigravity.tar.gz\")
sha256sums=('SKIP')
";

    fn write_sample(dir: &Path) {
        fs::write(dir.join(DESCRIPTOR_FILE), SAMPLE).unwrap();
    }

    #[test]
    fn load_missing_descriptor_fails() {
        let dir = tempdir().unwrap();
        let err = Descriptor::load(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains(DESCRIPTOR_FILE));
    }

    #[test]
    fn current_version_reads_pkgver_line() {
        let dir = tempdir().unwrap();
        write_sample(dir.path());
        let d = Descriptor::load(dir.path()).unwrap();
        assert_eq!(d.current_version().as_deref(), Some("1.10.0"));
    }

    #[test]
    fn set_release_updates_exactly_three_lines() {
        let dir = tempdir().unwrap();
        write_sample(dir.path());
        let mut d = Descriptor::load(dir.path()).unwrap();
        d.set_release("1.11.3", "6583016683339776", "deadbeef");

        let before: Vec<&str> = SAMPLE.lines().collect();
        let after: Vec<&str> = d.content().lines().collect();
        assert_eq!(before.len(), after.len());
        for (old, new) in before.iter().zip(after.iter()) {
            match *old {
                "pkgver=1.10.0" => assert_eq!(*new, "pkgver=1.11.3"),
                "_buildid=1111111111111111" => {
                    assert_eq!(*new, "_buildid=6583016683339776")
                }
                "sha256sums=('SKIP')" => assert_eq!(*new, "sha256sums=('deadbeef')"),
                other => assert_eq!(*new, other),
            }
        }
    }

    #[test]
    fn set_release_saves_back_to_disk() {
        let dir = tempdir().unwrap();
        write_sample(dir.path());
        let mut d = Descriptor::load(dir.path()).unwrap();
        d.set_release("1.11.3", "6583016683339776", "deadbeef");
        d.save().unwrap();

        let reloaded = Descriptor::load(dir.path()).unwrap();
        assert_eq!(reloaded.current_version().as_deref(), Some("1.11.3"));
        assert!(reloaded.content().contains("sha256sums=('deadbeef')"));
    }

    #[test]
    fn absent_field_is_left_unchanged() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DESCRIPTOR_FILE),
            "pkgname=antigravity\npkgver=1.0.0\n",
        )
        .unwrap();
        let mut d = Descriptor::load(dir.path()).unwrap();
        d.set_release("1.1.1", "2222222222222222", "cafe");
        assert_eq!(
            d.content(),
            "pkgname=antigravity\npkgver=1.1.1\n",
            "no _buildid or sha256sums lines to rewrite"
        );
    }

    #[test]
    fn only_first_matching_line_is_replaced() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DESCRIPTOR_FILE),
            "pkgver=1.0.0\npkgver=9.9.9\n",
        )
        .unwrap();
        let mut d = Descriptor::load(dir.path()).unwrap();
        d.set_release("1.2.3", "3333333333333333", "00");
        assert_eq!(d.content(), "pkgver=1.2.3\npkgver=9.9.9\n");
    }

    #[test]
    fn replacement_value_is_not_expanded() {
        // `$` in a digest must be written literally.
        let out = replace_first_line("sha256sums=('SKIP')", SHA256SUMS_LINE, "sha256sums=('$1')");
        assert_eq!(out, "sha256sums=('$1')");
    }
}
