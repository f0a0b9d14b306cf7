//! Page cache for incremental builds.
//!
//! A full build renders every filter/selection state, which is a few hundred
//! pages for a modest catalog. Rendering is cheap; rewriting unchanged files
//! is not free for deploy tools that sync by mtime. This module lets the
//! write step skip pages whose HTML is byte-identical to the last build, and
//! remove pages whose state no longer exists (a deleted event, a renamed
//! category).
//!
//! # Design
//!
//! The manifest maps each page's output path (relative to the output
//! directory, `/`-separated) to the SHA-256 of its HTML. A page is fresh
//! when:
//! 1. The manifest has an entry for its path with the same hash
//! 2. The file on disk still hashes to that value
//!
//! The second check catches files replaced behind the manifest's back (a
//! hand edit, a deploy tool, an old asset copied over a page).
//!
//! Fresh pages are left alone. Everything else is written and recorded.
//! After the build, entries for paths that were not produced this time are
//! stale: their files are deleted and their entries dropped.
//!
//! ## Storage
//!
//! The manifest is a JSON file at `<output_dir>/.build-cache.json`.
//!
//! ## Bypassing the cache
//!
//! Pass `--no-cache` to `build` to start from an empty manifest. Every page
//! is rewritten. Pruning still uses the manifest on disk so pages from the
//! previous build are not orphaned.

use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the cache manifest file within the output directory.
const MANIFEST_FILENAME: &str = ".build-cache.json";

/// Version of the cache manifest format. Bump this to invalidate all
/// existing caches when the format or key computation changes.
const MANIFEST_VERSION: u32 = 1;

/// On-disk manifest mapping output paths to content hashes.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CacheManifest {
    pub version: u32,
    pub pages: BTreeMap<String, String>,
}

impl CacheManifest {
    /// Create an empty manifest (used for `--no-cache` or first build).
    pub fn empty() -> Self {
        Self {
            version: MANIFEST_VERSION,
            pages: BTreeMap::new(),
        }
    }

    /// Load from the output directory. Returns an empty manifest if the
    /// file doesn't exist or can't be parsed (version mismatch, corruption).
    pub fn load(output_dir: &Path) -> Self {
        let content = match std::fs::read_to_string(manifest_path(output_dir)) {
            Ok(c) => c,
            Err(_) => return Self::empty(),
        };
        let manifest: Self = match serde_json::from_str(&content) {
            Ok(m) => m,
            Err(_) => return Self::empty(),
        };
        if manifest.version != MANIFEST_VERSION {
            return Self::empty();
        }
        manifest
    }

    /// Save to the output directory.
    pub fn save(&self, output_dir: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(manifest_path(output_dir), json)
    }

    /// Whether `page` was written with exactly `hash` and the file on disk
    /// still has that content.
    pub fn is_fresh(&self, page: &str, hash: &str, output_dir: &Path) -> bool {
        if self.pages.get(page).is_none_or(|h| h != hash) {
            return false;
        }
        std::fs::read(output_dir.join(page)).is_ok_and(|bytes| hash_content(&bytes) == hash)
    }

    pub fn insert(&mut self, page: String, hash: String) {
        self.pages.insert(page, hash);
    }

    /// Recorded pages not in `current`, in path order.
    pub fn stale(&self, current: &HashSet<String>) -> Vec<String> {
        self.pages
            .keys()
            .filter(|page| !current.contains(*page))
            .cloned()
            .collect()
    }

}

/// SHA-256 of a page's contents, as a hex string.
pub fn hash_content(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Summary of cache behaviour for a build run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub unchanged: u32,
    pub written: u32,
    pub removed: u32,
}

impl CacheStats {
    pub fn hit(&mut self) {
        self.unchanged += 1;
    }

    pub fn miss(&mut self) {
        self.written += 1;
    }

    pub fn prune(&mut self) {
        self.removed += 1;
    }

    pub fn total(&self) -> u32 {
        self.unchanged + self.written
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unchanged > 0 {
            write!(
                f,
                "{} unchanged, {} written ({} total)",
                self.unchanged,
                self.written,
                self.total()
            )?;
        } else {
            write!(f, "{} written", self.written)?;
        }
        if self.removed > 0 {
            write!(f, ", {} removed", self.removed)?;
        }
        Ok(())
    }
}

/// Resolve the cache manifest path for an output directory.
pub fn manifest_path(output_dir: &Path) -> PathBuf {
    output_dir.join(MANIFEST_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_manifest_has_no_entries() {
        let m = CacheManifest::empty();
        assert_eq!(m.version, MANIFEST_VERSION);
        assert!(m.pages.is_empty());
    }

    #[test]
    fn fresh_requires_matching_hash_and_file() {
        let tmp = TempDir::new().unwrap();
        let hash = hash_content(b"<html>");
        let mut m = CacheManifest::empty();
        m.insert("events/index.html".into(), hash.clone());

        assert!(!m.is_fresh("events/index.html", &hash, tmp.path()));

        fs::create_dir_all(tmp.path().join("events")).unwrap();
        fs::write(tmp.path().join("events/index.html"), "<html>").unwrap();
        assert!(m.is_fresh("events/index.html", &hash, tmp.path()));
        assert!(!m.is_fresh("events/index.html", "def", tmp.path()));
        assert!(!m.is_fresh("gallery/index.html", &hash, tmp.path()));
    }

    #[test]
    fn replaced_file_is_not_fresh() {
        let tmp = TempDir::new().unwrap();
        let hash = hash_content(b"<html>");
        let mut m = CacheManifest::empty();
        m.insert("index.html".into(), hash.clone());

        fs::write(tmp.path().join("index.html"), "STALE ASSET").unwrap();
        assert!(!m.is_fresh("index.html", &hash, tmp.path()));
    }

    #[test]
    fn stale_lists_pages_not_produced() {
        let mut m = CacheManifest::empty();
        m.insert("a/index.html".into(), "1".into());
        m.insert("b/index.html".into(), "2".into());
        m.insert("c/index.html".into(), "3".into());

        let current: HashSet<String> = ["b/index.html".to_string()].into_iter().collect();
        assert_eq!(m.stale(&current), vec!["a/index.html", "c/index.html"]);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let mut m = CacheManifest::empty();
        m.insert("index.html".into(), "h".into());
        m.save(tmp.path()).unwrap();

        let loaded = CacheManifest::load(tmp.path());
        assert_eq!(loaded.pages.get("index.html").map(String::as_str), Some("h"));
    }

    #[test]
    fn load_missing_file_returns_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(CacheManifest::load(tmp.path()).pages.is_empty());
    }

    #[test]
    fn load_corrupt_json_returns_empty() {
        let tmp = TempDir::new().unwrap();
        fs::write(manifest_path(tmp.path()), "not json").unwrap();
        assert!(CacheManifest::load(tmp.path()).pages.is_empty());
    }

    #[test]
    fn load_wrong_version_returns_empty() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            manifest_path(tmp.path()),
            r#"{"version": 999, "pages": {"index.html": "x"}}"#,
        )
        .unwrap();
        assert!(CacheManifest::load(tmp.path()).pages.is_empty());
    }

    #[test]
    fn hash_content_is_deterministic() {
        assert_eq!(hash_content(b"<html>"), hash_content(b"<html>"));
        assert_ne!(hash_content(b"<html>"), hash_content(b"<html >"));
        assert_eq!(hash_content(b"").len(), 64);
    }

    #[test]
    fn cache_stats_display_with_hits() {
        let stats = CacheStats {
            unchanged: 10,
            written: 2,
            removed: 0,
        };
        assert_eq!(format!("{stats}"), "10 unchanged, 2 written (12 total)");
    }

    #[test]
    fn cache_stats_display_first_build() {
        let stats = CacheStats {
            unchanged: 0,
            written: 7,
            removed: 0,
        };
        assert_eq!(format!("{stats}"), "7 written");
    }

    #[test]
    fn cache_stats_display_with_removals() {
        let stats = CacheStats {
            unchanged: 3,
            written: 0,
            removed: 4,
        };
        assert_eq!(format!("{stats}"), "3 unchanged, 0 written (3 total), 4 removed");
    }
}
