//! Library-code manifest commitment: a hash over the hashes of every source
//! file that makes up the implementation, proving which code produced a
//! given proof bundle.

use std::path::Path;
use std::sync::OnceLock;

use eval_canon::to_canonical_bytes;
use eval_field::{sha256_field, Field};
use eval_types::EvalError;
use serde::Serialize;
use sha2::{Digest, Sha256};
use walkdir::WalkDir;

const EXCLUDED_DIR_NAMES: &[&str] = &["target", "node_modules", "dist", "build"];

#[derive(Debug, Clone, Serialize)]
struct ManifestEntry {
    path: String,
    hash: String,
}

fn is_excluded_component(component: &str) -> bool {
    component.starts_with('.') || EXCLUDED_DIR_NAMES.contains(&component)
}

/// Walks `root`, excluding build/cache directories and dotfiles, and hashes
/// the sorted `{path, hash}` manifest of every remaining file.
pub fn library_code_manifest_hash(root: &Path) -> Result<Field, EvalError> {
    let mut entries = Vec::new();

    for walked in WalkDir::new(root) {
        let walked = walked.map_err(|err| EvalError::InvalidConfig {
            message: format!("failed to walk {}: {err}", root.display()),
        })?;
        if !walked.file_type().is_file() {
            continue;
        }

        let relative = walked.path().strip_prefix(root).unwrap_or(walked.path());
        let excluded = relative
            .components()
            .any(|component| is_excluded_component(&component.as_os_str().to_string_lossy()));
        if excluded {
            continue;
        }

        let bytes = std::fs::read(walked.path()).map_err(|err| EvalError::InvalidConfig {
            message: format!("failed to read {}: {err}", walked.path().display()),
        })?;
        let digest = Sha256::digest(&bytes);

        entries.push(ManifestEntry {
            path: relative.to_string_lossy().replace('\\', "/"),
            hash: hex::encode(digest),
        });
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(sha256_field(&to_canonical_bytes(&entries)))
}

static MANIFEST_CACHE: OnceLock<Field> = OnceLock::new();

/// Cached form of [`library_code_manifest_hash`]: computed once per process
/// and reused for every subsequent call, regardless of `root`. Callers that
/// need a fresh computation (e.g. across processes pointed at different
/// source trees) must not share a process.
pub fn library_code_manifest_hash_cached(root: &Path) -> Result<Field, EvalError> {
    if let Some(cached) = MANIFEST_CACHE.get() {
        return Ok(*cached);
    }
    let hash = library_code_manifest_hash(root)?;
    Ok(*MANIFEST_CACHE.get_or_init(|| hash))
}
