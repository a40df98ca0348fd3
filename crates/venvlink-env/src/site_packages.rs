//! Site-packages path derivation and interpreter-version resolution.

use std::path::{Path, PathBuf};

use venvlink_core::config::{LinkerConfig, DEFAULT_PYTHON_VERSION};

use crate::probe::{is_python_version, EnvironmentProbe};

/// `<venv_root>/lib/python<version>/site-packages`
pub fn site_packages_dir(venv_root: &Path, python_version: &str) -> PathBuf {
    venv_root
        .join("lib")
        .join(format!("python{}", python_version))
        .join("site-packages")
}

/// Where the library link goes: `<site-packages>/<library>`.
pub fn link_target(venv_root: &Path, python_version: &str, library: &str) -> PathBuf {
    site_packages_dir(venv_root, python_version).join(library)
}

/// Versions of every `lib/python<X.Y>` directory under the venv, sorted.
pub fn scan_lib_versions(venv_root: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(venv_root.join("lib")) else {
        return Vec::new();
    };
    let mut versions: Vec<String> = entries
        .flatten()
        .filter(|e| e.path().is_dir())
        .filter_map(|e| {
            let name = e.file_name().to_string_lossy().to_string();
            let version = name.strip_prefix("python")?;
            is_python_version(version).then(|| version.to_string())
        })
        .collect();
    versions.sort();
    versions
}

/// Pick the `X.Y` for the site-packages path.
///
/// Order: configured override (ignored unless it is `X.Y`), the venv
/// interpreter's answer, a single `lib/python<X.Y>` directory, then
/// [`DEFAULT_PYTHON_VERSION`].
pub fn resolve_python_version(
    probe: &dyn EnvironmentProbe,
    config: &LinkerConfig,
    venv_root: &Path,
) -> String {
    match config.python_version {
        Some(ref v) if is_python_version(v) => {
            tracing::debug!(version = %v, "using configured python version");
            return v.clone();
        }
        Some(ref v) => {
            tracing::warn!(
                version = %v,
                "configured python version is not X.Y; detecting from the venv instead"
            );
        }
        None => {}
    }
    if let Some(v) = probe.find_python_version(venv_root) {
        tracing::debug!(version = %v, "detected venv interpreter version");
        return v;
    }
    let scanned = scan_lib_versions(venv_root);
    match scanned.as_slice() {
        [only] => {
            tracing::debug!(version = %only, "found single lib/python<X.Y> directory");
            only.clone()
        }
        [] => {
            tracing::warn!(
                venv = %venv_root.display(),
                fallback = DEFAULT_PYTHON_VERSION,
                "could not detect venv python version; set VENVLINK_PYTHON_VERSION to override"
            );
            DEFAULT_PYTHON_VERSION.to_string()
        }
        many => {
            tracing::warn!(
                venv = %venv_root.display(),
                candidates = ?many,
                fallback = DEFAULT_PYTHON_VERSION,
                "ambiguous venv python version; set VENVLINK_PYTHON_VERSION to override"
            );
            DEFAULT_PYTHON_VERSION.to_string()
        }
    }
}
