//! Link a system-installed library into a venv's site-packages.
//!
//! The link is created once and never updated or removed. Anything already
//! at the target path, link or not, counts as satisfied.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::BootstrapError;

/// Fully resolved inputs of [`ensure_link`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkPlan {
    pub library: String,
    pub library_path: PathBuf,
    pub venv_root: PathBuf,
    pub python_version: String,
    pub target: PathBuf,
}

/// What [`ensure_link`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkOutcome {
    Created,
    AlreadyPresent,
}

/// What currently sits at a link target. Read-only; used by `check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LinkStatus {
    Missing,
    Symlink { points_to: PathBuf },
    Occupied,
}

/// Inspect `target` without following it.
pub fn link_status(target: &Path) -> LinkStatus {
    match std::fs::symlink_metadata(target) {
        Err(_) => LinkStatus::Missing,
        Ok(meta) if meta.file_type().is_symlink() => LinkStatus::Symlink {
            points_to: std::fs::read_link(target).unwrap_or_default(),
        },
        Ok(_) => LinkStatus::Occupied,
    }
}

/// Create `plan.target -> plan.library_path` unless something already exists
/// at `plan.target`.
///
/// Requires the library directory and the site-packages directory to exist;
/// neither is created here.
pub fn ensure_link(plan: &LinkPlan) -> Result<LinkOutcome, BootstrapError> {
    let fail = |reason: String| BootstrapError::LinkCreationFailed {
        target: plan.target.clone(),
        library_path: plan.library_path.clone(),
        reason,
    };

    match link_status(&plan.target) {
        LinkStatus::Missing => {}
        LinkStatus::Symlink { points_to } => {
            if points_to != plan.library_path {
                tracing::warn!(
                    target = %plan.target.display(),
                    points_to = %points_to.display(),
                    expected = %plan.library_path.display(),
                    "existing link points elsewhere; leaving it untouched"
                );
            }
            tracing::info!(target = %plan.target.display(), "link already present");
            return Ok(LinkOutcome::AlreadyPresent);
        }
        LinkStatus::Occupied => {
            tracing::info!(
                target = %plan.target.display(),
                "target already exists and is not a link; leaving it untouched"
            );
            return Ok(LinkOutcome::AlreadyPresent);
        }
    }

    if !plan.library_path.is_dir() {
        return Err(fail("library directory does not exist".to_string()));
    }
    let site_packages = plan
        .target
        .parent()
        .ok_or_else(|| fail("target has no parent directory".to_string()))?;
    if !site_packages.is_dir() {
        return Err(fail(format!(
            "site-packages directory {} does not exist (is python {} the venv's interpreter?)",
            site_packages.display(),
            plan.python_version
        )));
    }

    create_symlink(&plan.library_path, &plan.target).map_err(|e| fail(e.to_string()))?;
    tracing::info!(
        target = %plan.target.display(),
        library_path = %plan.library_path.display(),
        "linked library into venv"
    );
    Ok(LinkOutcome::Created)
}

#[cfg(unix)]
fn create_symlink(original: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(original, link)
}

#[cfg(windows)]
fn create_symlink(original: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(original, link)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::site_packages::link_target;

    struct Fixture {
        _dir: tempfile::TempDir,
        plan: LinkPlan,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let library_path = dir.path().join("opt/libs/graph_tool");
        std::fs::create_dir_all(&library_path).unwrap();
        std::fs::write(library_path.join("__init__.py"), "").unwrap();
        let venv_root = dir.path().join("venvs/proj");
        std::fs::create_dir_all(venv_root.join("lib/python3.7/site-packages")).unwrap();
        let plan = LinkPlan {
            library: "graph_tool".to_string(),
            target: link_target(&venv_root, "3.7", "graph_tool"),
            library_path,
            venv_root,
            python_version: "3.7".to_string(),
        };
        Fixture { _dir: dir, plan }
    }

    #[test]
    fn test_creates_link_to_library() {
        let fx = fixture();
        assert_eq!(link_status(&fx.plan.target), LinkStatus::Missing);
        assert_eq!(ensure_link(&fx.plan).unwrap(), LinkOutcome::Created);
        assert_eq!(
            std::fs::read_link(&fx.plan.target).unwrap(),
            fx.plan.library_path
        );
        assert!(fx.plan.target.join("__init__.py").exists());
    }

    #[test]
    fn test_second_run_is_noop() {
        let fx = fixture();
        assert_eq!(ensure_link(&fx.plan).unwrap(), LinkOutcome::Created);
        let before = std::fs::symlink_metadata(&fx.plan.target)
            .unwrap()
            .modified()
            .unwrap();
        assert_eq!(ensure_link(&fx.plan).unwrap(), LinkOutcome::AlreadyPresent);
        let after = std::fs::symlink_metadata(&fx.plan.target)
            .unwrap()
            .modified()
            .unwrap();
        assert_eq!(before, after);
        let entries: Vec<_> = std::fs::read_dir(fx.plan.target.parent().unwrap())
            .unwrap()
            .collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_real_directory_is_left_alone() {
        let fx = fixture();
        std::fs::create_dir_all(&fx.plan.target).unwrap();
        std::fs::write(fx.plan.target.join("marker"), "keep").unwrap();
        assert_eq!(ensure_link(&fx.plan).unwrap(), LinkOutcome::AlreadyPresent);
        assert_eq!(link_status(&fx.plan.target), LinkStatus::Occupied);
        assert_eq!(
            std::fs::read_to_string(fx.plan.target.join("marker")).unwrap(),
            "keep"
        );
    }

    #[test]
    fn test_foreign_symlink_is_left_alone() {
        let fx = fixture();
        let other = fx.plan.venv_root.join("elsewhere");
        std::fs::create_dir_all(&other).unwrap();
        std::os::unix::fs::symlink(&other, &fx.plan.target).unwrap();
        assert_eq!(ensure_link(&fx.plan).unwrap(), LinkOutcome::AlreadyPresent);
        assert_eq!(
            link_status(&fx.plan.target),
            LinkStatus::Symlink { points_to: other }
        );
    }

    #[test]
    fn test_missing_library_dir_fails_without_writing() {
        let mut fx = fixture();
        fx.plan.library_path = fx.plan.venv_root.join("no/such/graph_tool");
        let err = ensure_link(&fx.plan).unwrap_err();
        assert!(matches!(err, BootstrapError::LinkCreationFailed { .. }));
        assert_eq!(link_status(&fx.plan.target), LinkStatus::Missing);
    }

    #[test]
    fn test_missing_site_packages_fails() {
        let mut fx = fixture();
        fx.plan.python_version = "3.12".to_string();
        fx.plan.target = link_target(&fx.plan.venv_root, "3.12", "graph_tool");
        let err = ensure_link(&fx.plan).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("site-packages directory"));
        assert!(!fx.plan.venv_root.join("lib/python3.12").exists());
    }
}
