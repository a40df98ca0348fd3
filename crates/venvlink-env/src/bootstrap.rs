//! Aggregate entry point: resolve, link, install.
//!
//! Fail-fast. Nothing here exits the process; the CLI maps
//! [`BootstrapError`] to exit codes.

use serde::Serialize;
use venvlink_core::config::LinkerConfig;

use crate::error::BootstrapError;
use crate::installer::DependencyInstaller;
use crate::linker::{ensure_link, LinkOutcome, LinkPlan};
use crate::probe::EnvironmentProbe;
use crate::site_packages::{link_target, resolve_python_version};

/// Which steps of the aggregate to run. A skipped step counts as satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapOptions {
    pub link: bool,
    pub install: bool,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            link: true,
            install: true,
        }
    }
}

/// Outcome of a successful [`bootstrap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    pub plan: Option<LinkPlan>,
    pub link: Option<LinkOutcome>,
    pub dependencies_installed: bool,
}

/// Resolve the library directory, venv root and python version. Read-only.
pub fn plan(
    probe: &dyn EnvironmentProbe,
    config: &LinkerConfig,
) -> Result<LinkPlan, BootstrapError> {
    let library_path = probe
        .find_install_dir(&config.library)
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| BootstrapError::LibraryNotFound {
            library: config.library.clone(),
            python: config.python.clone(),
        })?;
    tracing::debug!(library_path = %library_path.display(), "resolved library");

    let venv_root = probe
        .find_active_venv_root()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| BootstrapError::VenvNotFound {
            manager: config.manager.clone(),
        })?;
    tracing::debug!(venv_root = %venv_root.display(), "resolved venv");

    let python_version = resolve_python_version(probe, config, &venv_root);
    let target = link_target(&venv_root, &python_version, &config.library);

    Ok(LinkPlan {
        library: config.library.clone(),
        library_path,
        venv_root,
        python_version,
        target,
    })
}

/// Run the link step then the install step, stopping at the first failure.
pub fn bootstrap(
    probe: &dyn EnvironmentProbe,
    installer: &dyn DependencyInstaller,
    config: &LinkerConfig,
    options: BootstrapOptions,
) -> Result<BootstrapReport, BootstrapError> {
    let mut report = BootstrapReport {
        plan: None,
        link: None,
        dependencies_installed: false,
    };

    if options.link {
        let plan = plan(probe, config)?;
        report.link = Some(ensure_link(&plan)?);
        report.plan = Some(plan);
    }

    if options.install {
        installer.install()?;
        report.dependencies_installed = true;
    }

    Ok(report)
}
