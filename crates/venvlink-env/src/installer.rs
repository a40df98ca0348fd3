//! Delegated dependency installation (`<manager> install`).

use std::process::Command;

use crate::error::BootstrapError;

/// Installs the project's declared dependencies into its venv.
pub trait DependencyInstaller {
    fn install(&self) -> Result<(), BootstrapError>;
}

/// Runs `<manager> install` with inherited stdio so its progress is visible.
#[derive(Debug, Clone)]
pub struct ManagerInstaller {
    manager: String,
}

impl ManagerInstaller {
    pub fn new(manager: impl Into<String>) -> Self {
        Self {
            manager: manager.into(),
        }
    }
}

impl DependencyInstaller for ManagerInstaller {
    fn install(&self) -> Result<(), BootstrapError> {
        let fail = |code: Option<i32>, reason: String| BootstrapError::DependencyInstallFailed {
            manager: self.manager.clone(),
            code,
            reason,
        };

        let program = which::which(&self.manager)
            .map_err(|e| fail(None, format!("`{}` not found: {}", self.manager, e)))?;
        tracing::info!(manager = %self.manager, "installing dependencies");
        let status = Command::new(&program)
            .arg("install")
            .status()
            .map_err(|e| fail(None, e.to_string()))?;
        if !status.success() {
            return Err(fail(status.code(), status.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_manager_is_install_failure() {
        let err = ManagerInstaller::new("venvlink-test-no-such-manager")
            .install()
            .unwrap_err();
        match &err {
            BootstrapError::DependencyInstallFailed { code, manager, .. } => {
                assert_eq!(*code, None);
                assert_eq!(manager, "venvlink-test-no-such-manager");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.exit_code(), 5);
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_code_is_carried() {
        let err = ManagerInstaller::new("false").install().unwrap_err();
        assert!(matches!(
            err,
            BootstrapError::DependencyInstallFailed { code: Some(1), .. }
        ));
        assert_eq!(err.exit_code(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_install() {
        ManagerInstaller::new("true").install().unwrap();
    }
}
