//! Bootstrap failure taxonomy. Every variant is fatal to the run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the probe/link/install steps.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(
        "`{library}` is not importable by `{python}`.\n  \
         Install it for the system interpreter (e.g. `apt install python3-graph-tool`, \
         `brew install graph-tool`, or `conda install -c conda-forge graph-tool`), \
         then re-run."
    )]
    LibraryNotFound { library: String, python: String },

    #[error(
        "No virtual environment found via `{manager} run env`.\n  \
         Install {manager} and run `{manager} install` at least once in this project, \
         then re-run."
    )]
    VenvNotFound { manager: String },

    #[error("Cannot link {} -> {}: {reason}", .target.display(), .library_path.display())]
    LinkCreationFailed {
        target: PathBuf,
        library_path: PathBuf,
        reason: String,
    },

    #[error("`{manager} install` failed: {reason}")]
    DependencyInstallFailed {
        manager: String,
        code: Option<i32>,
        reason: String,
    },
}

impl BootstrapError {
    /// Short stable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LibraryNotFound { .. } => "LibraryNotFound",
            Self::VenvNotFound { .. } => "VenvNotFound",
            Self::LinkCreationFailed { .. } => "LinkCreationFailed",
            Self::DependencyInstallFailed { .. } => "DependencyInstallFailed",
        }
    }

    /// Process exit code for this error. A failed install propagates the
    /// manager's own exit code when it has one.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::LibraryNotFound { .. } => 2,
            Self::VenvNotFound { .. } => 3,
            Self::LinkCreationFailed { .. } => 4,
            Self::DependencyInstallFailed { code, .. } => match code {
                Some(c) if (1..=255).contains(c) => *c as u8,
                _ => 5,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_distinct() {
        let lib = BootstrapError::LibraryNotFound {
            library: "graph_tool".into(),
            python: "python3".into(),
        };
        let venv = BootstrapError::VenvNotFound {
            manager: "poetry".into(),
        };
        let link = BootstrapError::LinkCreationFailed {
            target: PathBuf::from("/t"),
            library_path: PathBuf::from("/s"),
            reason: "denied".into(),
        };
        assert_eq!(lib.exit_code(), 2);
        assert_eq!(venv.exit_code(), 3);
        assert_eq!(link.exit_code(), 4);
        assert_eq!(link.kind(), "LinkCreationFailed");
    }

    #[test]
    fn test_install_exit_code_propagates() {
        let with_code = BootstrapError::DependencyInstallFailed {
            manager: "poetry".into(),
            code: Some(17),
            reason: "exit status 17".into(),
        };
        let killed = BootstrapError::DependencyInstallFailed {
            manager: "poetry".into(),
            code: None,
            reason: "terminated by signal".into(),
        };
        let out_of_range = BootstrapError::DependencyInstallFailed {
            manager: "poetry".into(),
            code: Some(256),
            reason: "exit status 256".into(),
        };
        assert_eq!(with_code.exit_code(), 17);
        assert_eq!(killed.exit_code(), 5);
        assert_eq!(out_of_range.exit_code(), 5);
    }

    #[test]
    fn test_messages_name_the_remedy() {
        let venv = BootstrapError::VenvNotFound {
            manager: "poetry".into(),
        };
        assert!(venv.to_string().contains("poetry install"));
        let lib = BootstrapError::LibraryNotFound {
            library: "graph_tool".into(),
            python: "python3".into(),
        };
        assert!(lib.to_string().contains("`graph_tool` is not importable by `python3`"));
    }
}
