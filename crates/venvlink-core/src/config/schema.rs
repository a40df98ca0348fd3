//! Config structs grouped by concern, loaded from the environment.

use super::env_keys::{linker as linker_keys, observability as obv_keys};
use super::loader::{env_bool, env_optional, env_or, load_dotenv};

/// Site-packages version segment used when nothing better can be detected.
pub const DEFAULT_PYTHON_VERSION: &str = "3.7";

/// What to link and which external tools to ask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkerConfig {
    /// Importable module name, also the link's file name.
    pub library: String,
    /// System interpreter used to locate the library.
    pub python: String,
    /// Virtual-environment manager executable.
    pub manager: String,
    /// Variable holding the venv root in the manager's `run env` output.
    pub venv_var: String,
    /// Explicit `X.Y` for the site-packages path; `None` means detect.
    pub python_version: Option<String>,
}

impl Default for LinkerConfig {
    fn default() -> Self {
        Self {
            library: "graph_tool".to_string(),
            python: "python3".to_string(),
            manager: "poetry".to_string(),
            venv_var: "VIRTUAL_ENV".to_string(),
            python_version: None,
        }
    }
}

impl LinkerConfig {
    /// Load from the environment (and `.env`); unset values take the defaults.
    pub fn from_env() -> Self {
        load_dotenv();
        let defaults = Self::default();
        Self {
            library: env_or(linker_keys::VENVLINK_LIBRARY, &[], || defaults.library),
            python: env_or(linker_keys::VENVLINK_PYTHON, &[], || defaults.python),
            manager: env_or(
                linker_keys::VENVLINK_MANAGER,
                linker_keys::MANAGER_ALIASES,
                || defaults.manager,
            ),
            venv_var: env_or(linker_keys::VENVLINK_VENV_VAR, &[], || defaults.venv_var),
            python_version: env_optional(linker_keys::VENVLINK_PYTHON_VERSION, &[]),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        load_dotenv();
        Self {
            quiet: env_bool(obv_keys::VENVLINK_QUIET, &[], false),
            log_level: env_or(obv_keys::VENVLINK_LOG_LEVEL, &[], || {
                "venvlink=info,venvlink_env=info".to_string()
            }),
            log_json: env_bool(obv_keys::VENVLINK_LOG_JSON, &[], false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linker_defaults() {
        let cfg = LinkerConfig::default();
        assert_eq!(cfg.library, "graph_tool");
        assert_eq!(cfg.manager, "poetry");
        assert_eq!(cfg.venv_var, "VIRTUAL_ENV");
        assert!(cfg.python_version.is_none());
    }
}
