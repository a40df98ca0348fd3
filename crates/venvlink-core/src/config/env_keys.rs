//! Environment variable keys.

/// What gets linked, and which tools are asked about it.
pub mod linker {
    /// Importable module name of the system library (e.g. `graph_tool`).
    pub const VENVLINK_LIBRARY: &str = "VENVLINK_LIBRARY";

    /// System interpreter that can import the library.
    pub const VENVLINK_PYTHON: &str = "VENVLINK_PYTHON";

    /// Virtual-environment manager executable.
    pub const VENVLINK_MANAGER: &str = "VENVLINK_MANAGER";
    pub const MANAGER_ALIASES: &[&str] = &["POETRY_BIN"];

    /// Variable the manager's `run env` output is scanned for.
    pub const VENVLINK_VENV_VAR: &str = "VENVLINK_VENV_VAR";

    /// Pin the site-packages `python<X.Y>` segment instead of detecting it.
    pub const VENVLINK_PYTHON_VERSION: &str = "VENVLINK_PYTHON_VERSION";
}

/// Logging.
pub mod observability {
    pub const VENVLINK_QUIET: &str = "VENVLINK_QUIET";
    pub const VENVLINK_LOG_LEVEL: &str = "VENVLINK_LOG_LEVEL";
    pub const VENVLINK_LOG_JSON: &str = "VENVLINK_LOG_JSON";
}
