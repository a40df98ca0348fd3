//! EnvironmentProbe: where the system library and the managed venv live.
//!
//! `CommandProbe` answers by shelling out to the system interpreter and the
//! venv manager. Tests substitute their own probe with canned answers.

use std::path::{Path, PathBuf};
use std::process::Command;

use regex::Regex;
use venvlink_core::config::LinkerConfig;

/// Discovers the two paths the linker needs.
///
/// Every method returns `None` on any failure; callers turn that into the
/// appropriate `BootstrapError`.
pub trait EnvironmentProbe {
    /// Directory containing the installed module `module_name`, as seen by
    /// the system interpreter.
    fn find_install_dir(&self, module_name: &str) -> Option<PathBuf>;

    /// Root of the virtual environment the manager uses for this project.
    fn find_active_venv_root(&self) -> Option<PathBuf>;

    /// `major.minor` of the interpreter inside `venv_root`.
    fn find_python_version(&self, _venv_root: &Path) -> Option<String> {
        None
    }
}

/// Probe backed by subprocesses.
#[derive(Debug, Clone)]
pub struct CommandProbe {
    python: String,
    manager: String,
    venv_var: String,
}

impl CommandProbe {
    pub fn new(config: &LinkerConfig) -> Self {
        Self {
            python: config.python.clone(),
            manager: config.manager.clone(),
            venv_var: config.venv_var.clone(),
        }
    }
}

impl EnvironmentProbe for CommandProbe {
    fn find_install_dir(&self, module_name: &str) -> Option<PathBuf> {
        if !is_module_name(module_name) {
            tracing::warn!(module = module_name, "not a valid Python module name");
            return None;
        }
        let python = locate(&self.python)?;
        let script = format!(
            "import os, {m}; print(os.path.dirname(os.path.abspath({m}.__file__)))",
            m = module_name
        );
        let stdout = run_capture(Command::new(&python).arg("-c").arg(&script))?;
        last_line(&stdout).map(PathBuf::from)
    }

    fn find_active_venv_root(&self) -> Option<PathBuf> {
        let manager = locate(&self.manager)?;
        let stdout = run_capture(Command::new(&manager).args(["run", "env"]))?;
        parse_env_assignment(&stdout, &self.venv_var).map(PathBuf::from)
    }

    fn find_python_version(&self, venv_root: &Path) -> Option<String> {
        let python = venv_interpreter(venv_root)?;
        let stdout = run_capture(
            Command::new(&python)
                .arg("-c")
                .arg("import sys; print('%d.%d' % sys.version_info[:2])"),
        )?;
        let version = last_line(&stdout)?;
        if is_python_version(&version) {
            Some(version)
        } else {
            tracing::debug!(output = %version, "unexpected interpreter version output");
            None
        }
    }
}

/// Resolve an executable name or path through PATH.
fn locate(program: &str) -> Option<PathBuf> {
    match which::which(program) {
        Ok(p) => Some(p),
        Err(e) => {
            tracing::debug!(program, error = %e, "executable not found");
            None
        }
    }
}

/// Run to completion and return stdout, or `None` if spawning fails or the
/// exit status is non-zero.
fn run_capture(cmd: &mut Command) -> Option<String> {
    let out = match cmd.output() {
        Ok(out) => out,
        Err(e) => {
            tracing::debug!(command = ?cmd, error = %e, "spawn failed");
            return None;
        }
    };
    if !out.status.success() {
        tracing::debug!(
            command = ?cmd,
            status = %out.status,
            stderr = %String::from_utf8_lossy(&out.stderr).trim(),
            "command failed"
        );
        return None;
    }
    Some(String::from_utf8_lossy(&out.stdout).into_owned())
}

/// Interpreter inside a venv (`bin/python` on Unix, `Scripts/python.exe` on Windows).
pub fn venv_interpreter(venv_root: &Path) -> Option<PathBuf> {
    [
        venv_root.join("bin").join("python"),
        venv_root.join("bin").join("python3"),
        venv_root.join("Scripts").join("python.exe"),
    ]
    .into_iter()
    .find(|p| p.exists())
}

/// Last non-empty trimmed line. Imports that print banners end up above it.
fn last_line(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .last()
        .map(String::from)
}

/// Extract `value` from a `VAR=value` line of an `env` dump. Empty values
/// count as unset.
pub fn parse_env_assignment(output: &str, var: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let value = line.strip_prefix(var)?.strip_prefix('=')?.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    })
}

/// Top-level Python identifier, safe to splice into `python -c`.
///
/// Dotted submodules are rejected: the link is named after the library, and
/// `site-packages/pkg.sub` is not importable as anything.
pub fn is_module_name(name: &str) -> bool {
    let re = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
        .expect("module name regex is valid");
    re.is_match(name)
}

/// `X.Y` with numeric components.
pub fn is_python_version(s: &str) -> bool {
    let re = Regex::new(r"^\d+\.\d+$").expect("version regex is valid");
    re.is_match(s)
}
