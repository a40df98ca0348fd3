use clap::{Args, Parser, Subcommand};
use venvlink_core::config::{env_keys::linker as keys, LinkerConfig};
use venvlink_env::probe::is_python_version;

/// venvlink - expose a system-installed Python library inside a poetry venv
#[derive(Parser, Debug)]
#[command(name = "venvlink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub linker: LinkerArgs,

    /// Defaults to `all`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Overrides for `LinkerConfig`. Unset flags fall back to VENVLINK_* / `.env`.
#[derive(Args, Debug, Default, Clone)]
pub struct LinkerArgs {
    /// Module name of the system library to link
    #[arg(long, global = true, env = keys::VENVLINK_LIBRARY, value_name = "MODULE")]
    pub library: Option<String>,

    /// System interpreter that can import the library
    #[arg(long, global = true, env = keys::VENVLINK_PYTHON, value_name = "PYTHON")]
    pub python: Option<String>,

    /// Virtual-environment manager executable
    #[arg(long, global = true, env = keys::VENVLINK_MANAGER, value_name = "MANAGER")]
    pub manager: Option<String>,

    /// Python `X.Y` for the site-packages path (default: detect from the venv)
    #[arg(
        long,
        global = true,
        env = keys::VENVLINK_PYTHON_VERSION,
        value_name = "X.Y",
        value_parser = parse_python_version
    )]
    pub python_version: Option<String>,
}

fn parse_python_version(s: &str) -> Result<String, String> {
    let s = s.trim();
    if is_python_version(s) {
        Ok(s.to_string())
    } else {
        Err(format!("expected MAJOR.MINOR such as 3.11, got `{}`", s))
    }
}

impl LinkerArgs {
    /// Apply flags on top of `base`.
    pub fn apply(&self, base: LinkerConfig) -> LinkerConfig {
        LinkerConfig {
            library: self.library.clone().unwrap_or(base.library),
            python: self.python.clone().unwrap_or(base.python),
            manager: self.manager.clone().unwrap_or(base.manager),
            venv_var: base.venv_var,
            python_version: self.python_version.clone().or(base.python_version),
        }
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Link the library into the venv, then install the project's dependencies
    All,

    /// Link the library into the venv's site-packages (no-op if already present)
    Link,

    /// Run `<manager> install`
    Install,

    /// Show resolved paths and link state without changing anything
    Check {
        /// Print JSON instead of text
        #[arg(long, default_value = "false")]
        json: bool,
    },
}
